use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Zero or greater.
///
/// Mach numbers carry this constraint; a fluid at rest has `M = 0`.
///
/// ```
/// use nozzle_models::support::constraint::NonNegative;
///
/// assert_eq!(NonNegative::new(0.0).unwrap().get(), 0.0);
/// assert!(NonNegative::new(-0.3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

/// Greater than zero.
///
/// Radii, section lengths, stagnation pressure and temperature, throat area,
/// and mass flow rate all carry this constraint.
///
/// ```
/// use nozzle_models::support::constraint::StrictlyPositive;
///
/// assert_eq!(StrictlyPositive::new(2.5).unwrap().get(), 2.5);
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl NonNegative {
    /// Wraps `value` if it is zero or greater.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Negative`] or [`ConstraintError::NotANumber`].
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl StrictlyPositive {
    /// Wraps `value` if it is greater than zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Zero`], [`ConstraintError::Negative`], or
    /// [`ConstraintError::NotANumber`].
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match sign_of(value)? {
            Ordering::Less => Err(ConstraintError::Negative),
            Ordering::Equal | Ordering::Greater => Ok(()),
        }
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match sign_of(value)? {
            Ordering::Less => Err(ConstraintError::Negative),
            Ordering::Equal => Err(ConstraintError::Zero),
            Ordering::Greater => Ok(()),
        }
    }
}

fn sign_of<T: PartialOrd + Zero>(value: &T) -> Result<Ordering, ConstraintError> {
    value
        .partial_cmp(&T::zero())
        .ok_or(ConstraintError::NotANumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Pressure, pressure::kilopascal};

    #[test]
    fn non_negative_floats() {
        assert!(NonNegative::new(0.0).is_ok());
        assert!(NonNegative::new(-0.0).is_ok());
        assert!(NonNegative::new(f64::INFINITY).is_ok());
        assert_eq!(NonNegative::new(-2.0), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn strictly_positive_floats() {
        assert!(StrictlyPositive::new(1e-9).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn integer_resolutions() {
        assert!(StrictlyPositive::new(3_usize).is_ok());
        assert_eq!(StrictlyPositive::new(0_usize), Err(ConstraintError::Zero));
    }

    #[test]
    fn quantities() {
        assert!(StrictlyPositive::new(Pressure::new::<kilopascal>(2_000.0)).is_ok());
        assert!(StrictlyPositive::new(Pressure::new::<kilopascal>(0.0)).is_err());
    }
}
