use std::cmp::Ordering;

use num_traits::{One, Zero};

use super::{Constrained, Constraint, ConstraintError};

/// Strictly greater than one.
///
/// The heat capacity ratio of any real gas and the Mach number upstream of a
/// normal shock both satisfy `x > 1`.
///
/// ```
/// use nozzle_models::support::constraint::AboveOne;
///
/// assert_eq!(AboveOne::new(1.4).unwrap().get(), 1.4);
/// assert!(AboveOne::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AboveOne;

/// Strictly between zero and one.
///
/// The Mach number downstream of a normal shock always lies here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalOpen;

impl AboveOne {
    /// Wraps `value` if it exceeds one.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::BelowMinimum`] or [`ConstraintError::NotANumber`].
    pub fn new<T: PartialOrd + One>(value: T) -> Result<Constrained<T, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl UnitIntervalOpen {
    /// Wraps `value` if `0 < value < 1`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::BelowMinimum`] at or below zero,
    /// [`ConstraintError::AboveMaximum`] at or above one, and
    /// [`ConstraintError::NotANumber`] for `NaN`.
    pub fn new<T: PartialOrd + Zero + One>(
        value: T,
    ) -> Result<Constrained<T, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + One> Constraint<T> for AboveOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match compare(value, &T::one())? {
            Ordering::Greater => Ok(()),
            Ordering::Less | Ordering::Equal => Err(ConstraintError::BelowMinimum),
        }
    }
}

impl<T: PartialOrd + Zero + One> Constraint<T> for UnitIntervalOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if compare(value, &T::zero())? != Ordering::Greater {
            return Err(ConstraintError::BelowMinimum);
        }
        if compare(value, &T::one())? != Ordering::Less {
            return Err(ConstraintError::AboveMaximum);
        }
        Ok(())
    }
}

fn compare<T: PartialOrd>(value: &T, bound: &T) -> Result<Ordering, ConstraintError> {
    value.partial_cmp(bound).ok_or(ConstraintError::NotANumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn above_one() {
        assert!(AboveOne::new(1.0 + 1e-12).is_ok());
        assert!(AboveOne::new(f64::INFINITY).is_ok());
        assert_eq!(AboveOne::new(1.0), Err(ConstraintError::BelowMinimum));
        assert_eq!(AboveOne::new(-3.0), Err(ConstraintError::BelowMinimum));
        assert_eq!(AboveOne::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn open_unit_interval() {
        assert!(UnitIntervalOpen::new(0.577).is_ok());
        assert!(UnitIntervalOpen::new(0.999).is_ok());
        assert_eq!(UnitIntervalOpen::new(0.0), Err(ConstraintError::BelowMinimum));
        assert_eq!(UnitIntervalOpen::new(-0.5), Err(ConstraintError::BelowMinimum));
        assert_eq!(UnitIntervalOpen::new(1.0), Err(ConstraintError::AboveMaximum));
        assert_eq!(
            UnitIntervalOpen::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }
}
