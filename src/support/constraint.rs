//! Numeric invariants checked once at construction.
//!
//! Quasi-1D flow and nozzle geometry are full of inputs that only make sense
//! on part of the real line. Radii and lengths must be positive, Mach numbers
//! cannot be negative, and the heat capacity ratio must exceed one.
//! Wrapping a value in [`Constrained<T, C>`] records that its marker `C` has
//! been checked, so downstream code never re-validates it.
//!
//! Markers by sign: [`NonNegative`] (`x ≥ 0`), [`StrictlyPositive`] (`x > 0`).
//! Markers relative to one: [`AboveOne`] (`x > 1`), [`UnitIntervalOpen`]
//! (`0 < x < 1`).
//!
//! `NaN` fails every marker. Infinity passes the open-ended ones; callers
//! that need finite values check that separately.

mod sign;
mod unit;

use std::marker::PhantomData;

use thiserror::Error;

pub use sign::{NonNegative, StrictlyPositive};
pub use unit::{AboveOne, UnitIntervalOpen};

/// A condition a value must satisfy to be wrapped in [`Constrained`].
pub trait Constraint<T> {
    /// Checks `value` against this constraint.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing the first violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Why a value failed a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A value known to satisfy the constraint `C`.
///
/// ```
/// use nozzle_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let throat_radius = Constrained::<f64, StrictlyPositive>::new(0.05).unwrap();
/// assert_eq!(throat_radius.get(), 0.05);
///
/// assert!(Constrained::<f64, StrictlyPositive>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Wraps `value` after checking it against `C`.
    ///
    /// # Errors
    ///
    /// Returns the violation reported by `C`.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Copy, C: Constraint<T>> Constrained<T, C> {
    /// Returns a copy of the checked value.
    pub fn get(&self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
