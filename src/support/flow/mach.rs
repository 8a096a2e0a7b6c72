use std::ops::Deref;

use crate::support::constraint::{Constrained, NonNegative};

use super::FlowError;

/// Flow regime relative to the local speed of sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowRegime {
    Subsonic,
    Sonic,
    Supersonic,
}

/// A non-negative, finite Mach number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct MachNumber(Constrained<f64, NonNegative>);

impl MachNumber {
    /// Creates a Mach number.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::OutOfDomain`] if the value is negative, `NaN`, or infinite.
    pub fn new(value: f64) -> Result<Self, FlowError> {
        let mach = NonNegative::new(value)
            .map_err(|err| FlowError::out_of_domain(format!("mach number {value}: {err}")))?;
        if !value.is_finite() {
            return Err(FlowError::out_of_domain("mach number must be finite"));
        }
        Ok(Self(mach))
    }

    /// Mach 1.
    #[must_use]
    pub fn sonic() -> Self {
        Self::new(1.0).expect("1 is a valid mach number")
    }

    /// Returns the flow regime of this Mach number.
    #[must_use]
    pub fn regime(self) -> FlowRegime {
        let m = *self;
        if m < 1.0 {
            FlowRegime::Subsonic
        } else if m > 1.0 {
            FlowRegime::Supersonic
        } else {
            FlowRegime::Sonic
        }
    }
}

impl Deref for MachNumber {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
