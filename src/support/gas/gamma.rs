use std::ops::Deref;

use crate::support::constraint::{AboveOne, Constrained};

use super::GasError;

/// Heat capacity ratio `γ = cp/cv` of a calorically perfect gas.
///
/// Guaranteed finite and strictly greater than one.
/// Every isentropic and normal-shock relation divides by `γ − 1`,
/// so `γ = 1` is rejected here rather than surfacing later as an infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatCapacityRatio(Constrained<f64, AboveOne>);

impl HeatCapacityRatio {
    /// Creates a heat capacity ratio.
    ///
    /// # Errors
    ///
    /// Returns [`GasError::HeatCapacityRatio`] if `value ≤ 1` or `NaN`,
    /// and [`GasError::InfiniteHeatCapacityRatio`] if it is infinite.
    pub fn new(value: f64) -> Result<Self, GasError> {
        let gamma = AboveOne::new(value).map_err(|source| GasError::HeatCapacityRatio {
            gamma: value,
            source,
        })?;
        if !value.is_finite() {
            return Err(GasError::InfiniteHeatCapacityRatio);
        }
        Ok(Self(gamma))
    }

    /// Heat capacity ratio of air, 1.4.
    #[must_use]
    pub fn air() -> Self {
        Self::new(1.4).expect("1.4 is a valid heat capacity ratio")
    }

    /// Returns `(γ − 1)/2`, the coefficient of `M²` in the stagnation relations.
    #[must_use]
    pub fn half_gm1(self) -> f64 {
        (*self - 1.0) / 2.0
    }

    /// Returns the stagnation-to-static temperature ratio `1 + (γ − 1)/2·M²`.
    #[must_use]
    pub fn stagnation_factor(self, mach: f64) -> f64 {
        1.0 + self.half_gm1() * mach * mach
    }

    /// Returns `(2/(γ + 1))^((γ + 1)/(2(γ − 1)))`.
    ///
    /// This factor appears in both the choked mass flow relation and the
    /// area-Mach relation.
    #[must_use]
    pub fn choked_factor(self) -> f64 {
        let g = *self;
        (2.0 / (g + 1.0)).powf(self.area_exponent())
    }

    /// Returns `(γ + 1)/(2(γ − 1))`, the exponent of the area-Mach relation.
    #[must_use]
    pub fn area_exponent(self) -> f64 {
        let g = *self;
        (g + 1.0) / (2.0 * (g - 1.0))
    }
}

impl Deref for HeatCapacityRatio {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
