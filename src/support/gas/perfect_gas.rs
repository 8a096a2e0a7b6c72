//! Calorically perfect gas model.
//!
//! # Assumptions
//!
//! - Ideal gas equation of state: `p = ρ·R·T`
//! - Calorically perfect: `cp` and `cv` are constant, so `γ` is constant
//!
//! These are the standard quasi-1D nozzle assumptions. Real-gas effects,
//! dissociation, and temperature-dependent heat capacities are not modeled.

use uom::si::{
    f64::{MassDensity, Pressure, SpecificHeatCapacity, ThermodynamicTemperature, Velocity},
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::SpecificGasConstant,
};

use super::{GasError, HeatCapacityRatio, ideal_gas_eos};

/// Specific gas constant of air used by [`PerfectGas::air`], J/(kg·K).
const AIR_GAS_CONSTANT: f64 = 287.05;

/// Raw constants describing a gas, before validation.
///
/// These values are typically provided by a fluid's [`GasFluid`] implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasParameters {
    pub gas_constant: SpecificGasConstant,
    pub gamma: f64,
}

/// Fluid constants required by the [`PerfectGas`] model.
pub trait GasFluid {
    /// Returns the constant parameters for use with [`PerfectGas`].
    fn parameters() -> GasParameters;
}

/// Validated perfect gas constants.
///
/// This is the configuration value that flow relations needing `R` take
/// explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGas {
    r: SpecificGasConstant,
    gamma: HeatCapacityRatio,
}

impl PerfectGas {
    /// Creates a perfect gas from its specific gas constant and heat capacity ratio.
    ///
    /// # Errors
    ///
    /// Returns [`GasError::GasConstant`] if `R` is not strictly positive and finite.
    pub fn new(gas_constant: SpecificGasConstant, gamma: HeatCapacityRatio) -> Result<Self, GasError> {
        let r = gas_constant.get::<joule_per_kilogram_kelvin>();
        if StrictlyPositive::check(&r).is_err() || !r.is_finite() {
            return Err(GasError::GasConstant { r: gas_constant });
        }

        Ok(Self {
            r: gas_constant,
            gamma,
        })
    }

    /// Creates a perfect gas from `R` and a constant-pressure heat capacity.
    ///
    /// The heat capacity ratio follows from `cv = cp − R`.
    ///
    /// # Errors
    ///
    /// Returns [`GasError::NonPhysicalCv`] if `cp ≤ R`,
    /// or any error from [`PerfectGas::new`].
    pub fn from_cp(gas_constant: SpecificGasConstant, cp: SpecificHeatCapacity) -> Result<Self, GasError> {
        let r = gas_constant.get::<joule_per_kilogram_kelvin>();
        let cp_value = cp.get::<joule_per_kilogram_kelvin>();
        let cv = cp_value - r;

        if StrictlyPositive::check(&cv).is_err() {
            return Err(GasError::NonPhysicalCv {
                r: gas_constant,
                cp,
            });
        }

        Self::new(gas_constant, HeatCapacityRatio::new(cp_value / cv)?)
    }

    /// Creates a perfect gas using constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`GasError`] if the fluid's constants are non-physical.
    pub fn of<Fluid: GasFluid>() -> Result<Self, GasError> {
        let GasParameters {
            gas_constant,
            gamma,
        } = Fluid::parameters();
        Self::new(gas_constant, HeatCapacityRatio::new(gamma)?)
    }

    /// Air with `R = 287.05 J/(kg·K)` and `γ = 1.4`.
    #[must_use]
    pub fn air() -> Self {
        Self {
            r: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(AIR_GAS_CONSTANT),
            gamma: HeatCapacityRatio::air(),
        }
    }

    /// Returns the specific gas constant.
    #[must_use]
    pub fn gas_constant(&self) -> SpecificGasConstant {
        self.r
    }

    /// Returns the heat capacity ratio.
    #[must_use]
    pub fn gamma(&self) -> HeatCapacityRatio {
        self.gamma
    }

    /// Computes density with `ρ = p/(R·T)`.
    #[must_use]
    pub fn density(&self, temperature: ThermodynamicTemperature, pressure: Pressure) -> MassDensity {
        ideal_gas_eos::density(temperature, pressure, self.r)
    }

    /// Computes the speed of sound with `a = sqrt(γ·R·T)`.
    #[must_use]
    pub fn speed_of_sound(&self, temperature: ThermodynamicTemperature) -> Velocity {
        ideal_gas_eos::speed_of_sound(temperature, *self.gamma, self.r)
    }
}

impl Default for PerfectGas {
    fn default() -> Self {
        Self::air()
    }
}
