//! Ideal gas equation of state helpers.
//!
//! These functions implement `p = ρ·R·T` and the ideal-gas speed of sound
//! `a = sqrt(γ·R·T)`.

use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature, Velocity},
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::units::SpecificGasConstant;

/// Computes density using the ideal gas equation of state.
#[must_use]
pub(crate) fn density(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    gas_constant: SpecificGasConstant,
) -> MassDensity {
    pressure / (gas_constant * temperature)
}

/// Computes the speed of sound of an ideal gas.
#[must_use]
pub(crate) fn speed_of_sound(
    temperature: ThermodynamicTemperature,
    gamma: f64,
    gas_constant: SpecificGasConstant,
) -> Velocity {
    let r = gas_constant.get::<joule_per_kilogram_kelvin>();
    let t = temperature.get::<kelvin>();
    Velocity::new::<meter_per_second>((gamma * r * t).sqrt())
}
