//! Choked mass flow and throat sizing.
//!
//! With sonic flow at the throat, the mass flow rate depends only on the
//! throat area and stagnation conditions:
//!
//! `ṁ = A*·p₀·sqrt(γ/(R·T₀))·(2/(γ + 1))^((γ + 1)/(2(γ − 1)))`

use uom::si::{
    area::square_meter,
    f64::{Area, MassRate, Pressure, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::gas::PerfectGas;

use super::{FlowError, isentropic::check_positive};

/// Computes the choked mass flow rate through a throat.
///
/// # Errors
///
/// Returns [`FlowError::OutOfDomain`] unless the throat area and stagnation
/// pressure and temperature are all strictly positive.
pub fn mass_flow_rate(
    gas: &PerfectGas,
    throat_area: Area,
    stagnation_pressure: Pressure,
    stagnation_temperature: ThermodynamicTemperature,
) -> Result<MassRate, FlowError> {
    let area = throat_area.get::<square_meter>();
    check_positive("throat area", area)?;

    let flux = choked_mass_flux(gas, stagnation_pressure, stagnation_temperature)?;
    Ok(MassRate::new::<kilogram_per_second>(area * flux))
}

/// Sizes the throat area that chokes a desired mass flow rate.
///
/// This is the inverse of [`mass_flow_rate`].
///
/// # Errors
///
/// Returns [`FlowError::OutOfDomain`] unless the mass flow rate and stagnation
/// pressure and temperature are all strictly positive.
pub fn throat_area(
    gas: &PerfectGas,
    mass_flow: MassRate,
    stagnation_pressure: Pressure,
    stagnation_temperature: ThermodynamicTemperature,
) -> Result<Area, FlowError> {
    let m_dot = mass_flow.get::<kilogram_per_second>();
    check_positive("mass flow rate", m_dot)?;

    let flux = choked_mass_flux(gas, stagnation_pressure, stagnation_temperature)?;
    Ok(Area::new::<square_meter>(m_dot / flux))
}

/// Choked mass flow per unit throat area, kg/(s·m²).
fn choked_mass_flux(
    gas: &PerfectGas,
    stagnation_pressure: Pressure,
    stagnation_temperature: ThermodynamicTemperature,
) -> Result<f64, FlowError> {
    let p0 = stagnation_pressure.get::<pascal>();
    let t0 = stagnation_temperature.get::<kelvin>();
    check_positive("stagnation pressure", p0)?;
    check_positive("stagnation temperature", t0)?;

    let gamma = gas.gamma();
    let r = gas.gas_constant().get::<joule_per_kilogram_kelvin>();

    Ok(p0 * (*gamma / (r * t0)).sqrt() * gamma.choked_factor())
}
