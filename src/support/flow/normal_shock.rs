//! Normal shock relations for a calorically perfect gas.
//!
//! A normal shock only exists for supersonic upstream flow, so every
//! function taking the upstream Mach number `M₁` rejects `M₁ ≤ 1`.
//! The downstream Mach number `M₂` is always subsonic.

use crate::support::{
    constraint::{AboveOne, UnitIntervalOpen},
    gas::HeatCapacityRatio,
};

use super::{FlowError, MachNumber};

/// Computes the static pressure ratio `p₂/p₁` across a normal shock.
///
/// # Errors
///
/// Returns [`FlowError::OutOfDomain`] if `M₁ ≤ 1`.
pub fn normal_shock_pressure_ratio(
    gamma: HeatCapacityRatio,
    mach1: MachNumber,
) -> Result<f64, FlowError> {
    let m1_sq = upstream_squared(mach1)?;
    let g = *gamma;
    Ok(1.0 + (2.0 * g / (g + 1.0)) * (m1_sq - 1.0))
}

/// Computes the density ratio `ρ₂/ρ₁` across a normal shock.
///
/// # Errors
///
/// Returns [`FlowError::OutOfDomain`] if `M₁ ≤ 1`.
pub fn normal_shock_density_ratio(
    gamma: HeatCapacityRatio,
    mach1: MachNumber,
) -> Result<f64, FlowError> {
    let m1_sq = upstream_squared(mach1)?;
    let g = *gamma;
    Ok(((g + 1.0) * m1_sq) / ((g - 1.0) * m1_sq + 2.0))
}

/// Computes the static temperature ratio `T₂/T₁` across a normal shock.
///
/// Follows from the equation of state as `(p₂/p₁)/(ρ₂/ρ₁)`.
///
/// # Errors
///
/// Returns [`FlowError::OutOfDomain`] if `M₁ ≤ 1`.
pub fn normal_shock_temperature_ratio(
    gamma: HeatCapacityRatio,
    mach1: MachNumber,
) -> Result<f64, FlowError> {
    Ok(normal_shock_pressure_ratio(gamma, mach1)? / normal_shock_density_ratio(gamma, mach1)?)
}

/// Computes the stagnation pressure ratio `p₀₂/p₀₁` across a normal shock.
///
/// The ratio is below one for every physical shock; the difference is the
/// total pressure lost to the irreversible compression.
///
/// # Errors
///
/// Returns [`FlowError::OutOfDomain`] if `M₁ ≤ 1`.
pub fn normal_shock_stagnation_pressure_ratio(
    gamma: HeatCapacityRatio,
    mach1: MachNumber,
) -> Result<f64, FlowError> {
    let m1_sq = upstream_squared(mach1)?;
    let g = *gamma;

    let density_term = normal_shock_density_ratio(gamma, mach1)?.powf(g / (g - 1.0));
    let pressure_term = ((g + 1.0) / (2.0 * g * m1_sq - (g - 1.0))).powf(1.0 / (g - 1.0));
    Ok(density_term * pressure_term)
}

/// Computes the Mach number downstream of a normal shock.
///
/// ```
/// use nozzle_models::support::{
///     flow::{MachNumber, normal_shock_mach2},
///     gas::HeatCapacityRatio,
/// };
///
/// let m2 = normal_shock_mach2(HeatCapacityRatio::air(), MachNumber::new(2.0)?)?;
/// assert!((*m2 - 0.577_35).abs() < 1e-5);
/// # Ok::<(), nozzle_models::support::flow::FlowError>(())
/// ```
///
/// # Errors
///
/// Returns [`FlowError::OutOfDomain`] if `M₁ ≤ 1`.
pub fn normal_shock_mach2(
    gamma: HeatCapacityRatio,
    mach1: MachNumber,
) -> Result<MachNumber, FlowError> {
    let m1_sq = upstream_squared(mach1)?;
    MachNumber::new(shock_mach_map(gamma, m1_sq))
}

/// Computes the upstream Mach number that produces a given downstream Mach number.
///
/// The shock Mach relation is its own inverse, so this applies the same map
/// to `M₂`.
///
/// # Errors
///
/// Returns [`FlowError::OutOfDomain`] unless `0 < M₂ < 1`.
pub fn normal_shock_mach1(
    gamma: HeatCapacityRatio,
    mach2: MachNumber,
) -> Result<MachNumber, FlowError> {
    let m2 = UnitIntervalOpen::new(*mach2)
        .map_err(|err| {
            FlowError::out_of_domain(format!(
                "downstream mach {} must be in (0, 1): {err}",
                *mach2
            ))
        })?
        .into_inner();

    // M₂ tends to sqrt((γ−1)/(2γ)) as M₁ grows without bound.
    // At or below that limit no upstream Mach number exists.
    let limit = ((*gamma - 1.0) / (2.0 * *gamma)).sqrt();
    if m2 <= limit {
        return Err(FlowError::out_of_domain(format!(
            "downstream mach {m2} is at or below the strong-shock limit {limit}"
        )));
    }

    MachNumber::new(shock_mach_map(gamma, m2 * m2))
}

/// `M ↦ sqrt((1 + (γ−1)/2·M²)/(γ·M² − (γ−1)/2))`, taking `M²`.
fn shock_mach_map(gamma: HeatCapacityRatio, m_sq: f64) -> f64 {
    let g = *gamma;
    let half_gm1 = gamma.half_gm1();
    ((1.0 + half_gm1 * m_sq) / (g * m_sq - half_gm1)).sqrt()
}

/// Validates a supersonic upstream Mach number and returns `M₁²`.
fn upstream_squared(mach1: MachNumber) -> Result<f64, FlowError> {
    let m1 = AboveOne::new(*mach1)
        .map_err(|err| {
            FlowError::out_of_domain(format!(
                "normal shock requires supersonic upstream flow, got mach {}: {err}",
                *mach1
            ))
        })?
        .into_inner();
    Ok(m1 * m1)
}
