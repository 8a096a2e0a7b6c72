use tracing::{debug, trace};

use crate::support::{
    flow::{
        AreaMachConfig, FlowError, FlowRegime, FlowState, MachNumber, Stagnation,
        area_velocity_relation,
    },
    gas::PerfectGas,
};

use super::AxialProfile;

/// Isentropic flow conditions at one axial station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    pub z: f64,
    pub radius: f64,
    /// Local-to-throat area ratio `(r/rt)²`.
    pub area_ratio: f64,
    pub state: FlowState,
}

/// Computes the design flow along a nozzle profile.
///
/// Assumes a choked throat and a fully expanded diverging section: stations
/// upstream of the throat take the subsonic root of the area-Mach relation,
/// stations downstream the supersonic root, and both throat stations are sonic.
///
/// # Errors
///
/// Returns a [`FlowError`] if the area-Mach relation cannot be inverted at
/// some station.
pub fn flow_distribution(
    profile: &AxialProfile,
    gas: &PerfectGas,
    stagnation: &Stagnation,
    config: &AreaMachConfig,
) -> Result<Vec<Station>, FlowError> {
    let gamma = gas.gamma();
    let throat_index = profile.throat_index();
    let throat_radius = profile.throat_radius();

    let stations = profile
        .points()
        .enumerate()
        .map(|(i, (z, radius))| -> Result<Station, FlowError> {
            let (area_ratio, mach) = if i == throat_index || i == throat_index + 1 {
                (1.0, MachNumber::sonic())
            } else {
                // Envelopes never dip below the throat; this only absorbs rounding.
                let area_ratio = ((radius / throat_radius).powi(2)).max(1.0);
                let regime = if i < throat_index {
                    FlowRegime::Subsonic
                } else {
                    FlowRegime::Supersonic
                };
                (area_ratio, area_velocity_relation(gamma, area_ratio, regime, config)?)
            };

            trace!(z, radius, area_ratio, mach = *mach, "station");

            Ok(Station {
                z,
                radius,
                area_ratio,
                state: FlowState::at(gas, stagnation, mach),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(stations = stations.len(), "computed flow distribution");

    Ok(stations)
}
