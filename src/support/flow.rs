//! Quasi-1D compressible flow relations.
//!
//! Pure functions for a calorically perfect gas:
//!
//! - **Isentropic relations**: [`static_pressure`], [`static_density`],
//!   [`static_temperature`], [`velocity`], and the bundled [`FlowState`]
//! - **Choked flow**: [`mass_flow_rate`] and its inverse [`throat_area`]
//! - **Area-Mach relation**: [`area_ratio`], [`area_mach_relation`], and the
//!   branch-aware inverse [`area_velocity_relation`] / [`area_velocity_roots`]
//! - **Normal shocks**: pressure, density, temperature, and stagnation
//!   pressure ratios, plus the upstream/downstream Mach maps
//!
//! Relations that depend only on `γ` take a
//! [`HeatCapacityRatio`](crate::support::gas::HeatCapacityRatio);
//! relations that also need `R` take a [`PerfectGas`](crate::support::gas::PerfectGas).
//!
//! # Example
//!
//! ```
//! use nozzle_models::support::{
//!     flow::{FlowState, MachNumber, Stagnation, normal_shock_pressure_ratio},
//!     gas::PerfectGas,
//! };
//! use uom::si::{
//!     f64::{Pressure, ThermodynamicTemperature},
//!     pressure::kilopascal,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let air = PerfectGas::air();
//! let chamber = Stagnation::new(
//!     Pressure::new::<kilopascal>(700.0),
//!     ThermodynamicTemperature::new::<kelvin>(300.0),
//! )?;
//!
//! let m1 = MachNumber::new(2.0)?;
//! let upstream = FlowState::at(&air, &chamber, m1);
//! let p2 = upstream.pressure * normal_shock_pressure_ratio(air.gamma(), m1)?;
//!
//! assert!(p2 > upstream.pressure);
//! # Ok::<(), nozzle_models::support::flow::FlowError>(())
//! ```

mod area;
mod error;
mod isentropic;
mod mach;
mod mass_flow;
mod normal_shock;

pub use area::{
    AreaMachConfig, MachRoots, area_mach_relation, area_ratio, area_velocity_relation,
    area_velocity_roots,
};
pub use error::FlowError;
pub use isentropic::{
    FlowState, Stagnation, static_density, static_pressure, static_temperature, velocity,
};
pub use mach::{FlowRegime, MachNumber};
pub use mass_flow::{mass_flow_rate, throat_area};
pub use normal_shock::{
    normal_shock_density_ratio, normal_shock_mach1, normal_shock_mach2,
    normal_shock_pressure_ratio, normal_shock_stagnation_pressure_ratio,
    normal_shock_temperature_ratio,
};
