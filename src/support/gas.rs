//! Calorically perfect gas configuration.
//!
//! Every compressible flow relation in this crate assumes a calorically
//! perfect gas: `p = ρ·R·T` with constant specific heats.
//! Such a gas is fully described by two numbers, the specific gas constant `R`
//! and the heat capacity ratio `γ = cp/cv`.
//!
//! [`PerfectGas`] bundles those two values and is passed explicitly into the
//! relations that need them, so the same engine works for air, combustion
//! products, or any other gas the caller describes.
//!
//! ```
//! use nozzle_models::support::gas::{PerfectGas, fluid::{Air, CarbonDioxide}};
//!
//! let air = PerfectGas::air();
//! assert_eq!(*air.gamma(), 1.4);
//!
//! let co2 = PerfectGas::of::<CarbonDioxide>().unwrap();
//! assert!(*co2.gamma() < *air.gamma());
//! # let _ = Air;
//! ```

mod error;
mod gamma;
mod perfect_gas;

pub mod fluid;

pub(crate) mod ideal_gas_eos;

pub use error::GasError;
pub use gamma::HeatCapacityRatio;
pub use perfect_gas::{GasFluid, GasParameters, PerfectGas};
