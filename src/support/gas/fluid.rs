//! Canonical gas identifiers.
//!
//! A fluid type names a substance and supplies its perfect-gas constants
//! through [`GasFluid`](super::GasFluid).

mod air;
mod carbon_dioxide;

pub use air::Air;
pub use carbon_dioxide::CarbonDioxide;
