use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;

use crate::support::gas::{GasFluid, GasParameters};
use crate::support::units::SpecificGasConstant;

/// Canonical identifier for dry air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Air;

impl GasFluid for Air {
    fn parameters() -> GasParameters {
        GasParameters {
            gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.05),
            gamma: 1.4,
        }
    }
}
