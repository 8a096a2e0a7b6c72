use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;

use crate::support::gas::{GasFluid, GasParameters};
use crate::support::units::SpecificGasConstant;

/// Canonical identifier for carbon dioxide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarbonDioxide;

impl GasFluid for CarbonDioxide {
    fn parameters() -> GasParameters {
        // Room-temperature cp; gamma follows from cv = cp - R.
        let r = 188.92;
        let cp = 844.0;

        GasParameters {
            gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(r),
            gamma: cp / (cp - r),
        }
    }
}
