use thiserror::Error;
use uom::si::f64::SpecificHeatCapacity;

use crate::support::{constraint::ConstraintError, units::SpecificGasConstant};

/// Errors raised while describing a perfect gas.
///
/// All variants are domain errors: the inputs cannot describe a physical gas.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GasError {
    #[error("invalid heat capacity ratio {gamma}: {source}")]
    HeatCapacityRatio {
        gamma: f64,
        #[source]
        source: ConstraintError,
    },
    #[error("heat capacity ratio must be finite")]
    InfiniteHeatCapacityRatio,
    #[error("invalid gas constant R: {r:?}")]
    GasConstant { r: SpecificGasConstant },
    #[error("non-physical heat capacities: cv = cp - R must be > 0; cp={cp:?}, R={r:?}")]
    NonPhysicalCv {
        r: SpecificGasConstant,
        cp: SpecificHeatCapacity,
    },
}
