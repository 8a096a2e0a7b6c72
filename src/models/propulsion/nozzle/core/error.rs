use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors raised while building nozzle geometry.
///
/// Every variant is detected before any array is allocated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A scalar parameter violates its sign constraint.
    #[error("invalid {name} {value}: {source}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// A scalar parameter is infinite.
    #[error("{name} must be finite")]
    NotFinite { name: &'static str },

    /// The chamber or exit radius is narrower than the throat.
    #[error("{name} {radius} is smaller than the throat radius {throat}")]
    NarrowerThanThroat {
        name: &'static str,
        radius: f64,
        throat: f64,
    },

    /// A discretization count is below its minimum.
    #[error("{name} {value} is below the minimum of {min}")]
    InvalidResolution {
        name: &'static str,
        value: usize,
        min: usize,
    },
}
