use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::support::gas::GasError;

/// Errors raised by the compressible flow relations.
///
/// [`FlowError::OutOfDomain`] and [`FlowError::Degenerate`] are kept apart:
/// the first means an input is physically invalid on its own, the second
/// means otherwise valid inputs combine into a singular or unsolvable case.
#[derive(Debug, Error)]
pub enum FlowError {
    /// A physically invalid input, such as `γ ≤ 1` or a subsonic shock.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// A numerically degenerate case, such as the area ratio at `M = 0`.
    #[error("numeric degeneracy: {context}")]
    Degenerate { context: String },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best area ratio residual achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

impl FlowError {
    pub(crate) fn out_of_domain(context: impl Into<String>) -> Self {
        Self::OutOfDomain {
            context: context.into(),
        }
    }

    pub(crate) fn degenerate(context: impl Into<String>) -> Self {
        Self::Degenerate {
            context: context.into(),
        }
    }

    /// Returns `true` for errors caused by physically invalid input.
    #[must_use]
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Self::OutOfDomain { .. })
    }
}

impl From<GasError> for FlowError {
    fn from(err: GasError) -> Self {
        Self::out_of_domain(err.to_string())
    }
}
