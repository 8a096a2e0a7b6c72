use twine_solvers::equation::bisection;

/// Solver configuration for inverting the area-Mach relation.
#[derive(Debug, Clone, Copy)]
pub struct AreaMachConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the Mach number search variable.
    pub mach_tol: f64,

    /// Tolerance on the relative area ratio residual, `(A/A*)/target − 1`.
    pub ratio_tol: f64,
}

impl Default for AreaMachConfig {
    fn default() -> Self {
        Self {
            max_iters: 200,
            mach_tol: 1e-12,
            ratio_tol: 1e-12,
        }
    }
}

impl AreaMachConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.mach_tol,
            x_rel_tol: 0.0,
            residual_tol: self.ratio_tol,
        }
    }
}
