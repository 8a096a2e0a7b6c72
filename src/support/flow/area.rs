//! Area-Mach relation and its inverse.
//!
//! The isentropic area ratio
//!
//! `A/A* = (1/M)·[(2/(γ + 1))·(1 + (γ − 1)/2·M²)]^((γ + 1)/(2(γ − 1)))`
//!
//! has a minimum of 1 at `M = 1`. Every area ratio above 1 is reached by
//! exactly two Mach numbers, one subsonic and one supersonic.
//! The inverse therefore takes a [`FlowRegime`] to pick the branch,
//! or returns both roots through [`area_velocity_roots`].

mod config;
mod problem;

pub use config::AreaMachConfig;

use tracing::debug;
use twine_solvers::equation::bisection;
use uom::si::{area::square_meter, f64::Area};

use crate::support::gas::HeatCapacityRatio;

use super::{FlowError, FlowRegime, MachNumber, isentropic::check_positive};

use problem::{AreaMachModel, AreaMachProblem};

/// Largest Mach number tried when bracketing the supersonic root.
const MAX_BRACKET_MACH: f64 = 1.0e6;

/// Both Mach numbers that produce a given area ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachRoots {
    pub subsonic: MachNumber,
    pub supersonic: MachNumber,
}

/// Computes the isentropic area ratio `A/A*` at a Mach number.
///
/// # Errors
///
/// Returns [`FlowError::Degenerate`] at `M = 0`, where the ratio is unbounded.
pub fn area_ratio(gamma: HeatCapacityRatio, mach: MachNumber) -> Result<f64, FlowError> {
    let m = *mach;
    if m == 0.0 {
        return Err(FlowError::degenerate(
            "area ratio is unbounded at mach 0",
        ));
    }

    let g = *gamma;
    let base = (2.0 / (g + 1.0)) * gamma.stagnation_factor(m);
    Ok(base.powf(gamma.area_exponent()) / m)
}

/// Computes the local area at a Mach number from the sonic throat area.
///
/// # Errors
///
/// Returns [`FlowError::Degenerate`] at `M = 0` and
/// [`FlowError::OutOfDomain`] if the throat area is not strictly positive.
pub fn area_mach_relation(
    gamma: HeatCapacityRatio,
    mach: MachNumber,
    throat_area: Area,
) -> Result<Area, FlowError> {
    check_positive("throat area", throat_area.get::<square_meter>())?;
    Ok(throat_area * area_ratio(gamma, mach)?)
}

/// Solves the area-Mach relation for the Mach number on one branch.
///
/// Use [`FlowRegime::Subsonic`] upstream of the throat and
/// [`FlowRegime::Supersonic`] downstream of a choked throat.
/// An area ratio of exactly 1 returns Mach 1 for every regime.
///
/// ```
/// use nozzle_models::support::{
///     flow::{AreaMachConfig, FlowRegime, area_velocity_relation},
///     gas::HeatCapacityRatio,
/// };
///
/// let gamma = HeatCapacityRatio::air();
/// let config = AreaMachConfig::default();
///
/// let m = area_velocity_relation(gamma, 1.6875, FlowRegime::Supersonic, &config)?;
/// assert!((*m - 2.0).abs() < 1e-9);
/// # Ok::<(), nozzle_models::support::flow::FlowError>(())
/// ```
///
/// # Errors
///
/// - [`FlowError::OutOfDomain`] if the area ratio is below 1, not finite,
///   or above 1 with [`FlowRegime::Sonic`] requested.
/// - [`FlowError::Degenerate`] if no bracketing interval can be found.
/// - [`FlowError::Bisection`] or [`FlowError::MaxIters`] if the root solve fails.
pub fn area_velocity_relation(
    gamma: HeatCapacityRatio,
    area_ratio: f64,
    regime: FlowRegime,
    config: &AreaMachConfig,
) -> Result<MachNumber, FlowError> {
    if area_ratio.is_nan() || area_ratio < 1.0 {
        return Err(FlowError::out_of_domain(format!(
            "area ratio {area_ratio} is below the sonic minimum of 1"
        )));
    }
    if !area_ratio.is_finite() {
        return Err(FlowError::out_of_domain("area ratio must be finite"));
    }
    if area_ratio == 1.0 {
        return Ok(MachNumber::sonic());
    }

    let bracket = match regime {
        FlowRegime::Subsonic => subsonic_bracket(gamma, area_ratio),
        FlowRegime::Supersonic => supersonic_bracket(gamma, area_ratio)?,
        FlowRegime::Sonic => {
            return Err(FlowError::out_of_domain(format!(
                "sonic flow requires an area ratio of 1, got {area_ratio}"
            )));
        }
    };

    let model = AreaMachModel::new(gamma);
    let problem = AreaMachProblem::new(area_ratio);

    let solution = bisection::solve(
        &model,
        &problem,
        bracket,
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // The ratio grows without bound as M approaches zero.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(FlowError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    let mach = solution.snapshot.output.mach;
    debug!(area_ratio, ?regime, mach = *mach, iters = solution.iters, "solved area-mach relation");

    Ok(mach)
}

/// Solves the area-Mach relation for both the subsonic and supersonic roots.
///
/// # Errors
///
/// Returns any error from [`area_velocity_relation`].
pub fn area_velocity_roots(
    gamma: HeatCapacityRatio,
    area_ratio: f64,
    config: &AreaMachConfig,
) -> Result<MachRoots, FlowError> {
    Ok(MachRoots {
        subsonic: area_velocity_relation(gamma, area_ratio, FlowRegime::Subsonic, config)?,
        supersonic: area_velocity_relation(gamma, area_ratio, FlowRegime::Supersonic, config)?,
    })
}

/// Returns an interval on `(0, 1]` containing the subsonic root.
///
/// Since `A/A* ≥ c/M` with `c` the choked factor, the ratio at
/// `M = c/(2·target)` is at least twice the target.
fn subsonic_bracket(gamma: HeatCapacityRatio, target: f64) -> [f64; 2] {
    let lower = 0.5 * gamma.choked_factor() / target;
    [lower, 1.0]
}

/// Returns an interval on `[1, M_hi]` containing the supersonic root.
fn supersonic_bracket(gamma: HeatCapacityRatio, target: f64) -> Result<[f64; 2], FlowError> {
    let mut upper = 2.0;
    loop {
        let ratio = area_ratio(gamma, MachNumber::new(upper)?)?;
        if ratio >= target {
            return Ok([1.0, upper]);
        }
        upper *= 2.0;
        if upper > MAX_BRACKET_MACH {
            return Err(FlowError::degenerate(format!(
                "no supersonic mach up to {MAX_BRACKET_MACH} reaches area ratio {target}"
            )));
        }
    }
}
