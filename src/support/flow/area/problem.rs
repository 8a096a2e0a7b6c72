//! Problem formulation for inverting the area-Mach relation.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};

use crate::support::{
    flow::{FlowError, MachNumber},
    gas::HeatCapacityRatio,
};

use super::area_ratio;

/// Area ratio evaluated at a trial Mach number.
#[derive(Debug, Clone, Copy)]
pub(super) struct AreaMachPoint {
    pub(super) mach: MachNumber,
    pub(super) area_ratio: f64,
}

/// Model adapter exposing the Mach number as the sole input.
pub(super) struct AreaMachModel {
    gamma: HeatCapacityRatio,
}

impl AreaMachModel {
    pub(super) fn new(gamma: HeatCapacityRatio) -> Self {
        Self { gamma }
    }
}

impl Model for AreaMachModel {
    type Input = f64;
    type Output = AreaMachPoint;
    type Error = FlowError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let mach = MachNumber::new(*input)?;
        Ok(AreaMachPoint {
            mach,
            area_ratio: area_ratio(self.gamma, mach)?,
        })
    }
}

/// Equation problem definition for matching a target area ratio.
///
/// Computes the residual as `achieved / target − 1`, so the tolerance is
/// relative and stays meaningful for very large expansion ratios.
pub(super) struct AreaMachProblem {
    target: f64,
}

impl AreaMachProblem {
    pub(super) fn new(target: f64) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for AreaMachProblem {
    type Input = f64;
    type Output = AreaMachPoint;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.area_ratio / self.target - 1.0])
    }
}
