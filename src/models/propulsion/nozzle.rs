//! Converging-diverging nozzle models.
//!
//! This module provides [`twine_core::Model`] implementations for nozzles:
//!
//! - [`NozzleSurface`]: spec to revolved surface mesh
//! - [`ChokedNozzle`]: design point to throat and exit sizing
//! - [`FlowDistribution`]: spec to isentropic flow at every axial station
//!
//! The adapters delegate to free functions that are also exported here for
//! callers who don't need the `Model` interface.

mod core;

pub use self::core::{
    AxialProfile, DesignPoint, GeometryError, NozzleDesign, NozzleRadii, NozzleSpec,
    RenderError, Resolution, RevolvedMesh, SectionLengths, Station, SurfaceSink,
    build_axial_profile, converging_envelope, diverging_envelope, flow_distribution, generate,
    render, revolve, size_nozzle,
};

use twine_core::Model;

use crate::support::{
    flow::{AreaMachConfig, FlowError, Stagnation},
    gas::PerfectGas,
};

/// Builds the revolved surface of a nozzle.
#[derive(Debug, Clone, Copy, Default)]
pub struct NozzleSurface;

impl Model for NozzleSurface {
    type Input = NozzleSpec;
    type Output = RevolvedMesh;
    type Error = GeometryError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        generate(input)
    }
}

/// Sizes a choked nozzle for a design point.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChokedNozzle {
    pub gas: PerfectGas,
}

impl ChokedNozzle {
    #[must_use]
    pub fn new(gas: PerfectGas) -> Self {
        Self { gas }
    }
}

impl Model for ChokedNozzle {
    type Input = DesignPoint;
    type Output = NozzleDesign;
    type Error = FlowError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        size_nozzle(&self.gas, input)
    }
}

/// Computes the isentropic flow along a nozzle for fixed chamber conditions.
///
/// Lengths in the spec carry no unit here; only radius ratios enter the flow.
#[derive(Debug, Clone, Copy)]
pub struct FlowDistribution {
    pub gas: PerfectGas,
    pub stagnation: Stagnation,
    pub config: AreaMachConfig,
}

impl FlowDistribution {
    #[must_use]
    pub fn new(gas: PerfectGas, stagnation: Stagnation) -> Self {
        Self {
            gas,
            stagnation,
            config: AreaMachConfig::default(),
        }
    }
}

impl Model for FlowDistribution {
    type Input = NozzleSpec;
    type Output = Vec<Station>;
    type Error = FlowError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let profile = build_axial_profile(input);
        flow_distribution(&profile, &self.gas, &self.stagnation, &self.config)
    }
}
