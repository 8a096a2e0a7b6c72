use std::f64::consts::PI;

use tracing::debug;
use uom::si::{
    area::square_meter,
    f64::{Area, Length, MassRate},
    length::meter,
};

use crate::support::{
    flow::{FlowError, FlowRegime, FlowState, MachNumber, Stagnation, area_ratio, throat_area},
    gas::PerfectGas,
};

use super::{GeometryError, NozzleRadii, NozzleSpec, Resolution, SectionLengths};

/// Operating point a nozzle is sized for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignPoint {
    pub mass_flow: MassRate,
    pub stagnation: Stagnation,
    /// Mach number at the exit plane, at least 1.
    pub exit_mach: MachNumber,
}

/// Throat and exit sizing of an isentropic, fully expanded nozzle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzleDesign {
    pub mass_flow: MassRate,
    pub throat_area: Area,
    pub exit_area: Area,
    pub throat_radius: Length,
    pub exit_radius: Length,
    /// Exit-to-throat area ratio `Ae/A*`.
    pub expansion_ratio: f64,
    pub throat: FlowState,
    pub exit: FlowState,
}

impl NozzleDesign {
    /// Builds a geometric spec with this design's throat and exit radii.
    ///
    /// All spec values are in metres, so `lengths` is read in metres too.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the chamber is narrower than the throat
    /// or any length or resolution is invalid.
    pub fn spec(
        &self,
        chamber_radius: Length,
        lengths: SectionLengths,
        resolution: Resolution,
    ) -> Result<NozzleSpec, GeometryError> {
        NozzleSpec::new(
            NozzleRadii {
                throat: self.throat_radius.get::<meter>(),
                chamber: chamber_radius.get::<meter>(),
                exit: self.exit_radius.get::<meter>(),
            },
            lengths,
            resolution,
        )
    }
}

/// Sizes the throat and exit of a nozzle for a design point.
///
/// The throat is sized to choke the requested mass flow, and the exit area
/// follows from the area-Mach relation at the exit Mach number.
///
/// # Errors
///
/// Returns [`FlowError::OutOfDomain`] if the exit Mach number is subsonic or
/// the mass flow is not strictly positive.
pub fn size_nozzle(gas: &PerfectGas, point: &DesignPoint) -> Result<NozzleDesign, FlowError> {
    if point.exit_mach.regime() == FlowRegime::Subsonic {
        return Err(FlowError::out_of_domain(format!(
            "exit mach {} must be at least 1 for a converging-diverging nozzle",
            *point.exit_mach
        )));
    }

    let stagnation = &point.stagnation;
    let throat_area = throat_area(
        gas,
        point.mass_flow,
        stagnation.pressure(),
        stagnation.temperature(),
    )?;
    let expansion_ratio = area_ratio(gas.gamma(), point.exit_mach)?;
    let exit_area = throat_area * expansion_ratio;

    let design = NozzleDesign {
        mass_flow: point.mass_flow,
        throat_area,
        exit_area,
        throat_radius: circle_radius(throat_area),
        exit_radius: circle_radius(exit_area),
        expansion_ratio,
        throat: FlowState::at(gas, stagnation, MachNumber::sonic()),
        exit: FlowState::at(gas, stagnation, point.exit_mach),
    };

    debug!(
        throat_area_m2 = throat_area.get::<square_meter>(),
        expansion_ratio,
        "sized nozzle"
    );

    Ok(design)
}

fn circle_radius(area: Area) -> Length {
    Length::new::<meter>((area.get::<square_meter>() / PI).sqrt())
}
