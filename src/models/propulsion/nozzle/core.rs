//! Revolved converging-diverging nozzle geometry.
//!
//! The geometry pipeline turns a validated [`NozzleSpec`] into a structured
//! surface mesh:
//!
//! 1. each section's radius follows a quadratic envelope
//! 2. the sections join at the throat into one [`AxialProfile`]
//! 3. the profile is revolved about the axis into a [`RevolvedMesh`]
//!
//! [`generate`] runs the pipeline headlessly. [`render`] runs it and then
//! hands the mesh to a [`SurfaceSink`].
//!
//! Sizing a nozzle from a design point and computing the isentropic flow
//! along a profile live here too, since both combine the geometry with the
//! flow relations in [`crate::support::flow`].

mod distribution;
mod envelope;
mod error;
mod grid;
mod mesh;
mod profile;
mod sink;
mod sizing;
mod spec;

pub use distribution::{Station, flow_distribution};
pub use envelope::{converging_envelope, diverging_envelope};
pub use error::GeometryError;
pub use mesh::{RevolvedMesh, revolve};
pub use profile::{AxialProfile, build_axial_profile};
pub use sink::{RenderError, SurfaceSink};
pub use sizing::{DesignPoint, NozzleDesign, size_nozzle};
pub use spec::{NozzleRadii, NozzleSpec, Resolution, SectionLengths};

/// Builds the revolved surface mesh for a nozzle.
///
/// # Errors
///
/// Returns a [`GeometryError`] if the spec's angular resolution is invalid.
/// Specs built through [`NozzleSpec::new`] always pass.
pub fn generate(spec: &NozzleSpec) -> Result<RevolvedMesh, GeometryError> {
    let profile = build_axial_profile(spec);
    revolve(&profile, spec.resolution().angular)
}

/// Builds the surface mesh and draws it on a sink.
///
/// The mesh is fully computed before the sink is called, and the sink is
/// called exactly once. Nothing is drawn if geometry fails.
///
/// # Errors
///
/// Returns [`RenderError::Geometry`] if the mesh cannot be built and
/// [`RenderError::Sink`] if the sink fails to draw it.
pub fn render<S: SurfaceSink>(
    spec: &NozzleSpec,
    sink: &mut S,
) -> Result<(), RenderError<S::Error>> {
    let mesh = generate(spec)?;
    sink.draw_surface(&mesh).map_err(RenderError::Sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("display unavailable")]
    struct DisplayUnavailable;

    #[derive(Default)]
    struct RecordingSink {
        shapes: Vec<(usize, usize)>,
        fail: bool,
    }

    impl SurfaceSink for RecordingSink {
        type Error = DisplayUnavailable;

        fn draw_surface(&mut self, mesh: &RevolvedMesh) -> Result<(), Self::Error> {
            if self.fail {
                return Err(DisplayUnavailable);
            }
            self.shapes.push(mesh.shape());
            Ok(())
        }
    }

    fn spec() -> NozzleSpec {
        NozzleSpec::new(
            NozzleRadii {
                throat: 1.0,
                chamber: 10.0,
                exit: 1.0,
            },
            SectionLengths {
                converging: 2.5,
                diverging: 0.25,
            },
            Resolution {
                angular: 4,
                axial: 2,
            },
        )
        .unwrap()
    }

    #[test]
    fn generate_small_nozzle() {
        let mesh = generate(&spec()).unwrap();

        assert_eq!(mesh.shape(), (4, 4));
        for ((i, j), &x) in mesh.x().indexed_iter() {
            let y = mesh.y()[[i, j]];
            assert!((x * x + y * y).sqrt() >= 0.0);
        }
        // Throat columns sit at z = 0 with unit radius.
        assert!(mesh.z().column(1).iter().all(|&z| z == 0.0));
        assert!((mesh.x()[[0, 1]] - 1.0).abs() < 1e-15);
    }

    #[test]
    fn render_draws_once() {
        let mut sink = RecordingSink::default();
        render(&spec(), &mut sink).unwrap();

        assert_eq!(sink.shapes, vec![(4, 4)]);
    }

    #[test]
    fn render_reports_sink_failure() {
        let mut sink = RecordingSink {
            fail: true,
            ..RecordingSink::default()
        };
        let err = render(&spec(), &mut sink).unwrap_err();

        assert!(matches!(err, RenderError::Sink(DisplayUnavailable)));
        assert!(sink.shapes.is_empty());
    }
}
