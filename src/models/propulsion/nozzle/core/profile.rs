use ndarray::{Array1, ArrayView1};
use tracing::debug;

use super::{
    NozzleSpec,
    envelope::{converging_envelope, diverging_envelope},
    grid::linspace,
};

/// Radius as a function of axial position along the full nozzle.
///
/// The throat sits at `z = 0`; the converging section occupies `z < 0` and the
/// diverging section `z > 0`. The throat station appears twice, once as the
/// last converging point and once as the first diverging point.
#[derive(Debug, Clone, PartialEq)]
pub struct AxialProfile {
    z: Array1<f64>,
    r: Array1<f64>,
    throat_index: usize,
}

impl AxialProfile {
    /// Axial coordinates, non-decreasing.
    #[must_use]
    pub fn z(&self) -> ArrayView1<'_, f64> {
        self.z.view()
    }

    /// Radii, one per axial coordinate.
    #[must_use]
    pub fn r(&self) -> ArrayView1<'_, f64> {
        self.r.view()
    }

    /// Index of the last converging station, which lies on the throat.
    #[must_use]
    pub fn throat_index(&self) -> usize {
        self.throat_index
    }

    /// Radius at the throat station.
    #[must_use]
    pub fn throat_radius(&self) -> f64 {
        self.r[self.throat_index]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.z.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    /// Iterates over `(z, r)` pairs from chamber face to exit plane.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.z.iter().copied().zip(self.r.iter().copied())
    }

    /// Consumes the profile and returns the `(z, r)` arrays.
    #[must_use]
    pub fn into_parts(self) -> (Array1<f64>, Array1<f64>) {
        (self.z, self.r)
    }
}

/// Builds the axial radius profile of a nozzle.
///
/// Each section gets `axial` evenly spaced stations: the converging section on
/// `[−lc, 0]` and the diverging section on `[0, ld]`. Converging stations are
/// shifted by `lc` before evaluating the envelope, whose origin is the
/// chamber face.
#[must_use]
pub fn build_axial_profile(spec: &NozzleSpec) -> AxialProfile {
    let n = spec.resolution().axial;
    let rt = spec.throat_radius();
    let lc = spec.converging_length();
    let ld = spec.diverging_length();

    let z_converging = linspace(-lc, 0.0, n);
    let z_from_chamber = &z_converging + lc;
    let r_converging =
        converging_envelope(rt, spec.chamber_radius(), z_from_chamber.view(), lc);

    let z_diverging = linspace(0.0, ld, n);
    let r_diverging = diverging_envelope(rt, spec.exit_radius(), z_diverging.view(), ld);

    let z: Array1<f64> = z_converging.iter().chain(&z_diverging).copied().collect();
    let r: Array1<f64> = r_converging.iter().chain(&r_diverging).copied().collect();

    debug!(
        points = z.len(),
        converging_length = lc,
        diverging_length = ld,
        "built axial profile"
    );

    AxialProfile {
        z,
        r,
        throat_index: n - 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use crate::models::propulsion::nozzle::core::{NozzleRadii, Resolution, SectionLengths};

    fn spec(rt: f64, rc: f64, re: f64, lc: f64, ld: f64, axial: usize) -> NozzleSpec {
        NozzleSpec::new(
            NozzleRadii {
                throat: rt,
                chamber: rc,
                exit: re,
            },
            SectionLengths {
                converging: lc,
                diverging: ld,
            },
            Resolution { angular: 8, axial },
        )
        .unwrap()
    }

    #[test]
    fn two_stations_per_section() {
        let profile = build_axial_profile(&spec(1.0, 10.0, 1.0, 2.5, 0.25, 2));

        assert_eq!(profile.len(), 4);
        assert_eq!(profile.throat_index(), 1);

        let points: Vec<_> = profile.points().collect();
        let expected = [(-2.5, 10.0), (0.0, 1.0), (0.0, 1.0), (0.25, 1.0)];
        for ((z, r), (z_exp, r_exp)) in points.iter().zip(expected) {
            assert_relative_eq!(*z, z_exp);
            assert_relative_eq!(*r, r_exp);
        }
    }

    #[test]
    fn quadratic_midpoints() {
        let profile = build_axial_profile(&spec(1.0, 3.0, 2.0, 2.0, 4.0, 3));
        let r = profile.r();

        // Converging midpoint at z = −1 is 1 unit from the chamber face.
        assert_relative_eq!(r[1], 2.5);
        // Diverging midpoint at z = 2.
        assert_relative_eq!(r[4], 1.25);
        assert_relative_eq!(profile.throat_radius(), 1.0);
    }

    #[test]
    fn into_parts_keeps_order() {
        let profile = build_axial_profile(&spec(0.5, 1.0, 1.5, 1.0, 3.0, 4));
        let (z, r) = profile.clone().into_parts();

        assert_eq!(z, profile.z());
        assert_eq!(r, profile.r());
        assert_relative_eq!(z[0], -1.0);
        assert_relative_eq!(z[7], 3.0);
        assert_relative_eq!(r[7], 1.5);
    }

    proptest! {
        #[test]
        fn profile_invariants(
            rt in 0.01f64..10.0,
            chamber_scale in 1.0f64..20.0,
            exit_scale in 1.0f64..20.0,
            lc in 0.01f64..50.0,
            ld in 0.01f64..50.0,
            axial in 2usize..64,
        ) {
            let spec = spec(rt, rt * chamber_scale, rt * exit_scale, lc, ld, axial);
            let profile = build_axial_profile(&spec);

            prop_assert_eq!(profile.len(), 2 * axial);
            prop_assert!(profile.z().windows(2).into_iter().all(|w| w[0] <= w[1]));
            prop_assert!(profile.r().iter().all(|&r| r >= 0.0));

            // Continuity at the throat.
            let t = profile.throat_index();
            prop_assert!((profile.z()[t] - profile.z()[t + 1]).abs() < 1e-12);
            prop_assert!((profile.r()[t] - rt).abs() <= 1e-12 * rt.max(1.0) * chamber_scale);
            prop_assert!((profile.r()[t + 1] - rt).abs() <= 1e-12 * rt.max(1.0));
        }
    }
}
