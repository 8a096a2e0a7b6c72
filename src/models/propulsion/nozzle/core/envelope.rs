//! Radius envelopes of the converging and diverging sections.
//!
//! Both sections follow a quadratic in the local axial coordinate, but each
//! measures `z` from its own origin:
//!
//! - converging: `z = 0` at the chamber face, `z = lc` at the throat
//! - diverging: `z = 0` at the throat, `z = ld` at the exit plane
//!
//! Callers working in a shared axial frame must re-base `z` before calling.
//!
//! # Radius floor
//!
//! Results are clamped to `r ≥ 0`. This is a policy for evaluating the
//! quadratics outside their section (or with radii that shrink along the
//! section), where the raw polynomial can dip below zero. It is not a
//! physical outcome and is not reported as an error.

use ndarray::{Array1, ArrayView1};

/// Evaluates `r = rc − (rc − rt)·(z/lc)²` over the converging section.
///
/// ```
/// use ndarray::array;
/// use nozzle_models::models::propulsion::nozzle::converging_envelope;
///
/// let r = converging_envelope(1.0, 10.0, array![0.0, 2.5].view(), 2.5);
/// assert_eq!(r.to_vec(), vec![10.0, 1.0]);
/// ```
#[must_use]
pub fn converging_envelope(
    throat_radius: f64,
    chamber_radius: f64,
    z: ArrayView1<'_, f64>,
    converging_length: f64,
) -> Array1<f64> {
    let delta = chamber_radius - throat_radius;
    z.mapv(|z| floor(chamber_radius - delta * (z / converging_length).powi(2)))
}

/// Evaluates `r = rt + (re − rt)·(z/ld)²` over the diverging section.
#[must_use]
pub fn diverging_envelope(
    throat_radius: f64,
    exit_radius: f64,
    z: ArrayView1<'_, f64>,
    diverging_length: f64,
) -> Array1<f64> {
    let delta = exit_radius - throat_radius;
    z.mapv(|z| floor(throat_radius + delta * (z / diverging_length).powi(2)))
}

fn floor(radius: f64) -> f64 {
    radius.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn converging_runs_chamber_to_throat() {
        let r = converging_envelope(1.0, 3.0, array![0.0, 1.0, 2.0].view(), 2.0);

        assert_relative_eq!(r[0], 3.0);
        assert_relative_eq!(r[1], 2.5);
        assert_relative_eq!(r[2], 1.0);
    }

    #[test]
    fn diverging_runs_throat_to_exit() {
        let r = diverging_envelope(1.0, 2.0, array![0.0, 2.0, 4.0].view(), 4.0);

        assert_relative_eq!(r[0], 1.0);
        assert_relative_eq!(r[1], 1.25);
        assert_relative_eq!(r[2], 2.0);
    }

    #[test]
    fn radius_is_floored_at_zero() {
        // Twice the converging length: 10 − 9·4 < 0.
        let r = converging_envelope(1.0, 10.0, array![5.0].view(), 2.5);
        assert_relative_eq!(r[0], 0.0);

        // An exit narrower than the throat, evaluated past the exit plane.
        let r = diverging_envelope(1.0, 0.5, array![0.5].view(), 0.25);
        assert_relative_eq!(r[0], 0.0);
    }

    #[test]
    fn constant_radius_when_sections_match_throat() {
        let z = array![0.0, 0.3, 0.9];
        let r = converging_envelope(0.4, 0.4, z.view(), 0.9);
        assert!(r.iter().all(|&r| (r - 0.4).abs() < 1e-15));
    }
}
