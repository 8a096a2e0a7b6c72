use std::f64::consts::TAU;

use ndarray::{Array2, ArrayView2};
use tracing::debug;

use super::{AxialProfile, GeometryError, Resolution, grid::linspace};

/// Structured surface grid of a revolved profile.
///
/// `x`, `y`, and `z` share the shape `(n_theta, n_points)`: each row is the
/// profile rotated by one angle, each column one axial station.
/// The first and last rows coincide (θ = 0 and θ = 2π) so the surface closes.
#[derive(Debug, Clone, PartialEq)]
pub struct RevolvedMesh {
    x: Array2<f64>,
    y: Array2<f64>,
    z: Array2<f64>,
}

impl RevolvedMesh {
    #[must_use]
    pub fn x(&self) -> ArrayView2<'_, f64> {
        self.x.view()
    }

    #[must_use]
    pub fn y(&self) -> ArrayView2<'_, f64> {
        self.y.view()
    }

    #[must_use]
    pub fn z(&self) -> ArrayView2<'_, f64> {
        self.z.view()
    }

    /// Returns `(n_theta, n_points)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.x.dim()
    }

    /// Splits each grid quad into two triangles.
    ///
    /// Vertices are indexed row-major, so node `(i, j)` is `i·n_points + j`.
    /// Triangles around the chamber face or the axis may be degenerate when
    /// the radius reaches zero.
    #[must_use]
    pub fn faces(&self) -> Vec<[usize; 3]> {
        let (rows, cols) = self.shape();
        let mut faces = Vec::with_capacity(2 * rows.saturating_sub(1) * cols.saturating_sub(1));

        for i in 0..rows.saturating_sub(1) {
            for j in 0..cols.saturating_sub(1) {
                let a = i * cols + j;
                let b = a + 1;
                let c = a + cols;
                let d = c + 1;
                faces.push([a, b, d]);
                faces.push([a, d, c]);
            }
        }
        faces
    }

    /// Consumes the mesh and returns the `(x, y, z)` grids.
    #[must_use]
    pub fn into_parts(self) -> (Array2<f64>, Array2<f64>, Array2<f64>) {
        (self.x, self.y, self.z)
    }
}

/// Revolves an axial profile about the z axis.
///
/// Samples `n_theta` angles uniformly over `[0, 2π]`, both inclusive, and
/// computes `X = r·cos θ`, `Y = r·sin θ`, with `Z = z` repeated on every row.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidResolution`] if `n_theta < 3`.
pub fn revolve(profile: &AxialProfile, n_theta: usize) -> Result<RevolvedMesh, GeometryError> {
    if n_theta < Resolution::MIN_ANGULAR {
        return Err(GeometryError::InvalidResolution {
            name: "angular resolution",
            value: n_theta,
            min: Resolution::MIN_ANGULAR,
        });
    }

    let theta = linspace(0.0, TAU, n_theta);
    let z = profile.z();
    let r = profile.r();
    let shape = (n_theta, profile.len());

    let x = Array2::from_shape_fn(shape, |(i, j)| r[j] * theta[i].cos());
    let y = Array2::from_shape_fn(shape, |(i, j)| r[j] * theta[i].sin());
    let z = Array2::from_shape_fn(shape, |(_, j)| z[j]);

    debug!(n_theta, points = profile.len(), "revolved profile");

    Ok(RevolvedMesh { x, y, z })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use crate::models::propulsion::nozzle::core::{
        NozzleRadii, NozzleSpec, SectionLengths, build_axial_profile,
    };

    fn profile(axial: usize) -> AxialProfile {
        let spec = NozzleSpec::new(
            NozzleRadii {
                throat: 1.0,
                chamber: 10.0,
                exit: 1.0,
            },
            SectionLengths {
                converging: 2.5,
                diverging: 0.25,
            },
            Resolution { angular: 4, axial },
        )
        .unwrap();
        build_axial_profile(&spec)
    }

    #[test]
    fn small_mesh_shape() {
        let mesh = revolve(&profile(2), 4).unwrap();

        assert_eq!(mesh.shape(), (4, 4));
        assert_eq!(mesh.y().dim(), (4, 4));
        assert_eq!(mesh.z().dim(), (4, 4));
    }

    #[test]
    fn seam_rows_coincide() {
        let mesh = revolve(&profile(5), 7).unwrap();
        let (x, y, _) = mesh.into_parts();

        for j in 0..x.ncols() {
            assert_relative_eq!(x[[0, j]], x[[6, j]], epsilon = 1e-12);
            assert_relative_eq!(y[[0, j]], y[[6, j]], epsilon = 1e-12);
        }
    }

    #[test]
    fn z_is_shared_by_every_row() {
        let p = profile(3);
        let mesh = revolve(&p, 5).unwrap();

        for row in mesh.z().rows() {
            assert_eq!(row, p.z());
        }
    }

    #[test]
    fn first_row_lies_in_xz_plane() {
        let p = profile(3);
        let mesh = revolve(&p, 8).unwrap();

        assert_eq!(mesh.x().row(0), p.r());
        assert!(mesh.y().row(0).iter().all(|&y| y == 0.0));
    }

    #[test]
    fn face_count() {
        let mesh = revolve(&profile(3), 5).unwrap();
        let faces = mesh.faces();

        assert_eq!(faces.len(), 2 * 4 * 5);
        let nodes = 5 * 6;
        assert!(faces.iter().flatten().all(|&v| v < nodes));
    }

    #[test]
    fn rejects_too_few_angles() {
        assert_eq!(
            revolve(&profile(2), 2),
            Err(GeometryError::InvalidResolution {
                name: "angular resolution",
                value: 2,
                min: 3,
            })
        );
    }

    proptest! {
        #[test]
        fn nodes_lie_on_profile_radius(n_theta in 3usize..40, axial in 2usize..20) {
            let p = profile(axial);
            let mesh = revolve(&p, n_theta).unwrap();
            let r = p.r();

            for ((i, j), &x) in mesh.x().indexed_iter() {
                let y = mesh.y()[[i, j]];
                let radius = (x * x + y * y).sqrt();
                prop_assert!((radius - r[j]).abs() <= 1e-12 * r[j].max(1.0));
            }
        }
    }
}
