use crate::support::constraint::{Constraint, StrictlyPositive};

use super::GeometryError;

/// Throat, chamber, and exit radii of a converging-diverging nozzle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzleRadii {
    pub throat: f64,
    pub chamber: f64,
    pub exit: f64,
}

/// Axial lengths of the converging and diverging sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLengths {
    pub converging: f64,
    pub diverging: f64,
}

/// Discretization counts for the revolved surface.
///
/// `axial` is the number of stations per section, so a full profile has
/// `2·axial` points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub angular: usize,
    pub axial: usize,
}

impl Resolution {
    /// Fewest angular samples that still enclose an area.
    pub const MIN_ANGULAR: usize = 3;

    /// Fewest axial stations per section (the two section endpoints).
    pub const MIN_AXIAL: usize = 2;
}

/// Validated parametric description of a converging-diverging nozzle.
///
/// Lengths and radii share whatever unit the caller chooses.
///
/// # Invariants
///
/// - `throat > 0`, `chamber ≥ throat`, `exit ≥ throat`
/// - `converging > 0`, `diverging > 0`
/// - `angular ≥ 3`, `axial ≥ 2`
/// - all values finite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzleSpec {
    radii: NozzleRadii,
    lengths: SectionLengths,
    resolution: Resolution,
}

impl NozzleSpec {
    /// Creates a validated nozzle spec.
    ///
    /// ```
    /// use nozzle_models::models::propulsion::nozzle::{
    ///     NozzleRadii, NozzleSpec, Resolution, SectionLengths,
    /// };
    ///
    /// let spec = NozzleSpec::new(
    ///     NozzleRadii { throat: 1.0, chamber: 10.0, exit: 1.0 },
    ///     SectionLengths { converging: 2.5, diverging: 0.25 },
    ///     Resolution { angular: 4, axial: 2 },
    /// )?;
    /// assert_eq!(spec.throat_radius(), 1.0);
    /// # Ok::<(), nozzle_models::models::propulsion::nozzle::GeometryError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] naming the first parameter that violates
    /// an invariant.
    pub fn new(
        radii: NozzleRadii,
        lengths: SectionLengths,
        resolution: Resolution,
    ) -> Result<Self, GeometryError> {
        positive("throat radius", radii.throat)?;
        at_least_throat("chamber radius", radii.chamber, radii.throat)?;
        at_least_throat("exit radius", radii.exit, radii.throat)?;
        positive("converging length", lengths.converging)?;
        positive("diverging length", lengths.diverging)?;

        check_count("angular resolution", resolution.angular, Resolution::MIN_ANGULAR)?;
        check_count("axial resolution", resolution.axial, Resolution::MIN_AXIAL)?;

        Ok(Self {
            radii,
            lengths,
            resolution,
        })
    }

    #[must_use]
    pub fn radii(&self) -> NozzleRadii {
        self.radii
    }

    #[must_use]
    pub fn lengths(&self) -> SectionLengths {
        self.lengths
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn throat_radius(&self) -> f64 {
        self.radii.throat
    }

    #[must_use]
    pub fn chamber_radius(&self) -> f64 {
        self.radii.chamber
    }

    #[must_use]
    pub fn exit_radius(&self) -> f64 {
        self.radii.exit
    }

    #[must_use]
    pub fn converging_length(&self) -> f64 {
        self.lengths.converging
    }

    #[must_use]
    pub fn diverging_length(&self) -> f64 {
        self.lengths.diverging
    }

    /// Returns the overall axial length, chamber face to exit plane.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.lengths.converging + self.lengths.diverging
    }

    /// Returns the contraction area ratio `(rc/rt)²`.
    #[must_use]
    pub fn contraction_ratio(&self) -> f64 {
        (self.radii.chamber / self.radii.throat).powi(2)
    }

    /// Returns the expansion area ratio `(re/rt)²`.
    #[must_use]
    pub fn expansion_ratio(&self) -> f64 {
        (self.radii.exit / self.radii.throat).powi(2)
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), GeometryError> {
    StrictlyPositive::check(&value).map_err(|source| GeometryError::InvalidParameter {
        name,
        value,
        source,
    })?;
    if !value.is_finite() {
        return Err(GeometryError::NotFinite { name });
    }
    Ok(())
}

fn at_least_throat(name: &'static str, radius: f64, throat: f64) -> Result<(), GeometryError> {
    positive(name, radius)?;
    if radius < throat {
        return Err(GeometryError::NarrowerThanThroat {
            name,
            radius,
            throat,
        });
    }
    Ok(())
}

fn check_count(name: &'static str, value: usize, min: usize) -> Result<(), GeometryError> {
    if value < min {
        return Err(GeometryError::InvalidResolution { name, value, min });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintError;

    fn radii() -> NozzleRadii {
        NozzleRadii {
            throat: 1.0,
            chamber: 3.0,
            exit: 2.0,
        }
    }

    fn lengths() -> SectionLengths {
        SectionLengths {
            converging: 2.0,
            diverging: 4.0,
        }
    }

    fn resolution() -> Resolution {
        Resolution {
            angular: 16,
            axial: 10,
        }
    }

    #[test]
    fn valid_spec() {
        let spec = NozzleSpec::new(radii(), lengths(), resolution()).unwrap();

        assert_relative_eq!(spec.total_length(), 6.0);
        assert_relative_eq!(spec.contraction_ratio(), 9.0);
        assert_relative_eq!(spec.expansion_ratio(), 4.0);
    }

    #[test]
    fn straight_pipe_is_valid() {
        let radii = NozzleRadii {
            throat: 1.0,
            chamber: 1.0,
            exit: 1.0,
        };
        assert!(NozzleSpec::new(radii, lengths(), resolution()).is_ok());
    }

    #[test]
    fn rejects_non_positive_throat() {
        let radii = NozzleRadii {
            throat: 0.0,
            ..radii()
        };
        assert_eq!(
            NozzleSpec::new(radii, lengths(), resolution()),
            Err(GeometryError::InvalidParameter {
                name: "throat radius",
                value: 0.0,
                source: ConstraintError::Zero,
            })
        );
    }

    #[test]
    fn rejects_sections_narrower_than_throat() {
        let chamber = NozzleRadii {
            chamber: 0.5,
            ..radii()
        };
        assert!(matches!(
            NozzleSpec::new(chamber, lengths(), resolution()),
            Err(GeometryError::NarrowerThanThroat {
                name: "chamber radius",
                ..
            })
        ));

        let exit = NozzleRadii {
            exit: 0.9,
            ..radii()
        };
        assert!(matches!(
            NozzleSpec::new(exit, lengths(), resolution()),
            Err(GeometryError::NarrowerThanThroat {
                name: "exit radius",
                ..
            })
        ));
    }

    #[test]
    fn rejects_bad_lengths() {
        let negative = SectionLengths {
            converging: -1.0,
            ..lengths()
        };
        assert!(matches!(
            NozzleSpec::new(radii(), negative, resolution()),
            Err(GeometryError::InvalidParameter {
                name: "converging length",
                source: ConstraintError::Negative,
                ..
            })
        ));

        let infinite = SectionLengths {
            diverging: f64::INFINITY,
            ..lengths()
        };
        assert_eq!(
            NozzleSpec::new(radii(), infinite, resolution()),
            Err(GeometryError::NotFinite {
                name: "diverging length"
            })
        );

        let nan = SectionLengths {
            diverging: f64::NAN,
            ..lengths()
        };
        assert!(NozzleSpec::new(radii(), nan, resolution()).is_err());
    }

    #[test]
    fn rejects_coarse_resolution() {
        let angular = Resolution {
            angular: 2,
            ..resolution()
        };
        assert_eq!(
            NozzleSpec::new(radii(), lengths(), angular),
            Err(GeometryError::InvalidResolution {
                name: "angular resolution",
                value: 2,
                min: 3,
            })
        );

        let axial = Resolution {
            axial: 1,
            ..resolution()
        };
        assert!(matches!(
            NozzleSpec::new(radii(), lengths(), axial),
            Err(GeometryError::InvalidResolution {
                name: "axial resolution",
                ..
            })
        ));
    }
}
