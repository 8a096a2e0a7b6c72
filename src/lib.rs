//! # Nozzle Models
//!
//! Quasi-1D compressible flow relations and revolved converging-diverging
//! nozzle geometry, built on [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Nozzle [`twine_core::Model`] implementations and the
//!   geometry pipeline behind them.
//! - [`support`]: Gas properties, numeric constraints, and the compressible
//!   flow relations used by the models.
//!
//! ## Quick start
//!
//! ```
//! use nozzle_models::models::propulsion::nozzle::{
//!     NozzleRadii, NozzleSpec, Resolution, SectionLengths, generate,
//! };
//!
//! let spec = NozzleSpec::new(
//!     NozzleRadii { throat: 1.0, chamber: 10.0, exit: 1.0 },
//!     SectionLengths { converging: 2.5, diverging: 0.25 },
//!     Resolution { angular: 4, axial: 2 },
//! )?;
//!
//! let mesh = generate(&spec)?;
//! assert_eq!(mesh.shape(), (4, 4));
//! # Ok::<(), nozzle_models::models::propulsion::nozzle::GeometryError>(())
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events at `debug` level when a profile, mesh,
//! or design is built and when the area-Mach relation is solved, plus `trace`
//! events per flow station. It never installs a subscriber.
//!
//! ## Stability
//!
//! Modules in [`support`] are public because they're useful on their own,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
