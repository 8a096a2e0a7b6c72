use thiserror::Error;

use super::{GeometryError, RevolvedMesh};

/// A display backend that draws a structured surface.
///
/// Implementations own every presentation concern (windows, axes, styling).
/// The mesh is always handed over as a structured grid; sinks that draw
/// triangles can use [`RevolvedMesh::faces`].
pub trait SurfaceSink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Draws the surface. Called once per rendered nozzle.
    ///
    /// # Errors
    ///
    /// Returns the backend's own error if drawing fails.
    fn draw_surface(&mut self, mesh: &RevolvedMesh) -> Result<(), Self::Error>;
}

/// Errors from computing and then drawing a nozzle surface.
#[derive(Debug, Error)]
pub enum RenderError<E>
where
    E: std::error::Error + 'static,
{
    #[error("geometry failed: {0}")]
    Geometry(#[from] GeometryError),

    #[error("surface sink failed")]
    Sink(#[source] E),
}
