//! Render surface seam
//!
//! The embedded content view belongs to the host toolkit. A tab only asks
//! it to load addresses and, once a load completes, for the document title.

use crate::error::SurfaceError;

pub trait RenderSurface {
    /// Start loading `url`. Completion is reported later by the host.
    fn load(&mut self, url: &str);

    /// Title of the loaded document, if the surface may read it.
    fn document_title(&self) -> Result<Option<String>, SurfaceError>;

    /// Detach the view. Called once when the owning tab closes.
    fn release(&mut self) {}
}
