//! Browser orchestration for exporting HTML slides.
//!
//! Discovers slide files, drives a [`SlideRenderer`] over them one at a
//! time and writes one PDF or PNG per slide. A failing slide is reported
//! and skipped; it never aborts the batch. Merging the per-slide PDFs is
//! delegated to Ghostscript.

pub mod batch;
#[cfg(feature = "chrome")]
pub mod chrome;
pub mod discover;
pub mod error;
pub mod merge;
pub mod options;
pub mod png;

pub use batch::{export_batch, BatchFailure, BatchReport, OutputFormat};
pub use discover::{discover_numbered_pages, discover_slides, DEFAULT_EXCLUDED};
pub use error::{RenderError, Result};
pub use merge::{Ghostscript, MergeOutcome};
pub use options::{PdfOptions, RenderOptions, Viewport};

use std::path::Path;

/// Something that can turn a slide document into PDF or PNG bytes.
pub trait SlideRenderer {
    /// Print the slide to a single-page PDF.
    fn render_pdf(&mut self, page: &Path) -> Result<Vec<u8>>;

    /// Capture the slide as a PNG screenshot.
    fn render_png(&mut self, page: &Path) -> Result<Vec<u8>>;
}

/// Launch the browser-backed renderer.
///
/// Fails with [`RenderError::Unsupported`] when the crate was built without
/// the `chrome` feature.
pub fn launch(options: RenderOptions) -> Result<Box<dyn SlideRenderer>> {
    #[cfg(feature = "chrome")]
    {
        Ok(Box::new(chrome::ChromeRenderer::launch(options)?))
    }

    #[cfg(not(feature = "chrome"))]
    {
        let _ = options;
        Err(RenderError::Unsupported)
    }
}
