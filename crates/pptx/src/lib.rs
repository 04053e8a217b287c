//! Fixed-layout PPTX rendering for timeline slides.
//!
//! [`TimelineRenderer`] turns extracted content into a [`Deck`] of shapes,
//! and [`PptxWriter`] packages the deck as a `.pptx` file.

pub mod deck;
pub mod render;
mod template;
pub mod writer;
mod xml;

pub use deck::{Deck, Shape};
pub use render::TimelineRenderer;
pub use writer::PptxWriter;

use slides_core::{LayoutConfig, Result, SlideContent};
use std::path::Path;

/// Render `content` with `config` and write the result to `output`.
pub fn write_pptx(content: &SlideContent, config: &LayoutConfig, output: &Path) -> Result<Deck> {
    let deck = TimelineRenderer::new(config.clone()).render(content);
    PptxWriter::new().write_to_path(&deck, output)?;
    Ok(deck)
}
