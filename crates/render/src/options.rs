//! Rendering presets.

use std::time::Duration;

/// Browser viewport in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Page setup for printing to PDF. Sizes are in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfOptions {
    pub landscape: bool,
    pub print_background: bool,
    pub prefer_css_page_size: bool,

    /// `None` leaves the paper size to the browser (or the page's CSS).
    pub paper_width: Option<f64>,
    pub paper_height: Option<f64>,
    pub scale: f64,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            landscape: false,
            print_background: true,
            prefer_css_page_size: false,
            paper_width: Some(10.67),
            paper_height: Some(6.0),
            scale: 1.0,
        }
    }
}

/// How a slide is loaded and exported.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub viewport: Viewport,

    /// Fixed pause after navigation for fonts and scripts to settle.
    pub settle: Duration,

    /// Element that must exist before the slide counts as rendered.
    pub ready_selector: String,

    /// Upper bound on waiting for `ready_selector`.
    pub ready_timeout: Duration,

    pub pdf: PdfOptions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::slides()
    }
}

impl RenderOptions {
    /// Loose slides in a directory: short settle, 10.67" x 6" portrait paper.
    pub fn slides() -> Self {
        Self {
            viewport: Viewport::default(),
            settle: Duration::from_millis(300),
            ready_selector: ".slide-container".into(),
            ready_timeout: Duration::from_secs(5),
            pdf: PdfOptions::default(),
        }
    }

    /// Numbered deck pages: math typesetting needs a longer settle, and the
    /// page's own CSS decides the paper size.
    pub fn pages() -> Self {
        Self {
            settle: Duration::from_millis(1500),
            ready_timeout: Duration::from_secs(10),
            pdf: PdfOptions {
                landscape: true,
                prefer_css_page_size: true,
                paper_width: None,
                paper_height: None,
                ..PdfOptions::default()
            },
            ..Self::slides()
        }
    }

    /// Screenshots at the exact slide size.
    pub fn screenshots() -> Self {
        Self::slides()
    }
}
