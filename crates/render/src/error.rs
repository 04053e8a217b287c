//! Error types for browser-driven export.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rendering slides.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The slide directory does not exist.
    #[error("Directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// The browser could not be started.
    #[error("Failed to launch browser: {0}")]
    Launch(String),

    /// The ready marker never appeared.
    #[error("Timed out after {waited:?} waiting for '{selector}' in {}", .path.display())]
    Timeout {
        path: PathBuf,
        selector: String,
        waited: Duration,
    },

    /// Navigation, printing or capturing failed.
    #[error("Failed to render {}: {message}", .path.display())]
    Render { path: PathBuf, message: String },

    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Built without a browser backend.
    #[error("Built without browser support; rebuild with the `chrome` feature")]
    Unsupported,
}

impl RenderError {
    /// Whether the error is a ready-marker timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
