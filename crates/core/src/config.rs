//! Layout configuration for the timeline slide.
//!
//! All static content that is not read from the HTML (header text, fallback
//! role strings, the motivation block) lives here so the renderer is a pure
//! function of `(SlideContent, LayoutConfig)`.

use crate::{Error, Result, TextNormalizer};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smallest canvas width the fixed layout still fits into.
pub const MIN_CANVAS_WIDTH_PX: u32 = 320;

/// Smallest canvas height the fixed layout still fits into.
pub const MIN_CANVAS_HEIGHT_PX: u32 = 400;

/// Complete layout configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub canvas: CanvasConfig,
    pub header: HeaderConfig,
    pub role_fallback: RoleFallback,
    pub responsibilities: ResponsibilityRules,
    pub motivation: MotivationConfig,
    pub shadow: ShadowConfig,
}

impl LayoutConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::InputNotFound(path.to_path_buf()));
        }
        let json = std::fs::read_to_string(path)?;
        log::debug!("Loaded layout configuration from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Check that the configuration can be laid out.
    pub fn validate(&self) -> Result<()> {
        self.canvas.validate()
    }
}

/// Canvas size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width_px: u32,
    pub height_px: u32,
    pub dpi: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width_px: 1280,
            height_px: 720,
            dpi: 96,
        }
    }
}

impl CanvasConfig {
    /// Create a canvas of the given pixel size at 96 DPI.
    pub fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            width_px,
            height_px,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(Error::ConfigError("dpi must be positive".into()));
        }
        if self.width_px < MIN_CANVAS_WIDTH_PX || self.height_px < MIN_CANVAS_HEIGHT_PX {
            return Err(Error::ConfigError(format!(
                "canvas {}x{} is smaller than the minimum {}x{}",
                self.width_px, self.height_px, MIN_CANVAS_WIDTH_PX, MIN_CANVAS_HEIGHT_PX
            )));
        }
        Ok(())
    }
}

/// Text shown in the header band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub title: String,
    pub subtitle: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            title: "Background".into(),
            subtitle: "Timeline, Current Role & UAV Gear".into(),
        }
    }
}

/// Strings used when the document has no role card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleFallback {
    pub title: String,
    pub date: String,
}

impl Default for RoleFallback {
    fn default() -> Self {
        Self {
            title: "Research Fellow \u{2014} ISTC CNR".into(),
            date: "Jan 2024 \u{2013} Present".into(),
        }
    }
}

/// Which responsibility lines make it onto the role card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsibilityRules {
    /// Label paragraph printed above the list.
    pub label: String,

    /// Hard cap on printed lines.
    pub max_items: usize,

    /// Lines containing any of these substrings are dropped.
    pub excluded_terms: Vec<String>,
}

impl Default for ResponsibilityRules {
    fn default() -> Self {
        Self {
            label: "RESPONSIBILITIES".into(),
            max_items: 4,
            excluded_terms: vec!["DJI".into(), "UviFy".into()],
        }
    }
}

impl ResponsibilityRules {
    /// Whether a line mentions an excluded term (case-sensitive substring).
    pub fn is_excluded(&self, line: &str) -> bool {
        self.excluded_terms
            .iter()
            .any(|term| !term.is_empty() && line.contains(term.as_str()))
    }

    /// Select the printable lines: strip inline bullets, drop excluded
    /// lines, then keep at most `max_items`.
    pub fn select(&self, items: &[String], normalizer: &TextNormalizer) -> Vec<String> {
        let selected: Vec<String> = items
            .iter()
            .map(|item| normalizer.strip_bullets(item))
            .filter(|line| !self.is_excluded(line))
            .take(self.max_items)
            .collect();

        if selected.len() < items.len() {
            log::debug!(
                "Kept {} of {} responsibilities (cap {})",
                selected.len(),
                items.len(),
                self.max_items
            );
        }

        selected
    }
}

/// One label/text line in the motivation block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotivationItem {
    pub label: String,
    pub text: String,
}

impl MotivationItem {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// The static motivation block drawn under the role card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotivationConfig {
    pub heading: String,
    pub items: Vec<MotivationItem>,
}

impl Default for MotivationConfig {
    fn default() -> Self {
        Self {
            heading: "PhD Motivation".into(),
            items: vec![
                MotivationItem::new(
                    "Challenge",
                    "Real-world autonomy faces energy, perception, and uncertainty constraints",
                ),
                MotivationItem::new("Gap", "Classical pipelines reach fundamental limits"),
                MotivationItem::new(
                    "Inspiration",
                    "Biological systems (bees) achieve efficient, adaptive navigation",
                ),
                MotivationItem::new("Direction", "Neuro-inspired and neuromorphic computation"),
                MotivationItem::new(
                    "Goal",
                    "Principled foundations for robust, efficient autonomy",
                ),
            ],
        }
    }
}

/// Drop shadow applied to cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    pub enabled: bool,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
