//! Core domain types, layout configuration, text normalization and
//! geometry planning for exporting HTML slides.

pub mod config;
pub mod error;
pub mod geometry;
pub mod normalize;
pub mod style;
pub mod types;

pub use config::{
    CanvasConfig, HeaderConfig, LayoutConfig, MotivationConfig, MotivationItem,
    ResponsibilityRules, RoleFallback, ShadowConfig,
};
pub use error::{Error, Result};
pub use geometry::{CanvasGeometry, EntrySlot, Rect};
pub use normalize::TextNormalizer;
pub use style::{Palette, Rgb};
pub use types::{RoleSummary, Side, SlideContent, TimelineEntry};
