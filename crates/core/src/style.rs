//! Colors used on the timeline slide.

use serde::{Deserialize, Serialize};

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Uppercase six-digit hex, as used in `a:srgbClr/@val`.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const SLATE_900: Rgb = Rgb(15, 23, 42);
pub const SLATE_700: Rgb = Rgb(51, 65, 85);
pub const SLATE_600: Rgb = Rgb(71, 85, 105);
pub const SLATE_500: Rgb = Rgb(100, 116, 139);
pub const SLATE_200: Rgb = Rgb(226, 232, 240);
pub const SLATE_50: Rgb = Rgb(250, 251, 252);
pub const GRAY_800: Rgb = Rgb(31, 41, 55);
pub const GRAY_600: Rgb = Rgb(75, 85, 99);
pub const BLUE_200: Rgb = Rgb(191, 219, 254);
pub const BLUE_50: Rgb = Rgb(239, 246, 255);
pub const BLUE_600: Rgb = Rgb(37, 99, 235);
pub const AMBER_300: Rgb = Rgb(252, 211, 77);
pub const AMBER_500: Rgb = Rgb(245, 158, 11);
pub const AMBER_900: Rgb = Rgb(120, 53, 15);
pub const CREAM: Rgb = Rgb(254, 249, 239);

/// Colors for one timeline entry's dot and card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub dot_fill: Rgb,
    pub dot_outline: Rgb,

    /// Card border and date text.
    pub accent: Rgb,

    pub card_fill: Rgb,
}

impl Palette {
    /// Blue palette for past entries.
    pub const PRIMARY: Palette = Palette {
        dot_fill: BLUE_600,
        dot_outline: BLUE_200,
        accent: BLUE_600,
        card_fill: WHITE,
    };

    /// Amber palette for the current entry.
    pub const CURRENT: Palette = Palette {
        dot_fill: AMBER_500,
        dot_outline: AMBER_300,
        accent: AMBER_500,
        card_fill: BLUE_50,
    };

    /// The only styling decision on the slide: current or not.
    pub fn for_entry(is_current: bool) -> Self {
        if is_current {
            Self::CURRENT
        } else {
            Self::PRIMARY
        }
    }
}
