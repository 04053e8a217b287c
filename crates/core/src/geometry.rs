//! Geometry planning for the timeline slide.
//!
//! Every coordinate is an EMU (English Metric Unit) kept as `f64` until a
//! shape is materialized, at which point [`Rect::to_emu`] truncates it.
//! Planning is pure arithmetic: the same entry count and canvas always give
//! the same layout.

use crate::{CanvasConfig, Side};

pub const EMU_PER_INCH: f64 = 914_400.0;
pub const EMU_PER_POINT: f64 = 12_700.0;

/// Convert inches to EMU.
pub fn inches(value: f64) -> f64 {
    value * EMU_PER_INCH
}

/// Convert typographic points to EMU.
pub fn points(value: f64) -> f64 {
    value * EMU_PER_POINT
}

const HEADER_HEIGHT_IN: f64 = 0.7;
const SPINE_WIDTH_PT: f64 = 4.0;
const SPINE_INSET_IN: f64 = 0.2;
const TIMELINE_MARGIN_IN: f64 = 0.3;
const LEFT_COLUMN_FRACTION: f64 = 0.65;
const CARD_WIDTH_FRACTION: f64 = 0.42;
const CARD_HEIGHT_IN: f64 = 0.85;
const CARD_GAP_IN: f64 = 0.35;
const DOT_DIAMETER_PT: f64 = 16.0;
const COLUMN_GUTTER_IN: f64 = 0.1;
const RIGHT_MARGIN_IN: f64 = 0.15;
const RIGHT_BACKGROUND_BLEED_IN: f64 = 0.05;
const ROLE_CARD_HEIGHT_IN: f64 = 2.8;
const BLOCK_GAP_IN: f64 = 0.15;

/// An axis-aligned rectangle in EMU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A square of side `size` centred on `(cx, cy)`.
    pub fn centered_square(cx: f64, cy: f64, size: f64) -> Self {
        Self::new(cx - size / 2.0, cy - size / 2.0, size, size)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Integer EMU `(x, y, cx, cy)`, truncated toward zero.
    pub fn to_emu(&self) -> (i64, i64, i64, i64) {
        (
            self.x as i64,
            self.y as i64,
            self.width as i64,
            self.height as i64,
        )
    }
}

/// Vertical slot assigned to one timeline entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntrySlot {
    /// Position of the entry in source order.
    pub index: usize,

    /// Vertical centre of the slot; dot and card are centred on it.
    pub center_y: f64,

    /// The dot on the spine.
    pub dot: Rect,
}

/// Planned placement of every element on the slide.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasGeometry {
    /// Canvas width in EMU.
    pub width: f64,

    /// Canvas height in EMU.
    pub height: f64,

    pub header: Rect,

    /// Width of the left (timeline) column.
    pub timeline_width: f64,

    /// Horizontal centre of the spine.
    pub spine_center_x: f64,

    pub spine: Rect,

    /// Top of the first slot.
    pub top_margin: f64,

    /// Space kept free under the last slot.
    pub bottom_margin: f64,

    /// Height of each entry slot (zero when there are no entries).
    pub slot_height: f64,

    pub slots: Vec<EntrySlot>,

    /// Card size shared by every entry.
    pub card_width: f64,
    pub card_height: f64,

    /// Distance between the spine centre and the near edge of a card.
    pub card_gap: f64,

    pub right_background: Rect,
    pub role_card: Rect,
    pub motivation_card: Rect,
}

impl CanvasGeometry {
    /// Plan the layout for `entry_count` timeline entries.
    pub fn plan(entry_count: usize, canvas: &CanvasConfig) -> Self {
        let dpi = i64::from(canvas.dpi.max(1));
        let width = (i64::from(canvas.width_px) * EMU_PER_INCH as i64 / dpi) as f64;
        let height = (i64::from(canvas.height_px) * EMU_PER_INCH as i64 / dpi) as f64;

        let header_height = inches(HEADER_HEIGHT_IN);
        let header = Rect::new(0.0, 0.0, width, header_height);

        let timeline_width = width * LEFT_COLUMN_FRACTION;
        let spine_center_x = timeline_width * 0.5;

        let spine_width = points(SPINE_WIDTH_PT);
        let spine = Rect::new(
            spine_center_x - spine_width / 2.0,
            header_height + inches(SPINE_INSET_IN),
            spine_width,
            height - header_height - 2.0 * inches(SPINE_INSET_IN),
        );

        let top_margin = header_height + inches(TIMELINE_MARGIN_IN);
        let bottom_margin = inches(TIMELINE_MARGIN_IN);
        let usable_height = height - top_margin - bottom_margin;

        let slot_height = if entry_count == 0 {
            0.0
        } else {
            usable_height / entry_count as f64
        };

        let dot_size = points(DOT_DIAMETER_PT);
        let slots = (0..entry_count)
            .map(|index| {
                let center_y = top_margin + (index as f64 + 0.5) * slot_height;
                EntrySlot {
                    index,
                    center_y,
                    dot: Rect::centered_square(spine_center_x, center_y, dot_size),
                }
            })
            .collect();

        let right_left = timeline_width + inches(COLUMN_GUTTER_IN);
        let right_width = width - right_left - inches(RIGHT_MARGIN_IN);

        let right_background = Rect::new(
            right_left - inches(RIGHT_BACKGROUND_BLEED_IN),
            header_height,
            right_width + 2.0 * inches(COLUMN_GUTTER_IN),
            height - header_height,
        );

        let role_card = Rect::new(
            right_left,
            header_height + inches(SPINE_INSET_IN),
            right_width,
            inches(ROLE_CARD_HEIGHT_IN),
        );

        let motivation_top = role_card.bottom() + inches(BLOCK_GAP_IN);
        let motivation_card = Rect::new(
            right_left,
            motivation_top,
            right_width,
            height - motivation_top - inches(BLOCK_GAP_IN),
        );

        log::debug!(
            "Planned {} slots of {:.0} EMU on a {:.0}x{:.0} EMU canvas",
            entry_count,
            slot_height,
            width,
            height
        );

        Self {
            width,
            height,
            header,
            timeline_width,
            spine_center_x,
            spine,
            top_margin,
            bottom_margin,
            slot_height,
            slots,
            card_width: timeline_width * CARD_WIDTH_FRACTION,
            card_height: inches(CARD_HEIGHT_IN),
            card_gap: inches(CARD_GAP_IN),
            right_background,
            role_card,
            motivation_card,
        }
    }

    /// Vertical extent shared out between the entry slots.
    pub fn usable_height(&self) -> f64 {
        self.height - self.top_margin - self.bottom_margin
    }

    /// Card rectangle for an entry on `side` centred on `slot`.
    ///
    /// Left cards end `card_gap` before the spine centre, right cards start
    /// `card_gap` after it.
    pub fn card(&self, slot: &EntrySlot, side: Side) -> Rect {
        let x = match side {
            Side::Left => self.spine_center_x - self.card_width - self.card_gap,
            Side::Right => self.spine_center_x + self.card_gap,
        };
        Rect::new(
            x,
            slot.center_y - self.card_height / 2.0,
            self.card_width,
            self.card_height,
        )
    }
}
