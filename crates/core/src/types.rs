//! Domain types for the content extracted from a timeline slide.

use serde::{Deserialize, Serialize};

/// Which side of the timeline spine an entry's card sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Classify from an element's class list: `left` marks the left side,
    /// anything else is the right side.
    pub fn from_classes<'a>(mut classes: impl Iterator<Item = &'a str>) -> Self {
        if classes.any(|c| c == "left") {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// One dated entry on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Side of the spine the card is drawn on.
    pub side: Side,

    /// Date label, e.g. "2019 – 2021".
    pub date: String,

    /// Headline of the entry.
    pub title: String,

    /// Secondary line (institution, place).
    pub subtitle: String,

    /// Whether this entry is the current position. Decided once at
    /// extraction time.
    pub is_current: bool,
}

impl TimelineEntry {
    /// Create a non-current entry with the given side and text fields.
    pub fn new(
        side: Side,
        date: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            side,
            date: date.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            is_current: false,
        }
    }

    /// Mark this entry as current (or not).
    pub fn with_current(mut self, is_current: bool) -> Self {
        self.is_current = is_current;
        self
    }
}

/// The block describing the current role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSummary {
    pub title: String,
    pub date: String,
    pub description: String,

    /// Responsibility lines in document order, whitespace collapsed.
    pub responsibilities: Vec<String>,
}

/// Everything extracted from one slide document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideContent {
    /// Timeline entries in source order.
    pub entries: Vec<TimelineEntry>,

    /// The role card, if the document has one.
    pub role: Option<RoleSummary>,
}

impl SlideContent {
    /// Create empty content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a timeline entry after the existing ones.
    pub fn add_entry(&mut self, entry: TimelineEntry) {
        self.entries.push(entry);
    }

    /// Index of the first entry marked current, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.entries.iter().position(|e| e.is_current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_from_classes() {
        assert_eq!(
            Side::from_classes("timeline-item left".split_whitespace()),
            Side::Left
        );
        assert_eq!(
            Side::from_classes("timeline-item right".split_whitespace()),
            Side::Right
        );
        // Anything that is not explicitly left goes right
        assert_eq!(Side::from_classes("timeline-item".split_whitespace()), Side::Right);
        assert_eq!(Side::from_classes("lefty".split_whitespace()), Side::Right);
    }

    #[test]
    fn test_current_index() {
        let mut content = SlideContent::new();
        assert_eq!(content.current_index(), None);

        content.add_entry(TimelineEntry::new(Side::Left, "2018", "BSc", "Uni"));
        content.add_entry(TimelineEntry::new(Side::Right, "2020", "MSc", "Uni").with_current(true));
        assert_eq!(content.current_index(), Some(1));
    }
}
