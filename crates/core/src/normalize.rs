//! Text normalization for markup-extracted strings.
//!
//! HTML text arrives split across many text nodes with source indentation
//! and line breaks mixed in. Everything that ends up on a slide goes through
//! [`TextNormalizer`] so that whitespace runs collapse to single spaces and
//! composed characters are in NFC form.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Regex to collapse any whitespace run (including newlines and NBSP).
static WHITESPACE_COLLAPSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Bullet glyph that source lists sometimes carry inline.
const BULLET_CHAR: char = '•';

/// Text normalizer for extracted slide text.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    /// Whether to apply Unicode NFC composition.
    compose_unicode: bool,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    /// Create a new text normalizer with default settings.
    pub fn new() -> Self {
        Self {
            compose_unicode: true,
        }
    }

    /// Set whether to apply Unicode NFC composition.
    pub fn with_compose_unicode(mut self, compose: bool) -> Self {
        self.compose_unicode = compose;
        self
    }

    /// Normalize a single piece of text.
    ///
    /// - Collapses whitespace runs to single spaces
    /// - Trims leading/trailing whitespace
    /// - Composes to NFC (if enabled)
    pub fn normalize_line(&self, text: &str) -> String {
        let collapsed = WHITESPACE_COLLAPSE_REGEX.replace_all(text.trim(), " ");

        if self.compose_unicode {
            collapsed.nfc().collect()
        } else {
            collapsed.into_owned()
        }
    }

    /// Join text fragments (e.g. the text nodes of an element) into one line.
    ///
    /// Each fragment is trimmed, empty fragments are dropped and the rest
    /// are joined with a single space.
    pub fn join_fragments<'a, I>(&self, fragments: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let joined = fragments
            .into_iter()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        self.normalize_line(&joined)
    }

    /// Remove inline bullet glyphs and normalize the remainder.
    pub fn strip_bullets(&self, text: &str) -> String {
        let without: String = text.chars().filter(|&c| c != BULLET_CHAR).collect();
        self.normalize_line(&without)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        let normalizer = TextNormalizer::new();

        assert_eq!(normalizer.normalize_line("  Hello   world  "), "Hello world");
        assert_eq!(
            normalizer.normalize_line("Line one\n        line two"),
            "Line one line two"
        );
        assert_eq!(normalizer.normalize_line("tab\tseparated"), "tab separated");
        assert_eq!(normalizer.normalize_line("non\u{a0}breaking"), "non breaking");
    }

    #[test]
    fn test_empty_input() {
        let normalizer = TextNormalizer::new();

        assert_eq!(normalizer.normalize_line(""), "");
        assert_eq!(normalizer.normalize_line("   \n\t "), "");
        assert_eq!(normalizer.join_fragments(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_join_fragments() {
        let normalizer = TextNormalizer::new();

        let fragments = ["\n    Led ", "  ", "flight testing", " of UAVs\n"];
        assert_eq!(
            normalizer.join_fragments(fragments),
            "Led flight testing of UAVs"
        );
    }

    #[test]
    fn test_nfc_composition() {
        let normalizer = TextNormalizer::new();

        // "e" + combining acute accent composes to a single code point
        let decomposed = "Universite\u{301}";
        assert_eq!(normalizer.normalize_line(decomposed), "Universit\u{e9}");

        let raw = TextNormalizer::new().with_compose_unicode(false);
        assert_eq!(raw.normalize_line(decomposed), decomposed);
    }

    #[test]
    fn test_strip_bullets() {
        let normalizer = TextNormalizer::new();

        assert_eq!(normalizer.strip_bullets("• Field campaigns"), "Field campaigns");
        assert_eq!(normalizer.strip_bullets("No bullet"), "No bullet");
        assert_eq!(normalizer.strip_bullets("•"), "");
    }
}
