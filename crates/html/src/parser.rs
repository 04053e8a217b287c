//! Timeline slide HTML parser implementation.

use scraper::{ElementRef, Html, Selector};
use slides_core::{Error, Result, RoleSummary, Side, SlideContent, TextNormalizer, TimelineEntry};
use std::path::Path;
use std::sync::LazyLock;

static TIMELINE_ITEM: LazyLock<Selector> = LazyLock::new(|| selector(".timeline-item"));
static CARD: LazyLock<Selector> = LazyLock::new(|| selector(".card"));
static DATE: LazyLock<Selector> = LazyLock::new(|| selector(".timeline-date"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector(".timeline-title"));
static SUBTITLE: LazyLock<Selector> = LazyLock::new(|| selector(".timeline-subtitle"));
static CURRENT_DOT: LazyLock<Selector> = LazyLock::new(|| selector(".current-dot"));
static ROLE_CARD: LazyLock<Selector> = LazyLock::new(|| selector(".role-card"));
static HEADING: LazyLock<Selector> = LazyLock::new(|| selector("h3"));
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| selector("p"));
static LIST_ITEM: LazyLock<Selector> = LazyLock::new(|| selector("ul li"));

/// Class on the inner card that marks the current role.
const CURRENT_ROLE_CLASS: &str = "current-role";

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// Parser for timeline slide documents.
pub struct HtmlParser {
    normalizer: TextNormalizer,
}

impl HtmlParser {
    /// Create a new HTML parser.
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
        }
    }

    /// Read and parse a document from disk.
    ///
    /// A missing file is reported as [`Error::InputNotFound`] before anything
    /// else happens.
    pub fn parse_file(&self, path: &Path) -> Result<SlideContent> {
        if !path.is_file() {
            return Err(Error::InputNotFound(path.to_path_buf()));
        }

        let markup = std::fs::read_to_string(path)?;
        log::debug!("Read {} bytes from {}", markup.len(), path.display());

        Ok(self.parse(&markup))
    }

    /// Parse markup text. Missing optional elements never fail extraction,
    /// they just produce empty fields.
    pub fn parse(&self, markup: &str) -> SlideContent {
        let document = Html::parse_document(markup);
        let mut content = SlideContent::new();

        for item in document.select(&TIMELINE_ITEM) {
            content.add_entry(self.parse_entry(item));
        }

        content.role = document
            .select(&ROLE_CARD)
            .next()
            .map(|card| self.parse_role(card));

        log::debug!(
            "Extracted {} timeline entries, role card {}",
            content.entries.len(),
            if content.role.is_some() { "present" } else { "absent" }
        );

        content
    }

    /// Extract one timeline entry from its `.timeline-item` element.
    fn parse_entry(&self, item: ElementRef<'_>) -> TimelineEntry {
        let side = Side::from_classes(classes(item));
        let card = item.select(&CARD).next();

        let field = |sel: &Selector| -> String {
            card.and_then(|c| c.select(sel).next())
                .map(|el| self.text_of(el))
                .unwrap_or_default()
        };

        let has_current_dot = item.select(&CURRENT_DOT).next().is_some();
        let card_is_current = card.is_some_and(|c| classes(c).any(|cls| cls == CURRENT_ROLE_CLASS));

        TimelineEntry::new(side, field(&DATE), field(&TITLE), field(&SUBTITLE))
            .with_current(has_current_dot || card_is_current)
    }

    /// Extract the role summary from the `.role-card` element.
    ///
    /// The first paragraph holds the date range and the second one the
    /// description.
    fn parse_role(&self, card: ElementRef<'_>) -> RoleSummary {
        let title = card
            .select(&HEADING)
            .next()
            .map(|el| self.text_of(el))
            .unwrap_or_default();

        let paragraphs: Vec<ElementRef<'_>> = card.select(&PARAGRAPH).collect();
        let date = paragraphs
            .first()
            .map(|el| self.text_of(*el))
            .unwrap_or_default();
        let description = paragraphs
            .get(1)
            .map(|el| self.text_of(*el))
            .unwrap_or_default();

        let responsibilities = card
            .select(&LIST_ITEM)
            .map(|li| self.text_of(li))
            .collect();

        RoleSummary {
            title,
            date,
            description,
            responsibilities,
        }
    }

    /// Text content of an element, fragments joined and whitespace collapsed.
    fn text_of(&self, element: ElementRef<'_>) -> String {
        self.normalizer.join_fragments(element.text())
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Class names of an element.
fn classes<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element
        .value()
        .attr("class")
        .unwrap_or_default()
        .split_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(class: &str, card_class: &str, extra: &str) -> String {
        format!(
            r#"<div class="{class}">{extra}<div class="{card_class}">
                 <div class="timeline-date">2020</div>
                 <div class="timeline-title">MSc Robotics</div>
                 <div class="timeline-subtitle">Some University</div>
               </div></div>"#
        )
    }

    #[test]
    fn test_side_classification() {
        let parser = HtmlParser::new();
        let html = format!(
            "{}{}",
            item("timeline-item left", "card", ""),
            item("timeline-item right", "card", "")
        );

        let content = parser.parse(&html);
        assert_eq!(content.entries.len(), 2);
        assert_eq!(content.entries[0].side, Side::Left);
        assert_eq!(content.entries[1].side, Side::Right);
    }

    #[test]
    fn test_current_from_dot_or_card_class() {
        let parser = HtmlParser::new();
        let html = format!(
            "{}{}{}",
            item("timeline-item left", "card", r#"<span class="current-dot"></span>"#),
            item("timeline-item right", "card current-role", ""),
            item("timeline-item left", "card", ""),
        );

        let content = parser.parse(&html);
        let flags: Vec<bool> = content.entries.iter().map(|e| e.is_current).collect();
        assert_eq!(flags, vec![true, true, false]);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let parser = HtmlParser::new();
        let html = r#"
            <div class="timeline-item left">
              <div class="card"><div class="timeline-title">Only a title</div></div>
            </div>
            <div class="timeline-item"></div>
        "#;

        let content = parser.parse(html);
        assert_eq!(content.entries.len(), 2);

        let first = &content.entries[0];
        assert_eq!(first.title, "Only a title");
        assert_eq!(first.date, "");
        assert_eq!(first.subtitle, "");

        let second = &content.entries[1];
        assert_eq!(second.side, Side::Right);
        assert_eq!(second.title, "");
        assert!(!second.is_current);
    }

    #[test]
    fn test_text_is_whitespace_collapsed() {
        let parser = HtmlParser::new();
        let html = r#"
            <div class="timeline-item left"><div class="card">
              <div class="timeline-title">
                 Research   <b>Assistant</b>
              </div>
            </div></div>
        "#;

        let content = parser.parse(html);
        assert_eq!(content.entries[0].title, "Research Assistant");
    }

    #[test]
    fn test_role_card() {
        let parser = HtmlParser::new();
        let html = r#"
            <div class="role-card">
              <h3>Research Fellow</h3>
              <p>Jan 2024 &ndash; Present</p>
              <p>Field robotics and   perception.</p>
              <p>Ignored third paragraph</p>
              <ul>
                <li>Plan <em>field</em> campaigns</li>
                <li>Write proposals</li>
              </ul>
            </div>
        "#;

        let role = parser.parse(html).role.unwrap();
        assert_eq!(role.title, "Research Fellow");
        assert_eq!(role.date, "Jan 2024 \u{2013} Present");
        assert_eq!(role.description, "Field robotics and perception.");
        assert_eq!(role.responsibilities, vec!["Plan field campaigns", "Write proposals"]);
    }

    #[test]
    fn test_role_card_with_single_paragraph_and_no_list() {
        let parser = HtmlParser::new();
        let html = r#"<div class="role-card"><p>2024</p></div>"#;

        let role = parser.parse(html).role.unwrap();
        assert_eq!(role.title, "");
        assert_eq!(role.date, "2024");
        assert_eq!(role.description, "");
        assert!(role.responsibilities.is_empty());
    }

    #[test]
    fn test_only_first_role_card_is_used() {
        let parser = HtmlParser::new();
        let html = r#"
            <div class="role-card"><h3>First</h3></div>
            <div class="role-card"><h3>Second</h3></div>
        "#;

        assert_eq!(parser.parse(html).role.unwrap().title, "First");
    }

    #[test]
    fn test_empty_document() {
        let content = HtmlParser::new().parse("");
        assert!(content.entries.is_empty());
        assert!(content.role.is_none());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presentation.html");

        let err = HtmlParser::new().parse_file(&path).unwrap_err();
        assert!(matches!(err, Error::InputNotFound(p) if p == path));
    }
}
