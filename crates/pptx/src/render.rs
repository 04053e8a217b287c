//! Lays out extracted timeline content as shapes on a single slide.

use crate::deck::{Anchor, Align, Deck, Insets, Paragraph, Run, ShapeGeometry, TextFrame};
use slides_core::geometry::inches;
use slides_core::style::{
    AMBER_500, AMBER_900, BLUE_200, CREAM, GRAY_600, GRAY_800, SLATE_200, SLATE_50, SLATE_500,
    SLATE_600, SLATE_700, SLATE_900, WHITE,
};
use slides_core::{
    CanvasGeometry, LayoutConfig, Palette, RoleSummary, SlideContent, TextNormalizer,
    TimelineEntry,
};

const BULLET_PREFIX: &str = "\u{2022} ";

/// Renders [`SlideContent`] into a [`Deck`].
///
/// The output depends only on the content and the configuration, so
/// rendering the same input twice gives identical decks.
#[derive(Debug, Clone)]
pub struct TimelineRenderer {
    config: LayoutConfig,
    normalizer: TextNormalizer,
}

impl Default for TimelineRenderer {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl TimelineRenderer {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            normalizer: TextNormalizer::new(),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Build the slide.
    pub fn render(&self, content: &SlideContent) -> Deck {
        let geometry = CanvasGeometry::plan(content.entries.len(), &self.config.canvas);
        let mut deck = Deck::new(geometry.width as i64, geometry.height as i64);

        self.add_header(&mut deck, &geometry);

        if content.entries.is_empty() {
            log::debug!("No timeline entries, skipping the timeline column");
        } else {
            self.add_timeline(&mut deck, &geometry, &content.entries);
        }

        self.add_right_column(&mut deck, &geometry, content.role.as_ref());

        log::debug!("Rendered {} shapes", deck.shapes.len());
        deck
    }

    fn add_header(&self, deck: &mut Deck, geometry: &CanvasGeometry) {
        let header = &self.config.header;

        let mut frame = TextFrame::new(
            Insets {
                left: inches(0.24),
                top: inches(0.12),
                ..Insets::default()
            },
            Anchor::Middle,
        );
        frame
            .push(Paragraph::new(Run::new(&header.title, 20.0, WHITE).bold()).align(Align::Center))
            .push(Paragraph::new(Run::new(&header.subtitle, 9.0, BLUE_200)).space_before(2.0));

        deck.add_shape("Header", ShapeGeometry::Rectangle, geometry.header)
            .fill(SLATE_900)
            .text(frame);
    }

    fn add_timeline(&self, deck: &mut Deck, geometry: &CanvasGeometry, entries: &[TimelineEntry]) {
        deck.add_shape("Spine", ShapeGeometry::RoundedRectangle, geometry.spine)
            .fill(SLATE_200);

        for (slot, entry) in geometry.slots.iter().zip(entries) {
            let palette = Palette::for_entry(entry.is_current);
            let number = slot.index + 1;

            deck.add_shape(format!("Dot {}", number), ShapeGeometry::Oval, slot.dot)
                .fill(palette.dot_fill)
                .outline(palette.dot_outline, 3.0);

            let date = Run::new(&entry.date, 9.0, palette.accent).bold();
            let title = Run::new(&entry.title, 11.0, GRAY_800).bold();
            let subtitle = Run::new(&entry.subtitle, 9.0, GRAY_600).italic();

            let mut frame = TextFrame::new(Insets::points(12.0, 8.0, 12.0, 8.0), Anchor::Middle);
            frame
                .push(Paragraph::new(date).align(Align::Center).space_after(2.0))
                .push(Paragraph::new(title).space_after(1.0))
                .push(Paragraph::new(subtitle));

            deck.add_shape(
                format!("Card {}", number),
                ShapeGeometry::RoundedRectangle,
                geometry.card(slot, entry.side),
            )
            .fill(palette.card_fill)
            .outline(palette.accent, 4.0)
            .shadow(self.config.shadow.enabled)
            .text(frame);
        }
    }

    fn add_right_column(
        &self,
        deck: &mut Deck,
        geometry: &CanvasGeometry,
        role: Option<&RoleSummary>,
    ) {
        deck.add_shape("Right Column", ShapeGeometry::Rectangle, geometry.right_background)
            .fill(SLATE_50);

        deck.add_shape("Role Card", ShapeGeometry::RoundedRectangle, geometry.role_card)
            .fill(WHITE)
            .outline(AMBER_500, 3.0)
            .shadow(self.config.shadow.enabled)
            .text(self.role_frame(role));

        deck.add_shape(
            "Motivation Card",
            ShapeGeometry::RoundedRectangle,
            geometry.motivation_card,
        )
        .fill(CREAM)
        .outline(AMBER_500, 2.0)
        .shadow(self.config.shadow.enabled)
        .text(self.motivation_frame());
    }

    fn role_frame(&self, role: Option<&RoleSummary>) -> TextFrame {
        let fallback = &self.config.role_fallback;
        let rules = &self.config.responsibilities;

        let (title, date, description, items) = match role {
            Some(role) => (
                role.title.as_str(),
                role.date.as_str(),
                role.description.as_str(),
                rules.select(&role.responsibilities, &self.normalizer),
            ),
            None => (fallback.title.as_str(), fallback.date.as_str(), "", Vec::new()),
        };

        let mut frame = TextFrame::new(Insets::points(14.0, 12.0, 14.0, 12.0), Anchor::Middle);
        frame
            .push(Paragraph::new(Run::new(title, 12.0, SLATE_900).bold()).align(Align::Right))
            .push(
                Paragraph::new(Run::new(date, 9.0, SLATE_500))
                    .align(Align::Right)
                    .space_after(8.0),
            )
            .push(Paragraph::new(Run::new(description, 8.0, SLATE_600)).space_after(6.0))
            .push(Paragraph::new(Run::new(&rules.label, 8.0, SLATE_700).bold()).space_after(4.0));

        for item in items {
            frame.push(Paragraph::new(Run::new(
                format!("{}{}", BULLET_PREFIX, item),
                7.5,
                SLATE_600,
            )));
        }

        frame
    }

    fn motivation_frame(&self) -> TextFrame {
        let motivation = &self.config.motivation;

        let heading = Run::new(&motivation.heading, 10.0, AMBER_900).bold();

        let mut frame = TextFrame::new(Insets::points(12.0, 10.0, 12.0, 10.0), Anchor::Middle);
        frame.push(Paragraph::new(heading).align(Align::Center).space_after(6.0));

        for item in &motivation.items {
            frame.push(
                Paragraph::with_runs(vec![
                    Run::new(format!("{}: ", item.label), 7.5, AMBER_900).bold(),
                    Run::new(&item.text, 7.5, AMBER_900),
                ])
                .space_after(3.0),
            );
        }

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slides_core::style::{AMBER_500, BLUE_600};
    use slides_core::{MotivationItem, Side};

    fn alternating(n: usize, current: Option<usize>) -> SlideContent {
        let mut content = SlideContent::new();
        for i in 0..n {
            let side = if i % 2 == 0 { Side::Left } else { Side::Right };
            content.add_entry(
                TimelineEntry::new(side, format!("20{:02}", i), format!("Title {}", i), "Place")
                    .with_current(current == Some(i)),
            );
        }
        content
    }

    fn role_with(items: &[&str]) -> RoleSummary {
        RoleSummary {
            title: "Research Fellow".into(),
            date: "2024".into(),
            description: "Perception.".into(),
            responsibilities: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_five_entries_with_current_third() {
        let renderer = TimelineRenderer::default();
        let content = alternating(5, Some(2));
        let deck = renderer.render(&content);

        let cards: Vec<_> = deck.shapes_named("Card ").collect();
        assert_eq!(cards.len(), 5);
        assert_eq!(deck.shapes_named("Dot ").count(), 5);

        for (i, card) in cards.iter().enumerate() {
            let border = card.outline.unwrap().color;
            if i == 2 {
                assert_eq!(border, AMBER_500);
                assert_eq!(card.text.as_ref().unwrap().paragraphs[0].runs[0].color, AMBER_500);
            } else {
                assert_eq!(border, BLUE_600);
            }
        }

        let geometry = CanvasGeometry::plan(5, &renderer.config().canvas);
        for (i, dot) in deck.shapes_named("Dot ").enumerate() {
            let expected = geometry.top_margin + (i as f64 + 0.5) * geometry.slot_height;
            assert!((dot.frame.center_y() - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn test_cards_stay_on_their_side() {
        let renderer = TimelineRenderer::default();
        let deck = renderer.render(&alternating(6, None));
        let geometry = CanvasGeometry::plan(6, &renderer.config().canvas);

        for (i, card) in deck.shapes_named("Card ").enumerate() {
            if i % 2 == 0 {
                assert!(card.frame.right() < geometry.spine_center_x);
            } else {
                assert!(card.frame.x > geometry.spine_center_x);
            }
        }
    }

    #[test]
    fn test_zero_entries_draws_header_and_right_column_only() {
        let deck = TimelineRenderer::default().render(&SlideContent::new());

        let names: Vec<&str> = deck.shapes.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Header", "Right Column", "Role Card", "Motivation Card"]);
    }

    #[test]
    fn test_role_card_filters_then_caps() {
        let mut content = SlideContent::new();
        content.role = Some(role_with(&[
            "Operate DJI fleet",
            "One",
            "Two",
            "UviFy testbed",
            "Three",
            "Four",
            "Five",
        ]));

        let deck = TimelineRenderer::default().render(&content);
        let texts = deck.shape("Role Card").unwrap().paragraph_texts();

        assert_eq!(
            texts,
            vec![
                "Research Fellow",
                "2024",
                "Perception.",
                "RESPONSIBILITIES",
                "\u{2022} One",
                "\u{2022} Two",
                "\u{2022} Three",
                "\u{2022} Four",
            ]
        );
    }

    #[test]
    fn test_role_card_without_items() {
        let mut content = SlideContent::new();
        content.role = Some(role_with(&[]));

        let deck = TimelineRenderer::default().render(&content);
        let texts = deck.shape("Role Card").unwrap().paragraph_texts();
        assert_eq!(texts.len(), 4);
        assert_eq!(texts[3], "RESPONSIBILITIES");
    }

    #[test]
    fn test_missing_role_uses_fallback() {
        let deck = TimelineRenderer::default().render(&alternating(2, None));
        let texts = deck.shape("Role Card").unwrap().paragraph_texts();

        assert_eq!(texts[0], "Research Fellow \u{2014} ISTC CNR");
        assert_eq!(texts[1], "Jan 2024 \u{2013} Present");
        assert_eq!(texts[2], "");
        assert_eq!(texts.len(), 4);
    }

    #[test]
    fn test_motivation_comes_from_config() {
        let mut config = LayoutConfig::default();
        config.motivation.heading = "Why".into();
        config.motivation.items = vec![MotivationItem::new("Goal", "Fly further")];

        let deck = TimelineRenderer::new(config).render(&SlideContent::new());
        let shape = deck.shape("Motivation Card").unwrap();
        let frame = shape.text.as_ref().unwrap();

        assert_eq!(shape.paragraph_texts(), vec!["Why", "Goal: Fly further"]);
        assert!(frame.paragraphs[1].runs[0].bold);
        assert!(!frame.paragraphs[1].runs[1].bold);
    }

    #[test]
    fn test_default_motivation_block() {
        let deck = TimelineRenderer::default().render(&SlideContent::new());
        let texts = deck.shape("Motivation Card").unwrap().paragraph_texts();

        assert_eq!(texts.len(), 6);
        assert_eq!(texts[0], "PhD Motivation");
        assert_eq!(texts[2], "Gap: Classical pipelines reach fundamental limits");
    }

    #[test]
    fn test_shadow_toggle() {
        let mut config = LayoutConfig::default();
        config.shadow.enabled = false;

        let deck = TimelineRenderer::new(config).render(&alternating(1, None));
        assert!(deck.shapes.iter().all(|s| !s.shadow));

        let deck = TimelineRenderer::default().render(&alternating(1, None));
        assert!(deck.shape("Card 1").unwrap().shadow);
        assert!(!deck.shape("Header").unwrap().shadow);
    }

    #[test]
    fn test_text_placement() {
        let mut content = alternating(1, None);
        content.role = Some(role_with(&["One"]));
        let deck = TimelineRenderer::default().render(&content);

        for name in ["Header", "Card 1", "Role Card", "Motivation Card"] {
            let frame = deck.shape(name).unwrap().text.as_ref().unwrap();
            assert_eq!(frame.anchor, Anchor::Middle, "{}", name);
        }

        let first_align = |name: &str| {
            let frame = deck.shape(name).unwrap().text.as_ref().unwrap();
            frame.paragraphs[0].align
        };
        assert_eq!(first_align("Header"), Align::Center);
        assert_eq!(first_align("Card 1"), Align::Center);
        assert_eq!(first_align("Motivation Card"), Align::Center);
        assert_eq!(first_align("Role Card"), Align::Right);

        let card = deck.shape("Card 1").unwrap().text.as_ref().unwrap();
        assert_eq!(card.paragraphs[1].align, Align::Left);
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = TimelineRenderer::default();
        let content = alternating(4, Some(0));
        assert_eq!(renderer.render(&content), renderer.render(&content));
    }
}
