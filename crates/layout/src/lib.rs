//! Slide layout: maps each typed slide record to positioned visual elements.
//!
//! Every slide type has one routine, a pure function of the slide's fields
//! and the theme. Dispatch is the match in [`render_slide`]; slide order
//! never affects a routine's output.

mod canvas;
mod cards;
mod columns;
mod elements;
mod figures;
mod structural;
mod text;

pub use canvas::{SLIDE_HEIGHT, SLIDE_WIDTH};
pub use elements::{
    HAlign, LayoutElement, Outline, Paragraph, PositionedElement, RenderedSlide, ShapeElement,
    ShapeKind, TextElement, TextRun, VAnchor,
};

use crate::canvas::MARGIN_X;
use crate::text::Ctx;
use decksmith_model::Slide;
use decksmith_theme::Theme;
use decksmith_types::Rect;

/// Lay out one slide. `number` is the 1-based position in the deck, used
/// for the footer slide number.
pub fn render_slide(slide: &Slide, theme: &Theme, number: usize) -> RenderedSlide {
    let dark = slide.is_dark();
    let ctx = Ctx::new(theme, dark);
    log::debug!("Laying out slide {} ({})", number, slide.type_tag());

    let mut elements = match slide {
        Slide::Title { title, subtitle, author, date, .. } => structural::title_slide(
            &ctx,
            title,
            subtitle.as_deref(),
            author.as_deref(),
            date.as_deref(),
        ),
        Slide::Section { title, .. } => structural::section_slide(&ctx, title),
        Slide::Callout { text, source, .. } => {
            structural::callout_slide(&ctx, text, source.as_deref())
        }
        Slide::Quote { quote, attribution, .. } => {
            structural::quote_slide(&ctx, quote, attribution.as_deref())
        }
        Slide::Closing { title, .. } => structural::closing_slide(&ctx, title),
        Slide::BigNumber { number, text, subtitle, .. } => {
            structural::big_number_slide(&ctx, number, text, subtitle.as_deref())
        }
        Slide::SectionDescription { title, subtitle, description, bullets, .. } => {
            structural::section_description_slide(
                &ctx,
                title,
                subtitle.as_deref(),
                description.as_deref(),
                bullets,
            )
        }
        Slide::Content { title, subtitle, bullets, .. } => {
            columns::content_slide(&ctx, title, subtitle.as_deref(), bullets)
        }
        Slide::OneColumn { title, subtitle, content, bullets, .. } => {
            columns::one_column_slide(&ctx, title, subtitle.as_deref(), content.as_deref(), bullets)
        }
        Slide::TwoColumn {
            title,
            subtitle,
            left_header,
            right_header,
            left,
            right,
            ..
        } => columns::two_column_slide(
            &ctx,
            title,
            subtitle.as_deref(),
            left_header.as_deref(),
            right_header.as_deref(),
            left,
            right,
        ),
        Slide::ThreeColumn { title, subtitle, columns, .. } => {
            columns::multi_column_slide(&ctx, title, subtitle.as_deref(), columns, 3, false)
        }
        Slide::TwoColumnIcons { title, subtitle, columns, .. } => {
            columns::multi_column_slide(&ctx, title, subtitle.as_deref(), columns, 2, true)
        }
        Slide::ThreeColumnIcons { title, subtitle, columns, .. } => {
            columns::multi_column_slide(&ctx, title, subtitle.as_deref(), columns, 3, true)
        }
        Slide::Cards { title, subtitle, cards, .. } => {
            cards::cards_slide(&ctx, title, subtitle.as_deref(), cards)
        }
        Slide::CardRight {
            title,
            subtitle,
            content,
            bullets,
            card_content,
            ..
        } => cards::card_side_slide(
            &ctx,
            title,
            subtitle.as_deref(),
            content.as_deref(),
            bullets,
            card_content.as_deref(),
            false,
        ),
        Slide::CardLeft {
            title,
            subtitle,
            content,
            bullets,
            card_content,
            ..
        } => cards::card_side_slide(
            &ctx,
            title,
            subtitle.as_deref(),
            content.as_deref(),
            bullets,
            card_content.as_deref(),
            true,
        ),
        Slide::CardFull { title, subtitle, content, .. } => {
            cards::card_full_slide(&ctx, title, subtitle.as_deref(), content.as_deref())
        }
        Slide::Agenda { title, items, .. } => figures::agenda_slide(&ctx, title, items),
        Slide::Timeline { title, steps, .. } => figures::timeline_slide(&ctx, title, steps),
        Slide::IconGrid { title, items, .. } => figures::icon_grid_slide(&ctx, title, items),
        Slide::StatRow { title, stats, .. } => figures::stat_row_slide(&ctx, title, stats),
        Slide::ProsCons {
            title,
            pros_header,
            cons_header,
            pros,
            cons,
            ..
        } => figures::pros_cons_slide(&ctx, title, pros_header, cons_header, pros, cons),
        Slide::Comparison { title, left_label, right_label, .. } => {
            figures::comparison_slide(&ctx, title, left_label, right_label)
        }
        Slide::Checklist { title, items, .. } => figures::checklist_slide(&ctx, title, items),
        Slide::Logos { title, subtitle, logos, .. } => {
            figures::logos_slide(&ctx, title, subtitle.as_deref(), logos)
        }
    };

    if !dark {
        append_footer(&ctx, number, &mut elements);
    }

    RenderedSlide {
        dark,
        background: ctx.background(),
        elements,
        notes: slide.notes().map(str::to_string),
    }
}

/// Footer text bottom-left and slide number bottom-right on light slides.
fn append_footer(ctx: &Ctx, number: usize, elements: &mut Vec<PositionedElement>) {
    let Some(footer) = ctx.theme().footer.as_ref() else {
        return;
    };
    elements.push(ctx.text_box(
        Rect::new(MARGIN_X, 7.08, 8.0, 0.32),
        &footer.text,
        10.0,
        false,
        ctx.secondary(),
        HAlign::Left,
    ));
    elements.push(ctx.text_box(
        Rect::new(12.1, 7.08, 0.7, 0.32),
        &number.to_string(),
        10.0,
        false,
        ctx.secondary(),
        HAlign::Right,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use decksmith_model::Slide;
    use decksmith_theme::{Footer, Theme};

    fn minimal_slide(tag: &str) -> Slide {
        let value = serde_json::json!({
            "type": tag,
            "title": "Sample Title",
            "number": "42",
            "text": "Answer",
            "quote": "Words",
            "items": [],
            "steps": [],
            "stats": [],
            "logos": [],
        });
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn every_known_type_renders_with_minimal_fields() {
        let theme = Theme::default();
        for tag in Slide::KNOWN_TYPES {
            let slide = minimal_slide(tag);
            let rendered = render_slide(&slide, &theme, 1);
            assert!(
                !rendered.elements.is_empty(),
                "type {} produced no elements",
                tag
            );
        }
    }

    #[test]
    fn background_mode_is_a_pure_function_of_type() {
        let theme = Theme::default();
        let dark = ["title", "section", "callout", "quote", "closing"];
        for tag in Slide::KNOWN_TYPES {
            let rendered = render_slide(&minimal_slide(tag), &theme, 1);
            assert_eq!(rendered.dark, dark.contains(&tag), "tag {}", tag);
            assert_eq!(
                rendered.background,
                theme.mode(rendered.dark).background,
                "tag {}",
                tag
            );
        }
    }

    #[test]
    fn big_number_slide_carries_its_literals() {
        let theme = Theme::default();
        let slide: Slide = serde_json::from_value(serde_json::json!({
            "type": "big-number", "number": "42", "text": "Answer"
        }))
        .unwrap();
        let rendered = render_slide(&slide, &theme, 1);
        assert!(!rendered.dark);
        assert!(rendered.contains_text("42"));
        assert!(rendered.contains_text("Answer"));
    }

    #[test]
    fn accent_markup_colors_the_marked_run() {
        let theme = Theme::default();
        let slide: Slide = serde_json::from_value(serde_json::json!({
            "type": "content", "title": "Scale *without* limits"
        }))
        .unwrap();
        let rendered = render_slide(&slide, &theme, 1);

        let accent = theme.modes.light.accent;
        let accented: Vec<_> = rendered
            .text_runs()
            .filter(|run| run.color == accent)
            .map(|run| run.text.as_str())
            .collect();
        assert_eq!(accented, ["without"]);
    }

    #[test]
    fn stat_row_places_one_divider_between_adjacent_stats() {
        let theme = Theme::default();
        let slide: Slide = serde_json::from_value(serde_json::json!({
            "type": "stat-row",
            "stats": [
                { "value": "10x", "label": "Faster" },
                { "value": "99.99%", "label": "Uptime" },
                { "value": "3PB", "label": "Ingested" }
            ]
        }))
        .unwrap();
        let rendered = render_slide(&slide, &theme, 1);

        let dividers = rendered
            .elements
            .iter()
            .filter(|el| match &el.element {
                LayoutElement::Shape(shape) => {
                    shape.fill == theme.elements.stat_row_divider && shape.kind == ShapeKind::Rect
                }
                _ => false,
            })
            .count();
        assert_eq!(dividers, 2);
        assert!(rendered.contains_text("99.99%"));
    }

    #[test]
    fn footer_appears_only_on_light_slides_when_configured() {
        let mut theme = Theme::default();
        theme.footer = Some(Footer { text: "Q3 Review".to_string() });

        let light = render_slide(&minimal_slide("content"), &theme, 7);
        assert!(light.contains_text("Q3 Review"));
        assert!(light.contains_text("7"));

        let dark = render_slide(&minimal_slide("section"), &theme, 7);
        assert!(!dark.contains_text("Q3 Review"));
    }

    #[test]
    fn no_footer_without_theme_configuration() {
        let theme = Theme::default();
        let rendered = render_slide(&minimal_slide("content"), &theme, 3);
        assert!(!rendered.contains_text("3"));
    }

    #[test]
    fn checklist_marks_checked_items() {
        let theme = Theme::default();
        let slide: Slide = serde_json::from_value(serde_json::json!({
            "type": "checklist",
            "items": ["open", { "text": "done", "checked": true }]
        }))
        .unwrap();
        let rendered = render_slide(&slide, &theme, 1);

        let checkmarks = rendered
            .text_runs()
            .filter(|run| run.text == "\u{2713}")
            .count();
        assert_eq!(checkmarks, 1);
        assert!(rendered.contains_text("open"));
        assert!(rendered.contains_text("done"));
    }

    #[test]
    fn timeline_divides_width_by_step_count() {
        let theme = Theme::default();
        let slide: Slide = serde_json::from_value(serde_json::json!({
            "type": "timeline",
            "steps": [
                { "title": "Plan" },
                { "title": "Build" },
                { "title": "Ship" }
            ]
        }))
        .unwrap();
        let rendered = render_slide(&slide, &theme, 1);

        let circles: Vec<f32> = rendered
            .elements
            .iter()
            .filter_map(|el| match &el.element {
                LayoutElement::Shape(shape) if shape.kind == ShapeKind::Ellipse => {
                    Some(el.frame.x)
                }
                _ => None,
            })
            .collect();
        assert_eq!(circles.len(), 3);
        let gap01 = circles[1] - circles[0];
        let gap12 = circles[2] - circles[1];
        assert!((gap01 - gap12).abs() < 1e-4);
    }
}
