//! Structural and statement slides: title, section, callout, quote,
//! closing, big-number and section-description.

use crate::canvas::{CONTENT_WIDTH, MARGIN_X};
use crate::elements::{HAlign, PositionedElement, VAnchor};
use crate::text::Ctx;
use decksmith_types::Rect;

pub(crate) fn title_slide(
    ctx: &Ctx,
    title: &str,
    subtitle: Option<&str>,
    author: Option<&str>,
    date: Option<&str>,
) -> Vec<PositionedElement> {
    let mut elements = vec![ctx.text_box(
        Rect::new(0.9, 2.35, 11.5, 1.6),
        title,
        44.0,
        true,
        ctx.text(),
        HAlign::Left,
    )];

    if let Some(subtitle) = subtitle {
        elements.push(ctx.text_box(
            Rect::new(0.9, 4.05, 11.5, 0.8),
            subtitle,
            20.0,
            false,
            ctx.secondary(),
            HAlign::Left,
        ));
    }

    let byline: Vec<&str> = author.into_iter().chain(date).collect();
    if !byline.is_empty() {
        elements.push(ctx.text_box(
            Rect::new(0.9, 6.35, 11.5, 0.4),
            &byline.join(" | "),
            14.0,
            false,
            ctx.secondary(),
            HAlign::Left,
        ));
    }

    elements
}

pub(crate) fn section_slide(ctx: &Ctx, title: &str) -> Vec<PositionedElement> {
    vec![ctx.text_box_anchored(
        Rect::new(0.9, 2.9, 11.5, 1.7),
        title,
        40.0,
        true,
        ctx.text(),
        HAlign::Left,
        VAnchor::Middle,
    )]
}

pub(crate) fn callout_slide(ctx: &Ctx, text: &str, source: Option<&str>) -> Vec<PositionedElement> {
    let mut elements = vec![ctx.text_box_anchored(
        Rect::new(1.2, 2.6, 10.93, 2.0),
        text,
        36.0,
        true,
        ctx.text(),
        HAlign::Center,
        VAnchor::Middle,
    )];

    if let Some(source) = source {
        elements.push(ctx.text_box(
            Rect::new(1.2, 4.8, 10.93, 0.5),
            &format!("\u{2014} {}", source),
            16.0,
            false,
            ctx.secondary(),
            HAlign::Center,
        ));
    }

    elements
}

pub(crate) fn quote_slide(
    ctx: &Ctx,
    quote: &str,
    attribution: Option<&str>,
) -> Vec<PositionedElement> {
    let mut elements = vec![ctx.text_box_anchored(
        Rect::new(1.2, 2.4, 10.93, 2.4),
        &format!("\u{201C}{}\u{201D}", quote),
        32.0,
        false,
        ctx.text(),
        HAlign::Center,
        VAnchor::Middle,
    )];

    if let Some(attribution) = attribution {
        elements.push(ctx.text_box(
            Rect::new(1.2, 5.0, 10.93, 0.5),
            &format!("\u{2014} {}", attribution),
            16.0,
            false,
            ctx.secondary(),
            HAlign::Center,
        ));
    }

    elements
}

pub(crate) fn closing_slide(ctx: &Ctx, title: &str) -> Vec<PositionedElement> {
    vec![ctx.text_box_anchored(
        Rect::new(0.9, 3.0, 11.5, 1.5),
        title,
        48.0,
        true,
        ctx.text(),
        HAlign::Center,
        VAnchor::Middle,
    )]
}

pub(crate) fn big_number_slide(
    ctx: &Ctx,
    number: &str,
    text: &str,
    subtitle: Option<&str>,
) -> Vec<PositionedElement> {
    let mut elements = vec![
        ctx.text_box_anchored(
            Rect::new(1.0, 1.9, 11.33, 2.1),
            number,
            96.0,
            true,
            ctx.accent(),
            HAlign::Center,
            VAnchor::Middle,
        ),
        ctx.text_box(
            Rect::new(1.0, 4.2, 11.33, 0.9),
            text,
            24.0,
            false,
            ctx.text(),
            HAlign::Center,
        ),
    ];

    if let Some(subtitle) = subtitle {
        elements.push(ctx.text_box(
            Rect::new(1.0, 5.2, 11.33, 0.6),
            subtitle,
            16.0,
            false,
            ctx.secondary(),
            HAlign::Center,
        ));
    }

    elements
}

pub(crate) fn section_description_slide(
    ctx: &Ctx,
    title: &str,
    subtitle: Option<&str>,
    description: Option<&str>,
    bullets: &[String],
) -> Vec<PositionedElement> {
    let mut elements = vec![ctx.slide_title(title)];
    if let Some(subtitle) = subtitle {
        elements.push(ctx.slide_subtitle(subtitle));
    }

    let body = Rect::new(MARGIN_X, 2.3, CONTENT_WIDTH, 4.2);
    if let Some(description) = description {
        elements.push(ctx.text_box(body, description, 16.0, false, ctx.text(), HAlign::Left));
    } else if !bullets.is_empty() {
        elements.push(ctx.bullet_box(body, bullets, 18.0));
    }

    elements
}
