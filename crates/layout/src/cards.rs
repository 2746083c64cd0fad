//! Card slides: raised surface wells holding free text or bullets.

use crate::canvas::{CONTENT_WIDTH, MARGIN_X};
use crate::elements::{HAlign, Outline, PositionedElement, ShapeKind};
use crate::text::{Ctx, labeled_shape};
use decksmith_model::Card;
use decksmith_types::Rect;

const CARD_GAP: f32 = 0.5;
const CARD_Y: f32 = 2.1;
const CARD_HEIGHT: f32 = 4.4;
const CARD_PAD: f32 = 0.25;

fn card_well(ctx: &Ctx, frame: Rect) -> PositionedElement {
    labeled_shape(
        frame,
        ShapeKind::RoundedRect,
        ctx.surface(),
        Some(Outline {
            color: ctx.theme().elements.stat_row_divider,
            weight_pt: 1.0,
        }),
        None,
    )
}

pub(crate) fn cards_slide(
    ctx: &Ctx,
    title: &str,
    subtitle: Option<&str>,
    cards: &[Card],
) -> Vec<PositionedElement> {
    let mut elements = vec![ctx.slide_title(title)];
    if let Some(subtitle) = subtitle {
        elements.push(ctx.slide_subtitle(subtitle));
    }

    let count = cards.len().min(3);
    if count == 0 {
        return elements;
    }
    let width = (CONTENT_WIDTH - CARD_GAP * (count as f32 - 1.0)) / count as f32;

    for (i, card) in cards.iter().take(count).enumerate() {
        let x = MARGIN_X + i as f32 * (width + CARD_GAP);
        elements.push(card_well(ctx, Rect::new(x, CARD_Y, width, CARD_HEIGHT)));

        let inner_x = x + CARD_PAD;
        let inner_w = width - 2.0 * CARD_PAD;
        let mut body_y = CARD_Y + CARD_PAD;

        if let Some(header) = card.header.as_deref() {
            elements.push(ctx.text_box(
                Rect::new(inner_x, body_y, inner_w, 0.5),
                header,
                18.0,
                true,
                ctx.on_surface(),
                HAlign::Left,
            ));
            body_y += 0.65;
        }

        let body = Rect::new(inner_x, body_y, inner_w, CARD_Y + CARD_HEIGHT - CARD_PAD - body_y);
        if let Some(content) = card.content.as_deref() {
            elements.push(ctx.text_box(body, content, 14.0, false, ctx.on_surface(), HAlign::Left));
        } else if !card.items.is_empty() {
            elements.push(ctx.bullet_box(body, &card.items, 14.0));
        }
    }

    elements
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn card_side_slide(
    ctx: &Ctx,
    title: &str,
    subtitle: Option<&str>,
    content: Option<&str>,
    bullets: &[String],
    card_content: Option<&str>,
    card_on_left: bool,
) -> Vec<PositionedElement> {
    let mut elements = vec![ctx.slide_title(title)];
    if let Some(subtitle) = subtitle {
        elements.push(ctx.slide_subtitle(subtitle));
    }

    let card_w = 5.07;
    let body_w = CONTENT_WIDTH - card_w - CARD_GAP;
    let (card_x, body_x) = if card_on_left {
        (MARGIN_X, MARGIN_X + card_w + CARD_GAP)
    } else {
        (MARGIN_X + body_w + CARD_GAP, MARGIN_X)
    };

    let body = Rect::new(body_x, CARD_Y, body_w, CARD_HEIGHT);
    if let Some(content) = content {
        elements.push(ctx.text_box(body, content, 16.0, false, ctx.text(), HAlign::Left));
    } else if !bullets.is_empty() {
        elements.push(ctx.bullet_box(body, bullets, 18.0));
    }

    elements.push(card_well(ctx, Rect::new(card_x, CARD_Y, card_w, CARD_HEIGHT)));
    if let Some(card_content) = card_content {
        elements.push(ctx.text_box(
            Rect::new(
                card_x + CARD_PAD,
                CARD_Y + CARD_PAD,
                card_w - 2.0 * CARD_PAD,
                CARD_HEIGHT - 2.0 * CARD_PAD,
            ),
            card_content,
            14.0,
            false,
            ctx.on_surface(),
            HAlign::Left,
        ));
    }

    elements
}

pub(crate) fn card_full_slide(
    ctx: &Ctx,
    title: &str,
    subtitle: Option<&str>,
    content: Option<&str>,
) -> Vec<PositionedElement> {
    let mut elements = vec![ctx.slide_title(title)];
    if let Some(subtitle) = subtitle {
        elements.push(ctx.slide_subtitle(subtitle));
    }

    elements.push(card_well(ctx, Rect::new(MARGIN_X, CARD_Y, CONTENT_WIDTH, CARD_HEIGHT)));
    if let Some(content) = content {
        elements.push(ctx.text_box(
            Rect::new(
                MARGIN_X + CARD_PAD,
                CARD_Y + CARD_PAD,
                CONTENT_WIDTH - 2.0 * CARD_PAD,
                CARD_HEIGHT - 2.0 * CARD_PAD,
            ),
            content,
            16.0,
            false,
            ctx.on_surface(),
            HAlign::Left,
        ));
    }

    elements
}
