//! Bulleted content and multi-column slides.
//!
//! Column grids divide the usable width evenly: N columns get
//! (content width - gaps) / N each, matching the item count up to the
//! type's column cap.

use crate::canvas::{CONTENT_WIDTH, MARGIN_X};
use crate::elements::{HAlign, Outline, PositionedElement, ShapeKind};
use crate::text::{Ctx, labeled_shape};
use decksmith_model::Column;
use decksmith_types::Rect;

const COLUMN_GAP: f32 = 0.5;

pub(crate) fn content_slide(
    ctx: &Ctx,
    title: &str,
    subtitle: Option<&str>,
    bullets: &[String],
) -> Vec<PositionedElement> {
    let mut elements = vec![ctx.slide_title(title)];
    if let Some(subtitle) = subtitle {
        elements.push(ctx.slide_subtitle(subtitle));
    }
    if !bullets.is_empty() {
        elements.push(ctx.bullet_box(
            Rect::new(MARGIN_X, 2.2, CONTENT_WIDTH, 4.5),
            bullets,
            18.0,
        ));
    }
    elements
}

pub(crate) fn one_column_slide(
    ctx: &Ctx,
    title: &str,
    subtitle: Option<&str>,
    content: Option<&str>,
    bullets: &[String],
) -> Vec<PositionedElement> {
    let mut elements = vec![ctx.slide_title(title)];
    if let Some(subtitle) = subtitle {
        elements.push(ctx.slide_subtitle(subtitle));
    }

    let body = Rect::new(MARGIN_X, 2.2, CONTENT_WIDTH, 4.5);
    if let Some(content) = content {
        elements.push(ctx.text_box(body, content, 16.0, false, ctx.text(), HAlign::Left));
    } else if !bullets.is_empty() {
        elements.push(ctx.bullet_box(body, bullets, 18.0));
    }
    elements
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn two_column_slide(
    ctx: &Ctx,
    title: &str,
    subtitle: Option<&str>,
    left_header: Option<&str>,
    right_header: Option<&str>,
    left: &[String],
    right: &[String],
) -> Vec<PositionedElement> {
    let mut elements = vec![ctx.slide_title(title)];
    if let Some(subtitle) = subtitle {
        elements.push(ctx.slide_subtitle(subtitle));
    }

    let width = (CONTENT_WIDTH - COLUMN_GAP) / 2.0;
    let halves = [(0usize, left_header, left), (1usize, right_header, right)];
    for (i, header, items) in halves {
        let x = MARGIN_X + i as f32 * (width + COLUMN_GAP);
        if let Some(header) = header {
            elements.push(ctx.text_box(
                Rect::new(x, 2.1, width, 0.5),
                header,
                20.0,
                true,
                ctx.text(),
                HAlign::Left,
            ));
        }
        if !items.is_empty() {
            elements.push(ctx.bullet_box(Rect::new(x, 2.75, width, 3.9), items, 16.0));
        }
    }

    elements
}

pub(crate) fn multi_column_slide(
    ctx: &Ctx,
    title: &str,
    subtitle: Option<&str>,
    columns: &[Column],
    max_columns: usize,
    with_icons: bool,
) -> Vec<PositionedElement> {
    let mut elements = vec![ctx.slide_title(title)];
    if let Some(subtitle) = subtitle {
        elements.push(ctx.slide_subtitle(subtitle));
    }
    elements.extend(column_grid(ctx, columns, max_columns, with_icons));
    elements
}

fn column_grid(
    ctx: &Ctx,
    columns: &[Column],
    max_columns: usize,
    with_icons: bool,
) -> Vec<PositionedElement> {
    let count = columns.len().min(max_columns);
    if count == 0 {
        return Vec::new();
    }

    let width = (CONTENT_WIDTH - COLUMN_GAP * (count as f32 - 1.0)) / count as f32;
    let header_y = if with_icons { 3.1 } else { 2.1 };
    let items_y = header_y + 0.65;

    let mut elements = Vec::new();
    for (i, column) in columns.iter().take(count).enumerate() {
        let x = MARGIN_X + i as f32 * (width + COLUMN_GAP);

        if with_icons {
            // Icon spot: accent-ringed circle with the header's initial.
            let initial = column
                .header
                .as_deref()
                .and_then(|h| h.chars().next())
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_else(|| "?".to_string());
            elements.push(labeled_shape(
                Rect::new(x + width / 2.0 - 0.4, 2.1, 0.8, 0.8),
                ShapeKind::Ellipse,
                ctx.surface(),
                Some(Outline { color: ctx.accent(), weight_pt: 3.0 }),
                Some(ctx.shape_label(&initial, 20.0, true, ctx.accent())),
            ));
        }

        if let Some(header) = column.header.as_deref() {
            let align = if with_icons { HAlign::Center } else { HAlign::Left };
            elements.push(ctx.text_box(
                Rect::new(x, header_y, width, 0.5),
                header,
                20.0,
                true,
                ctx.text(),
                align,
            ));
        }
        if !column.items.is_empty() {
            elements.push(ctx.bullet_box(
                Rect::new(x, items_y, width, 6.65 - items_y),
                &column.items,
                14.0,
            ));
        }
    }
    elements
}
