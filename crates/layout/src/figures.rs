//! Figure-style slides built from shapes: agenda, timeline, icon-grid,
//! stat-row, pros-cons, comparison, checklist and logos.

use crate::elements::{HAlign, Outline, PositionedElement, ShapeKind};
use crate::text::{Ctx, labeled_shape};
use decksmith_model::{ChecklistItem, GridItem, LogoItem, Stat, Step};
use decksmith_types::Rect;

pub(crate) fn agenda_slide(ctx: &Ctx, title: &str, items: &[String]) -> Vec<PositionedElement> {
    let mut elements = vec![ctx.slide_title(title)];
    let start_y = 2.0;

    for (i, item) in items.iter().enumerate() {
        let y = start_y + i as f32 * 0.9;

        // Numbered hexagon marker.
        elements.push(labeled_shape(
            Rect::new(0.75, y, 0.6, 0.6),
            ShapeKind::Hexagon,
            ctx.accent(),
            None,
            Some(ctx.shape_label(&(i + 1).to_string(), 18.0, true, ctx.on_accent())),
        ));

        // Item bar with the entry text on top of it.
        elements.push(ctx.shape(Rect::new(1.5, y, 10.5, 0.6), ShapeKind::Rect, ctx.surface()));
        elements.push(ctx.text_box(
            Rect::new(1.7, y + 0.1, 10.1, 0.45),
            item,
            20.0,
            false,
            ctx.on_surface(),
            HAlign::Left,
        ));
    }

    elements
}

pub(crate) fn timeline_slide(ctx: &Ctx, title: &str, steps: &[Step]) -> Vec<PositionedElement> {
    let mut elements = vec![ctx.slide_title(title)];
    if steps.is_empty() {
        return elements;
    }

    let step_width = 10.5 / steps.len() as f32;
    let start_x = 1.4;

    // Connecting line behind the step markers.
    elements.push(ctx.shape(
        Rect::new(start_x + 0.3, 3.1, step_width * steps.len() as f32 - 0.6, 0.05),
        ShapeKind::Rect,
        ctx.accent(),
    ));

    for (i, step) in steps.iter().enumerate() {
        let x = start_x + i as f32 * step_width;

        elements.push(labeled_shape(
            Rect::new(x + step_width / 2.0 - 0.35, 2.75, 0.7, 0.7),
            ShapeKind::Ellipse,
            ctx.accent(),
            None,
            Some(ctx.shape_label(&(i + 1).to_string(), 18.0, true, ctx.on_accent())),
        ));

        elements.push(ctx.text_box(
            Rect::new(x, 3.7, step_width, 0.6),
            &step.title,
            16.0,
            true,
            ctx.text(),
            HAlign::Center,
        ));
        if let Some(description) = step.description.as_deref() {
            elements.push(ctx.text_box(
                Rect::new(x, 4.4, step_width, 1.5),
                description,
                12.0,
                false,
                ctx.secondary(),
                HAlign::Center,
            ));
        }
    }

    elements
}

pub(crate) fn icon_grid_slide(ctx: &Ctx, title: &str, items: &[GridItem]) -> Vec<PositionedElement> {
    let mut elements = vec![ctx.slide_title(title)];
    if items.is_empty() {
        return elements;
    }

    let cols = match items.len() {
        n if n <= 3 => n,
        n if n <= 6 => 3,
        _ => 4,
    };
    let cell_width = 11.0 / cols as f32;
    let (start_x, start_y) = (1.2, 1.8);

    for (i, item) in items.iter().take(8).enumerate() {
        let x = start_x + (i % cols) as f32 * cell_width;
        let y = start_y + (i / cols) as f32 * 2.7;

        // Icon roundel: explicit icon text, else the title's initial.
        let icon = match item.icon.as_deref() {
            Some(icon) if icon.chars().count() <= 2 => icon.to_string(),
            Some(icon) => icon.chars().take(1).collect(),
            None => item
                .title
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_else(|| "?".to_string()),
        };
        elements.push(labeled_shape(
            Rect::new(x + cell_width / 2.0 - 0.5, y, 1.0, 1.0),
            ShapeKind::Ellipse,
            ctx.surface(),
            Some(Outline { color: ctx.accent(), weight_pt: 3.0 }),
            Some(ctx.shape_label(&icon, 24.0, true, ctx.accent())),
        ));

        elements.push(ctx.text_box(
            Rect::new(x, y + 1.1, cell_width, 0.5),
            &item.title,
            14.0,
            true,
            ctx.text(),
            HAlign::Center,
        ));
        if let Some(description) = item.description.as_deref() {
            elements.push(ctx.text_box(
                Rect::new(x, y + 1.55, cell_width, 0.8),
                description,
                11.0,
                false,
                ctx.secondary(),
                HAlign::Center,
            ));
        }
    }

    elements
}

pub(crate) fn stat_row_slide(ctx: &Ctx, title: &str, stats: &[Stat]) -> Vec<PositionedElement> {
    let mut elements = vec![ctx.slide_title(title)];
    if stats.is_empty() {
        return elements;
    }

    let stat_width = 11.5 / stats.len() as f32;
    let start_x = 0.9;

    for (i, stat) in stats.iter().enumerate() {
        let x = start_x + i as f32 * stat_width;

        elements.push(ctx.text_box(
            Rect::new(x, 2.5, stat_width - 0.3, 1.5),
            &stat.value,
            56.0,
            true,
            ctx.accent(),
            HAlign::Center,
        ));
        elements.push(ctx.text_box(
            Rect::new(x, 4.2, stat_width - 0.3, 1.0),
            &stat.label,
            16.0,
            true,
            ctx.text(),
            HAlign::Center,
        ));

        // Divider between adjacent stats, not after the last.
        if i < stats.len() - 1 {
            elements.push(ctx.shape(
                Rect::new(x + stat_width - 0.15, 2.7, 0.02, 2.5),
                ShapeKind::Rect,
                ctx.theme().elements.stat_row_divider,
            ));
        }
    }

    elements
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn pros_cons_slide(
    ctx: &Ctx,
    title: &str,
    pros_header: &str,
    cons_header: &str,
    pros: &[String],
    cons: &[String],
) -> Vec<PositionedElement> {
    let mut elements = vec![ctx.slide_title(title)];

    let halves = [
        (0.75, pros_header, ctx.theme().elements.pros_header_color, "\u{2713}", pros),
        (7.0, cons_header, ctx.theme().elements.cons_header_color, "\u{2717}", cons),
    ];
    for (x, header, header_color, mark, items) in halves {
        elements.push(ctx.text_box(
            Rect::new(x, 1.6, 5.5, 0.5),
            header,
            20.0,
            true,
            header_color,
            HAlign::Left,
        ));
        for (i, item) in items.iter().enumerate() {
            elements.push(ctx.text_box(
                Rect::new(x, 2.2 + i as f32 * 0.6, 5.5, 0.5),
                &format!("{}  {}", mark, item),
                16.0,
                false,
                ctx.text(),
                HAlign::Left,
            ));
        }
    }

    elements
}

pub(crate) fn comparison_slide(
    ctx: &Ctx,
    title: &str,
    left_label: &str,
    right_label: &str,
) -> Vec<PositionedElement> {
    vec![
        ctx.slide_title(title),
        labeled_shape(
            Rect::new(6.166, 3.25, 1.0, 1.0),
            ShapeKind::Diamond,
            ctx.accent(),
            None,
            Some(ctx.shape_label("vs.", 14.0, true, ctx.on_accent())),
        ),
        ctx.text_box(
            Rect::new(1.5, 5.0, 4.0, 0.6),
            left_label,
            20.0,
            true,
            ctx.text(),
            HAlign::Center,
        ),
        ctx.text_box(
            Rect::new(7.833, 5.0, 4.0, 0.6),
            right_label,
            20.0,
            true,
            ctx.text(),
            HAlign::Center,
        ),
    ]
}

pub(crate) fn checklist_slide(
    ctx: &Ctx,
    title: &str,
    items: &[ChecklistItem],
) -> Vec<PositionedElement> {
    let mut elements = vec![ctx.slide_title(title)];

    for (i, item) in items.iter().enumerate() {
        let y = 1.8 + i as f32 * 0.7;
        let (fill, label) = if item.checked() {
            (
                ctx.accent(),
                Some(ctx.shape_label("\u{2713}", 14.0, true, ctx.on_accent())),
            )
        } else {
            (ctx.surface(), None)
        };

        elements.push(labeled_shape(
            Rect::new(0.9, y, 0.35, 0.35),
            ShapeKind::RoundedRect,
            fill,
            Some(Outline { color: ctx.accent(), weight_pt: 2.0 }),
            label,
        ));
        elements.push(ctx.text_box(
            Rect::new(1.5, y, 10.5, 0.4),
            item.text(),
            16.0,
            false,
            ctx.text(),
            HAlign::Left,
        ));
    }

    elements
}

pub(crate) fn logos_slide(
    ctx: &Ctx,
    title: &str,
    subtitle: Option<&str>,
    logos: &[LogoItem],
) -> Vec<PositionedElement> {
    let mut elements = vec![ctx.slide_title(title)];
    if let Some(subtitle) = subtitle {
        elements.push(ctx.text_box(
            Rect::new(0.75, 1.3, 11.0, 0.5),
            subtitle,
            16.0,
            false,
            ctx.secondary(),
            HAlign::Center,
        ));
    }
    if logos.is_empty() {
        return elements;
    }

    let cols = match logos.len() {
        n if n <= 4 => n,
        n if n <= 8 => 4,
        _ => 5,
    };
    let cell_width = 10.0 / cols as f32;
    let (start_x, start_y) = (1.7, 2.5);

    for (i, logo) in logos.iter().take(10).enumerate() {
        let x = start_x + (i % cols) as f32 * cell_width;
        let y = start_y + (i / cols) as f32 * 1.9;

        elements.push(labeled_shape(
            Rect::new(x, y, cell_width - 0.4, 1.3),
            ShapeKind::RoundedRect,
            ctx.surface(),
            Some(Outline {
                color: ctx.theme().elements.stat_row_divider,
                weight_pt: 1.0,
            }),
            Some(ctx.shape_label(logo.name(), 12.0, true, ctx.theme().modes.light.text_secondary)),
        ));
    }

    elements
}
