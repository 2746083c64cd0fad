//! Shared text-box and shape construction helpers.
//!
//! `Ctx` resolves theme tokens for the slide's background mode so routines
//! ask for "the text color" rather than picking light/dark variants
//! themselves. Accent markup is expanded here into per-run coloring.

use crate::canvas::{CONTENT_WIDTH, MARGIN_X, TITLE_Y};
use crate::elements::{
    HAlign, LayoutElement, Outline, Paragraph, PositionedElement, ShapeElement, ShapeKind,
    TextElement, TextRun, VAnchor,
};
use decksmith_model::parse_accent_runs;
use decksmith_theme::Theme;
use decksmith_types::{Color, Rect};

/// Token resolution context for one slide render.
pub(crate) struct Ctx<'a> {
    theme: &'a Theme,
    dark: bool,
}

impl<'a> Ctx<'a> {
    pub fn new(theme: &'a Theme, dark: bool) -> Self {
        Self { theme, dark }
    }

    pub fn theme(&self) -> &Theme {
        self.theme
    }

    pub fn background(&self) -> Color {
        self.theme.mode(self.dark).background
    }

    pub fn text(&self) -> Color {
        self.theme.mode(self.dark).text_primary
    }

    pub fn secondary(&self) -> Color {
        self.theme.mode(self.dark).text_secondary
    }

    pub fn accent(&self) -> Color {
        self.theme.mode(self.dark).accent
    }

    pub fn surface(&self) -> Color {
        self.theme.mode(self.dark).surface
    }

    /// Text color for labels sitting on surface fills, regardless of mode.
    pub fn on_surface(&self) -> Color {
        self.theme.modes.light.text_primary
    }

    /// Text color for labels sitting on accent fills.
    pub fn on_accent(&self) -> Color {
        self.theme.modes.dark.text_primary
    }

    pub fn font(&self) -> &str {
        &self.theme.typography.font_family
    }

    /// Expand accent markup into styled runs using the base color.
    pub fn runs(&self, text: &str, size: f32, bold: bool, color: Color) -> Vec<TextRun> {
        parse_accent_runs(text)
            .into_iter()
            .map(|run| TextRun {
                color: if run.accent { self.accent() } else { color },
                text: run.text,
                font: self.font().to_string(),
                size,
                bold,
            })
            .collect()
    }

    pub fn paragraph(
        &self,
        text: &str,
        size: f32,
        bold: bool,
        color: Color,
        align: HAlign,
    ) -> Paragraph {
        Paragraph {
            runs: self.runs(text, size, bold, color),
            align,
            bullet: false,
        }
    }

    /// A single-paragraph text box anchored to the top of its frame.
    pub fn text_box(
        &self,
        frame: Rect,
        text: &str,
        size: f32,
        bold: bool,
        color: Color,
        align: HAlign,
    ) -> PositionedElement {
        self.text_box_anchored(frame, text, size, bold, color, align, VAnchor::Top)
    }

    pub fn text_box_anchored(
        &self,
        frame: Rect,
        text: &str,
        size: f32,
        bold: bool,
        color: Color,
        align: HAlign,
        anchor: VAnchor,
    ) -> PositionedElement {
        positioned(
            frame,
            LayoutElement::Text(TextElement {
                paragraphs: vec![self.paragraph(text, size, bold, color, align)],
                anchor,
                wrap: true,
            }),
        )
    }

    /// A bulleted list in a single text box.
    pub fn bullet_box(&self, frame: Rect, items: &[String], size: f32) -> PositionedElement {
        let paragraphs = items
            .iter()
            .map(|item| Paragraph {
                runs: self.runs(item, size, false, self.text()),
                align: HAlign::Left,
                bullet: true,
            })
            .collect();
        positioned(
            frame,
            LayoutElement::Text(TextElement {
                paragraphs,
                anchor: VAnchor::Top,
                wrap: true,
            }),
        )
    }

    /// A filled shape with no outline.
    pub fn shape(&self, frame: Rect, kind: ShapeKind, fill: Color) -> PositionedElement {
        positioned(
            frame,
            LayoutElement::Shape(ShapeElement {
                kind,
                fill,
                outline: None,
                label: None,
            }),
        )
    }

    /// A centered middle-anchored label for placement inside a shape.
    pub fn shape_label(&self, text: &str, size: f32, bold: bool, color: Color) -> TextElement {
        TextElement {
            paragraphs: vec![Paragraph {
                runs: vec![TextRun {
                    text: text.to_string(),
                    font: self.font().to_string(),
                    size,
                    bold,
                    color,
                }],
                align: HAlign::Center,
                bullet: false,
            }],
            anchor: VAnchor::Middle,
            wrap: false,
        }
    }

    /// The standard title row shared by all content slides.
    pub fn slide_title(&self, text: &str) -> PositionedElement {
        self.text_box(
            Rect::new(MARGIN_X, TITLE_Y, CONTENT_WIDTH, 0.9),
            text,
            36.0,
            true,
            self.text(),
            HAlign::Left,
        )
    }

    /// The standard subtitle row under the title.
    pub fn slide_subtitle(&self, text: &str) -> PositionedElement {
        self.text_box(
            Rect::new(MARGIN_X, 1.5, CONTENT_WIDTH, 0.5),
            text,
            16.0,
            false,
            self.secondary(),
            HAlign::Left,
        )
    }
}

pub(crate) fn positioned(frame: Rect, element: LayoutElement) -> PositionedElement {
    PositionedElement { frame, element }
}

/// A filled, outlined shape carrying an optional centered label.
pub(crate) fn labeled_shape(
    frame: Rect,
    kind: ShapeKind,
    fill: Color,
    outline: Option<Outline>,
    label: Option<TextElement>,
) -> PositionedElement {
    positioned(
        frame,
        LayoutElement::Shape(ShapeElement { kind, fill, outline, label }),
    )
}
