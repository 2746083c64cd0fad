//! Output types of the layout process: positioned elements ready for rendering.

use decksmith_types::{Color, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAnchor {
    Top,
    Middle,
}

/// Preset shape geometries the renderer knows how to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rect,
    RoundedRect,
    Ellipse,
    Hexagon,
    Diamond,
}

/// A contiguous span of uniformly styled text.
#[derive(Debug, Clone)]
pub struct TextRun {
    pub text: String,
    pub font: String,
    pub size: f32,
    pub bold: bool,
    pub color: Color,
}

#[derive(Debug, Clone)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    pub align: HAlign,
    pub bullet: bool,
}

#[derive(Debug, Clone)]
pub struct TextElement {
    pub paragraphs: Vec<Paragraph>,
    pub anchor: VAnchor,
    pub wrap: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Outline {
    pub color: Color,
    pub weight_pt: f32,
}

/// A filled preset shape, optionally outlined and carrying a centered label.
#[derive(Debug, Clone)]
pub struct ShapeElement {
    pub kind: ShapeKind,
    pub fill: Color,
    pub outline: Option<Outline>,
    pub label: Option<TextElement>,
}

#[derive(Debug, Clone)]
pub enum LayoutElement {
    Text(TextElement),
    Shape(ShapeElement),
}

/// An element placed at a fixed frame on the slide canvas, in inches.
#[derive(Debug, Clone)]
pub struct PositionedElement {
    pub frame: Rect,
    pub element: LayoutElement,
}

/// One fully laid-out slide, ready for the document assembler.
#[derive(Debug, Clone)]
pub struct RenderedSlide {
    pub dark: bool,
    pub background: Color,
    pub elements: Vec<PositionedElement>,
    pub notes: Option<String>,
}

impl RenderedSlide {
    /// Iterate every text run on the slide, including shape labels.
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.elements
            .iter()
            .flat_map(|el| match &el.element {
                LayoutElement::Text(text) => Some(text),
                LayoutElement::Shape(shape) => shape.label.as_ref(),
            })
            .flat_map(|text| text.paragraphs.iter())
            .flat_map(|para| para.runs.iter())
    }

    /// Whether any run on the slide contains the given literal text.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.text_runs().any(|run| run.text.contains(needle))
    }
}
