//! Slide canvas dimensions, in inches (16:9).

pub const SLIDE_WIDTH: f32 = 13.333;
pub const SLIDE_HEIGHT: f32 = 7.5;

/// Left/right margin used by the standard title row and content bodies.
pub const MARGIN_X: f32 = 0.83;
pub const TITLE_Y: f32 = 0.59;
pub const CONTENT_WIDTH: f32 = SLIDE_WIDTH - 2.0 * MARGIN_X;
