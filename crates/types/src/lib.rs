pub mod color;
pub mod geometry;

pub use color::Color;
pub use geometry::{EMU_PER_INCH, Rect, Size, emu};
