//! PPTX document assembly.
//!
//! Takes laid-out slides from `decksmith-layout` and serializes the full
//! Open Packaging Conventions archive: presentation root, a blank master
//! and layout, a theme part seeded from the active palette, one slide part
//! per deck slide, notes slides for speaker notes, and document properties.

mod error;
mod package;
mod parts;
mod shapes;
mod writer;
mod xml;

pub use error::RenderError;
pub use writer::PptxDocument;
