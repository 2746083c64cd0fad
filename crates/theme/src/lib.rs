//! Theme tokens for deck rendering.
//!
//! A theme is a read-only set of named style tokens: per-mode colors
//! (light and dark), element accents, typography and an optional footer.
//! It is loaded once from JSON and consumed by the layout routines.

pub mod error;
pub mod tokens;

pub use error::ThemeError;
pub use tokens::{Elements, Footer, ModeColors, Modes, Theme, Typography};
