//! Deck content model.
//!
//! This crate defines the typed slide records a deck is made of, parses the
//! input JSON into them with per-slide error reporting, and handles the
//! inline accent markup used in text fields.

pub mod accent;
pub mod deck;
pub mod error;
pub mod parser;
pub mod slide;

pub use accent::{AccentRun, parse_accent_runs};
pub use deck::Deck;
pub use error::ModelError;
pub use parser::parse_deck;
pub use slide::{Card, ChecklistItem, Column, GridItem, LogoItem, Slide, Stat, Step};
