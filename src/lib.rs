//! decksmith: declarative JSON decks to themed PowerPoint files.
//!
//! The pipeline runs in three stages: parse the deck JSON into typed slide
//! records (`decksmith-model`), lay each slide out against the active theme
//! (`decksmith-layout`), and assemble the OOXML package
//! (`decksmith-render-pptx`). Any failure aborts the whole run; no output
//! file is written for an invalid deck.

use decksmith_layout::{RenderedSlide, render_slide};
use decksmith_model::{ModelError, parse_deck};
use decksmith_render_pptx::{PptxDocument, RenderError};
use decksmith_theme::ThemeError;
use std::path::Path;
use thiserror::Error;

pub use decksmith_model::Deck;
pub use decksmith_theme::Theme;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Deck error: {0}")]
    Model(#[from] ModelError),

    #[error("Theme error: {0}")]
    Theme(#[from] ThemeError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The deck generation pipeline, configured with one theme.
pub struct DeckPipeline {
    theme: Theme,
}

impl DeckPipeline {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Generate the `.pptx` bytes for a deck given as JSON text.
    ///
    /// Slides appear in the output in input order.
    pub fn generate(&self, deck_json: &str) -> Result<Vec<u8>, PipelineError> {
        let deck = parse_deck(deck_json)?;
        log::info!("Rendering deck '{}' ({} slides)", deck.title, deck.slides.len());

        let slides: Vec<RenderedSlide> = deck
            .slides
            .iter()
            .enumerate()
            .map(|(i, slide)| render_slide(slide, &self.theme, i + 1))
            .collect();

        let document =
            PptxDocument::new(&deck.title, deck.author.as_deref(), &self.theme, &slides);
        Ok(document.to_bytes()?)
    }

    /// Generate a deck and write it to `path`.
    ///
    /// The file is only written once the whole deck has rendered; a parse or
    /// render failure leaves no partial output behind.
    pub fn generate_to_file<P: AsRef<Path>>(
        &self,
        deck_json: &str,
        path: P,
    ) -> Result<(), PipelineError> {
        let bytes = self.generate(deck_json)?;
        std::fs::write(path.as_ref(), bytes)?;
        log::info!("Wrote {}", path.as_ref().display());
        Ok(())
    }
}
