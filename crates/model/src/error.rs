use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Deck JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Schema error in slide {index}: {message}")]
    Schema { index: usize, message: String },

    #[error("Unknown slide type '{tag}' in slide {index}")]
    UnknownSlideType { index: usize, tag: String },
}
