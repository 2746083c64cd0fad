use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Theme file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Theme JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
