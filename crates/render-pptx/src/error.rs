use thiserror::Error;

/// Errors raised while assembling the PPTX package.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
