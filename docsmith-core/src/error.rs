use thiserror::Error;

/// Document-level errors raised by the model and the codec seam.
#[derive(Error, Debug)]
pub enum DocError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode document: {0}")]
    Decode(String),

    #[error("Failed to encode document: {0}")]
    Encode(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Page index {0} out of bounds (document has {1} pages)")]
    PageOutOfBounds(usize, usize),
}

pub type Result<T> = std::result::Result<T, DocError>;
