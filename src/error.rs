use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Failed to read deck '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse deck: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    #[error("Missing required element: {selector}")]
    MissingElement { selector: String },

    #[error("Invalid width {width} on <{tag}> (expected 0-100)")]
    InvalidWidth { tag: String, width: f32 },

    #[error("Failed to load image '{path}': {message}")]
    ImageLoad { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, DeckError>;

impl DeckError {
    pub fn missing(selector: impl Into<String>) -> Self {
        DeckError::MissingElement { selector: selector.into() }
    }

    pub fn image(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        DeckError::ImageLoad { path: path.into(), message: message.to_string() }
    }
}
