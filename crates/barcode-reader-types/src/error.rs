//! Error types for barcode-reader

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to read configuration {path}: {reason}")]
    ReadError { path: String, reason: String },

    #[error("Failed to parse configuration {path}: {reason}")]
    ParseError { path: String, reason: String },
}

/// Symbology name that matches no known barcode standard
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown symbology: {0}")]
pub struct ParseSymbologyError(pub String);

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Cannot read {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Cannot identify image file {path}: {reason}")]
    UnsupportedImage { path: String, reason: String },

    #[error("Barcode decode failed: {0}")]
    Decode(String),

    #[error("Payload is not valid UTF-8: {0}")]
    InvalidPayload(#[from] std::string::FromUtf8Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
