//! Error types for Shelf Core

use thiserror::Error;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Top-level error type for all Shelf operations
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("Catalog load error: {0}")]
    Load(#[from] LoadError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("No book with ISBN {0} in the catalog")]
    UnknownIsbn(String),
}

/// Errors that occur while loading the catalog document
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate ISBN in catalog: {0}")]
    DuplicateIsbn(String),
}

/// Errors that occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
