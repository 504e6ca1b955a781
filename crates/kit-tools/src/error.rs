//! Error types for kit-tools

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] kit_fs::Error),

    #[error("Invalid tool id '{id}': expected <category>.<name>")]
    InvalidToolId { id: String },

    #[error("Unknown tool category: {name}")]
    UnknownCategory { name: String },

    #[error("Tool already registered: {id}")]
    DuplicateTool { id: String },

    #[error("Not a file or directory: {path}")]
    NotInspectable { path: PathBuf },

    #[error("Image operation failed for {path}: {message}")]
    Image { path: PathBuf, message: String },

    #[error("Unsupported image format: {extension}")]
    UnsupportedImageFormat { extension: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}
