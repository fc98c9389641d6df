//! Error handling module for the clipper infrastructure

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Infrastructure error type (configuration, I/O, HTTP client setup)
#[derive(Error, Debug)]
pub enum ClipperError {
    /// Configuration file could not be read
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for this tool
    #[error("Failed to parse config file {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Logging could not be initialised
    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },

    /// Domain rule violation
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result type alias for clipper operations
pub type ClipperResult<T> = std::result::Result<T, ClipperError>;
