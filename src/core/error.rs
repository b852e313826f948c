//! Error types and error handling for chunkview.
//!
//! This module defines the error types used throughout the
//! application. Presentation-specific error rendering (exit codes,
//! colored output) is handled in the CLI adapter.

use thiserror::Error;

/// Result type alias for chunkview operations
pub type Result<T> = std::result::Result<T, ChunkviewError>;

/// Main error type for the chunkview engine
#[derive(Error, Debug)]
pub enum ChunkviewError {
    /// Rejected split parameters (overlap >= size, zero size).
    /// Raised at `SplitConfig` construction, before any splitting runs.
    #[error("Invalid split configuration: {0}")]
    InvalidConfig(String),

    /// Token sequence could not be decoded (unknown token id)
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// The cl100k_base vocabulary failed to initialize
    #[error("Tokenizer initialization failed: {0}")]
    TokenizerInit(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ChunkviewError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error was caused by invalid caller input
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            ChunkviewError::InvalidConfig(_) | ChunkviewError::ConfigError(_)
        )
    }
}
