//! Error types for the host lifecycle.

use thiserror::Error;

/// Error type for host operations.
#[derive(Debug, Error)]
pub enum HostError {
    /// Content types could not be retrieved.
    #[error("content source error: {message}")]
    Source {
        /// Error message.
        message: String,
    },

    /// Invalid plugin configuration.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Content-model parsing error.
    #[error("content model parse error: {0}")]
    Parse(#[from] sdlgen_model::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HostError {
    /// Creates a source error with the given message.
    pub fn source(message: impl Into<String>) -> Self {
        Self::Source {
            message: message.into(),
        }
    }
}
