//! Error types for schema generation.

use thiserror::Error;

/// Error type for schema generation operations.
///
/// The type builder itself is total; errors only arise while reading input.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Content-model parsing error.
    #[error("content model parse error: {0}")]
    Parse(#[from] sdlgen_model::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
