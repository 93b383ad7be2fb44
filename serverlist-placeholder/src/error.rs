//! Error types for placeholder registration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaceholderError {
    /// The identifier was empty, contained a space, or is already taken.
    #[error("invalid placeholder provider: {0}")]
    InvalidProvider(String),
}

/// Result type for placeholder operations.
pub type PlaceholderResult<T> = Result<T, PlaceholderError>;
