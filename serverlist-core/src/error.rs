//! Error types for the pipeline crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("profile error: {0}")]
    Profile(#[from] serverlist_profile::ProfileError),

    #[error("placeholder error: {0}")]
    Placeholder(#[from] serverlist_placeholder::PlaceholderError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for pipeline operations.
pub type CoreResult<T> = Result<T, CoreError>;
