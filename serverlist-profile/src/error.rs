//! Error types for profile configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid profile configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("duplicate profile name: {0}")]
    DuplicateProfile(String),
}

/// Result type for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;
