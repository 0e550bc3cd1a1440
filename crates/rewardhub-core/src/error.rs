//! Centralized error types for RewardHub.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for RewardHub operations.
#[derive(Error, Debug)]
pub enum RewardHubError {
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for RewardHub operations.
pub type RewardHubResult<T> = Result<T, RewardHubError>;

impl RewardHubError {
    /// Create an unknown page error.
    pub fn unknown_page(name: impl Into<String>) -> Self {
        Self::UnknownPage(name.into())
    }
}
