//! Error types for the repository layer

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur during repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No campaign with this id
    #[error("Campaign not found: {id}")]
    CampaignNotFound { id: Uuid },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON encoding or decoding error
    #[error("Failed to process JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Model invariant violated by loaded content
    #[error("Invalid content: {0}")]
    Core(#[from] perk_core::CoreError),

    /// Invalid path provided
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Generic error
    #[error("Repository error: {0}")]
    Other(String),
}
