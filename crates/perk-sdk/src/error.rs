//! SDK error types

use perk_builder::ValidationReport;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Model error
    #[error("Model error: {0}")]
    CoreError(#[from] perk_core::CoreError),

    /// Condition builder error
    #[error("Builder error: {0}")]
    BuilderError(#[from] perk_builder::BuilderError),

    /// Store, catalog or estimator error
    #[error("Repository error: {0}")]
    RepositoryError(#[from] perk_repository::RepositoryError),

    /// Publishing refused because of blocking diagnostics
    #[error("Publish blocked by {} diagnostic(s)", .0.blocking().count())]
    PublishBlocked(ValidationReport),

    /// An operation needs a projected reach that has not been estimated
    #[error("Projected reach is unavailable; refresh it first")]
    ReachUnavailable,

    /// The draft has no reward with this id
    #[error("Reward not found: {0}")]
    RewardNotFound(String),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
