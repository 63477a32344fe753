//! Builder error types

use perk_core::{CoreError, Operator};
use thiserror::Error;

/// Builder error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuilderError {
    /// Operation not allowed in the current builder step
    #[error("Invalid transition: cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    /// Every catalog attribute already has a condition
    #[error("All attributes are already in use")]
    CatalogExhausted,

    /// The attribute already has a condition in this set
    #[error("Attribute already in use: {0}")]
    AttributeInUse(String),

    #[error("Operator '{operator}' is not supported by attribute '{attribute}'")]
    UnsupportedOperator { attribute: String, operator: Operator },

    /// A value setter does not match the attribute's input kind
    #[error("Attribute '{attribute}' is {kind}, cannot set a {requested} value")]
    ValueKindMismatch {
        attribute: String,
        kind: &'static str,
        requested: &'static str,
    },

    #[error("Unknown option '{option}' for attribute '{attribute}'")]
    UnknownOption { attribute: String, option: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for builder operations
pub type Result<T> = std::result::Result<T, BuilderError>;
