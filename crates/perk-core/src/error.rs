//! Error types for Perk Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid attribute '{id}': {reason}")]
    InvalidAttribute { id: String, reason: String },

    #[error("Duplicate attribute: {0}")]
    DuplicateAttribute(String),

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Invalid coupon '{id}': {reason}")]
    InvalidCoupon { id: String, reason: String },

    #[error("Duplicate coupon: {0}")]
    DuplicateCoupon(String),

    #[error("Reward not found: {0}")]
    RewardNotFound(String),

    #[error("Milestone not found: {0}")]
    MilestoneNotFound(String),

    #[error("Reward structure mismatch: campaign uses {actual}, expected {expected}")]
    StructureMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
