//! Perk Builder - editing and validation logic over the Perk data model
//!
//! - [`ConditionBuilder`]: incremental, catalog-driven construction of
//!   audience conditions, modelled as a small state machine
//! - [`format_chip_value`]: display rendering of committed conditions
//! - [`validation`]: advisory and blocking checks on reward configuration
//! - [`simulation`]: projected reach, coupon demand and points liability

pub mod condition_builder;
pub mod error;
pub mod simulation;
pub mod validation;

pub use condition_builder::{format_chip_value, BuilderState, ConditionBuilder, DraftValue, ValueEntry};
pub use error::{BuilderError, Result};
pub use simulation::{simulate, CouponDemand, SimulationReport};
pub use validation::{
    batch_drop_validation, coupon_validation_warning, validate_draft, BatchDropValidation,
    Diagnostic, Severity, ValidationReport,
};
