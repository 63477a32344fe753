//! Reward configuration validation
//!
//! Findings come in two severities with different effects:
//!
//! - **Advisory**: shown to the user, publish stays enabled
//!   (e.g. a tier-restricted coupon on the friend side of a referral)
//! - **Blocking**: publish is disabled until resolved
//!   (e.g. coupon-drop demand exceeding remaining inventory)
//!
//! Neither severity is raised as an error; callers read
//! [`ValidationReport::can_publish`].

mod coupon_tier;
mod diagnostic;
mod draft;
mod inventory;

pub use coupon_tier::coupon_validation_warning;
pub use diagnostic::{Diagnostic, Severity, ValidationReport};
pub use draft::{
    validate_draft, INVENTORY_SHORTFALL, MISSING_NAME, REACH_UNAVAILABLE,
    TIER_RESTRICTED_FRIEND_COUPON, UNRESOLVED_COUPON,
};
pub use inventory::{batch_drop_validation, BatchDropValidation};
