//! Perk Core - Core types and definitions for the Perk campaign rule engine
//!
//! This crate provides the data model shared across the Perk workspace:
//! - Value types for member profile data
//! - Attribute and coupon catalogs
//! - Attribute conditions and condition sets
//! - Rewards, milestone ladders and referral splits
//! - Campaign drafts and persisted campaign records
//! - Error types

pub mod campaign;
pub mod catalog;
pub mod condition;
pub mod error;
pub mod id;
pub mod reward;
pub mod types;

// Re-export commonly used types
pub use campaign::{
    Campaign, CampaignDraft, CampaignKind, CampaignScope, CampaignStatus, RewardStructure,
    StackingPolicy, TriggerType,
};
pub use catalog::{
    AttributeCatalog, AttributeDefinition, BuiltinCatalog, Coupon, CouponCatalog, InputKind,
};
pub use condition::{AttributeCondition, ConditionLogic, ConditionSet, MemberProfile, Operator};
pub use error::CoreError;
pub use reward::{
    Milestone, MilestoneLadder, MilestonePatch, ReferralRewards, ReferralSide, RewardGrant,
    RewardItem, RewardList, RewardPatch, RewardType,
};
pub use types::Value;
