//! Campaign drafts and persisted campaigns
//!
//! A [`CampaignDraft`] is edited in memory; it becomes a [`Campaign`] only
//! when a campaign store saves it.

mod draft;
mod record;

pub use draft::{
    CampaignDraft, CampaignKind, CampaignScope, RewardStructure, StackingPolicy, TriggerType,
};
pub use record::{Campaign, CampaignStatus};
