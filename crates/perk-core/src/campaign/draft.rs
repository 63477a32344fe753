//! Campaign drafts

use crate::condition::ConditionSet;
use crate::error::{CoreError, Result};
use crate::reward::{MilestoneLadder, ReferralRewards, RewardList};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Campaign kind; decides which reward structure is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignKind {
    #[default]
    Standard,
    BoostSales,
    /// One-off coupon batch to the whole audience, checked against inventory
    CouponDrop,
    /// Progress accumulates toward milestone thresholds
    Accumulated,
    Referral,
}

impl CampaignKind {
    fn default_trigger(self) -> TriggerType {
        match self {
            CampaignKind::Referral => TriggerType::Refers,
            _ => TriggerType::Purchases,
        }
    }
}

/// Member action that triggers the campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerType {
    Purchases,
    Joins,
    Refers,
    CelebratesBirthday,
}

/// Which purchases count toward the campaign
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CampaignScope {
    #[default]
    Any,
    SpecificProducts { product_ids: Vec<String> },
    SpecificCollections { collection_ids: Vec<String> },
}

/// How a campaign multiplier combines with the member's tier multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackingPolicy {
    /// Campaign multiplier adds to the tier multiplier
    Stack,
    /// Campaign multiplier replaces the tier multiplier while active
    #[default]
    Override,
}

/// Reward structure; exactly one shape is active per draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "structure", rename_all = "snake_case")]
pub enum RewardStructure {
    Flat { rewards: RewardList },
    Milestones { milestones: MilestoneLadder },
    Referral(ReferralRewards),
}

impl RewardStructure {
    /// Empty structure of the shape a campaign kind uses
    pub fn for_kind(kind: CampaignKind) -> Self {
        match kind {
            CampaignKind::Standard | CampaignKind::BoostSales | CampaignKind::CouponDrop => {
                RewardStructure::Flat {
                    rewards: RewardList::new(),
                }
            }
            CampaignKind::Accumulated => RewardStructure::Milestones {
                milestones: MilestoneLadder::new(),
            },
            CampaignKind::Referral => RewardStructure::Referral(ReferralRewards::default()),
        }
    }

    pub fn shape_name(&self) -> &'static str {
        match self {
            RewardStructure::Flat { .. } => "flat",
            RewardStructure::Milestones { .. } => "milestones",
            RewardStructure::Referral(_) => "referral",
        }
    }

    /// Every reward list in the structure, in display order
    pub fn reward_lists(&self) -> Vec<&RewardList> {
        match self {
            RewardStructure::Flat { rewards } => vec![rewards],
            RewardStructure::Milestones { milestones } => {
                milestones.iter().map(|m| &m.rewards).collect()
            }
            RewardStructure::Referral(referral) => vec![&referral.inviter, &referral.friend],
        }
    }
}

/// In-progress campaign configuration
///
/// The reward structure always has the shape the kind uses; deserialization
/// rejects a mismatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CampaignDraftRecord")]
pub struct CampaignDraft {
    pub name: String,
    pub description: String,
    kind: CampaignKind,
    pub trigger: TriggerType,
    pub scope: CampaignScope,
    /// Eligible population
    pub audience: ConditionSet,
    rewards: RewardStructure,
    pub target_stores: Vec<String>,
    pub target_tiers: Vec<String>,
    stacking: StackingPolicy,
    /// Start of the campaign; `None` starts it on publish
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct CampaignDraftRecord {
    name: String,
    #[serde(default)]
    description: String,
    kind: CampaignKind,
    trigger: TriggerType,
    #[serde(default)]
    scope: CampaignScope,
    #[serde(default)]
    audience: ConditionSet,
    rewards: RewardStructure,
    #[serde(default)]
    target_stores: Vec<String>,
    #[serde(default)]
    target_tiers: Vec<String>,
    #[serde(default)]
    stacking: StackingPolicy,
    #[serde(default)]
    starts_at: Option<DateTime<Utc>>,
}

impl TryFrom<CampaignDraftRecord> for CampaignDraft {
    type Error = CoreError;

    fn try_from(record: CampaignDraftRecord) -> Result<Self> {
        let expected = RewardStructure::for_kind(record.kind).shape_name();
        let actual = record.rewards.shape_name();
        if expected != actual {
            return Err(CoreError::StructureMismatch { expected, actual });
        }
        Ok(Self {
            name: record.name,
            description: record.description,
            kind: record.kind,
            trigger: record.trigger,
            scope: record.scope,
            audience: record.audience,
            rewards: record.rewards,
            target_stores: record.target_stores,
            target_tiers: record.target_tiers,
            stacking: record.stacking,
            starts_at: record.starts_at,
        })
    }
}

impl CampaignDraft {
    /// Create an empty draft of the given kind
    pub fn new(kind: CampaignKind) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            kind,
            trigger: kind.default_trigger(),
            scope: CampaignScope::Any,
            audience: ConditionSet::default(),
            rewards: RewardStructure::for_kind(kind),
            target_stores: Vec::new(),
            target_tiers: Vec::new(),
            stacking: StackingPolicy::default(),
            starts_at: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_start(mut self, starts_at: DateTime<Utc>) -> Self {
        self.starts_at = Some(starts_at);
        self
    }

    pub fn kind(&self) -> CampaignKind {
        self.kind
    }

    /// Change the kind. The reward structure is replaced with an empty one
    /// only when the new kind uses a different shape.
    pub fn set_kind(&mut self, kind: CampaignKind) {
        let structure = RewardStructure::for_kind(kind);
        if structure.shape_name() != self.rewards.shape_name() {
            log::debug!(
                "Campaign kind changed to {:?}, resetting {} rewards",
                kind,
                self.rewards.shape_name()
            );
            self.rewards = structure;
        }
        self.kind = kind;
    }

    pub fn rewards(&self) -> &RewardStructure {
        &self.rewards
    }

    /// Flat reward list, for standard, boost-sales and coupon-drop campaigns
    pub fn flat_rewards(&self) -> Option<&RewardList> {
        match &self.rewards {
            RewardStructure::Flat { rewards } => Some(rewards),
            _ => None,
        }
    }

    pub fn flat_rewards_mut(&mut self) -> Result<&mut RewardList> {
        match &mut self.rewards {
            RewardStructure::Flat { rewards } => Ok(rewards),
            other => Err(CoreError::StructureMismatch {
                expected: "flat",
                actual: other.shape_name(),
            }),
        }
    }

    pub fn milestones(&self) -> Option<&MilestoneLadder> {
        match &self.rewards {
            RewardStructure::Milestones { milestones } => Some(milestones),
            _ => None,
        }
    }

    pub fn milestones_mut(&mut self) -> Result<&mut MilestoneLadder> {
        match &mut self.rewards {
            RewardStructure::Milestones { milestones } => Ok(milestones),
            other => Err(CoreError::StructureMismatch {
                expected: "milestones",
                actual: other.shape_name(),
            }),
        }
    }

    pub fn referral(&self) -> Option<&ReferralRewards> {
        match &self.rewards {
            RewardStructure::Referral(referral) => Some(referral),
            _ => None,
        }
    }

    pub fn referral_mut(&mut self) -> Result<&mut ReferralRewards> {
        match &mut self.rewards {
            RewardStructure::Referral(referral) => Ok(referral),
            other => Err(CoreError::StructureMismatch {
                expected: "referral",
                actual: other.shape_name(),
            }),
        }
    }

    /// The stacking choice is only offered while a flat multiplier reward exists
    pub fn stacking_visible(&self) -> bool {
        self.flat_rewards().is_some_and(RewardList::has_multiplier)
    }

    pub fn stacking(&self) -> StackingPolicy {
        self.stacking
    }

    pub fn set_stacking(&mut self, policy: StackingPolicy) {
        self.stacking = policy;
    }

    /// Whether the campaign multiplier composes additively with tier multipliers
    pub fn is_stackable(&self) -> bool {
        self.stacking == StackingPolicy::Stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reward::RewardType;

    #[test]
    fn test_deserialize_rejects_mismatched_structure() {
        let mut json = serde_json::to_value(CampaignDraft::new(CampaignKind::Referral)).unwrap();
        json["kind"] = serde_json::json!("coupon_drop");

        let err = serde_json::from_value::<CampaignDraft>(json).unwrap_err();
        assert!(err.to_string().contains("referral"));
    }

    #[test]
    fn test_deserialize_accepts_matching_structure() {
        let mut draft = CampaignDraft::new(CampaignKind::CouponDrop).with_name("Drop");
        draft.flat_rewards_mut().unwrap().add(RewardType::Coupon);
        let json = serde_json::to_string(&draft).unwrap();

        let parsed: CampaignDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, draft);
    }

    #[test]
    fn test_structure_follows_kind() {
        assert_eq!(CampaignDraft::new(CampaignKind::Standard).rewards().shape_name(), "flat");
        assert_eq!(CampaignDraft::new(CampaignKind::CouponDrop).rewards().shape_name(), "flat");
        assert_eq!(
            CampaignDraft::new(CampaignKind::Accumulated).rewards().shape_name(),
            "milestones"
        );
        let referral = CampaignDraft::new(CampaignKind::Referral);
        assert_eq!(referral.rewards().shape_name(), "referral");
        assert_eq!(referral.trigger, TriggerType::Refers);
    }

    #[test]
    fn test_wrong_structure_access_fails() {
        let mut draft = CampaignDraft::new(CampaignKind::Referral);
        let err = draft.flat_rewards_mut().unwrap_err();
        assert_eq!(
            err,
            CoreError::StructureMismatch {
                expected: "flat",
                actual: "referral"
            }
        );
        assert!(draft.milestones_mut().is_err());
        assert!(draft.referral_mut().is_ok());
    }

    #[test]
    fn test_set_kind_keeps_rewards_for_same_shape() {
        let mut draft = CampaignDraft::new(CampaignKind::Standard);
        draft.flat_rewards_mut().unwrap().add(RewardType::Points);

        draft.set_kind(CampaignKind::BoostSales);
        assert_eq!(draft.flat_rewards().unwrap().len(), 1);

        draft.set_kind(CampaignKind::Accumulated);
        assert!(draft.flat_rewards().is_none());
        assert!(draft.milestones().unwrap().is_empty());
    }

    #[test]
    fn test_stacking_visibility() {
        let mut draft = CampaignDraft::new(CampaignKind::BoostSales);
        assert!(!draft.stacking_visible());
        assert_eq!(draft.stacking(), StackingPolicy::Override);

        let id = draft.flat_rewards_mut().unwrap().add(RewardType::Multiplier);
        assert!(draft.stacking_visible());

        draft.set_stacking(StackingPolicy::Stack);
        assert!(draft.is_stackable());

        draft.flat_rewards_mut().unwrap().remove(&id);
        assert!(!draft.stacking_visible());
    }

    #[test]
    fn test_draft_serde_round_trip() {
        let mut draft = CampaignDraft::new(CampaignKind::Referral).with_name("Bring a friend");
        draft
            .referral_mut()
            .unwrap()
            .friend
            .add(RewardType::Coupon);

        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains(r#""structure":"referral""#));
        let back: CampaignDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back, draft);
    }
}
