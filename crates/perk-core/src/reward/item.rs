//! Reward items and flat reward lists

use crate::error::{CoreError, Result};
use crate::id::generate_id;
use serde::{Deserialize, Serialize};

/// Points granted by a freshly added points reward
pub const DEFAULT_POINTS: f64 = 100.0;

/// Factor of a freshly added multiplier reward
pub const DEFAULT_MULTIPLIER: f64 = 2.0;

/// Kind of grant, used when adding a reward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardType {
    Coupon,
    Points,
    Multiplier,
}

/// What the member receives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RewardGrant {
    /// `quantity` coupons per recipient; the coupon must resolve at publish
    Coupon {
        #[serde(default)]
        coupon_id: Option<String>,
        quantity: u32,
    },
    /// Flat points
    Points { amount: f64 },
    /// Earn-rate multiplier, expected to be >= 1
    Multiplier { factor: f64 },
}

impl RewardGrant {
    /// Default grant for a newly added reward of the given type
    pub fn default_for(reward_type: RewardType) -> Self {
        match reward_type {
            RewardType::Coupon => RewardGrant::Coupon {
                coupon_id: None,
                quantity: 1,
            },
            RewardType::Points => RewardGrant::Points {
                amount: DEFAULT_POINTS,
            },
            RewardType::Multiplier => RewardGrant::Multiplier {
                factor: DEFAULT_MULTIPLIER,
            },
        }
    }

    pub fn reward_type(&self) -> RewardType {
        match self {
            RewardGrant::Coupon { .. } => RewardType::Coupon,
            RewardGrant::Points { .. } => RewardType::Points,
            RewardGrant::Multiplier { .. } => RewardType::Multiplier,
        }
    }
}

/// Partial update of a reward. Fields that do not apply to the reward's
/// type are ignored: `value` for coupons, `quantity` and `coupon_id` for
/// points and multipliers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardPatch {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub coupon_id: Option<String>,
}

impl RewardPatch {
    pub fn value(value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    pub fn coupon(coupon_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            coupon_id: Some(coupon_id.into()),
            quantity: Some(quantity),
            ..Self::default()
        }
    }
}

/// A single grant attached to a campaign, milestone or referral side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardItem {
    pub id: String,
    #[serde(flatten)]
    pub grant: RewardGrant,
}

impl RewardItem {
    /// Create a reward with a generated id and the type's default grant
    pub fn new(reward_type: RewardType) -> Self {
        Self {
            id: generate_id("rwd"),
            grant: RewardGrant::default_for(reward_type),
        }
    }

    pub fn reward_type(&self) -> RewardType {
        self.grant.reward_type()
    }

    /// Coupon id of a coupon reward
    pub fn coupon_id(&self) -> Option<&str> {
        match &self.grant {
            RewardGrant::Coupon { coupon_id, .. } => coupon_id.as_deref(),
            _ => None,
        }
    }

    /// Coupons granted per recipient, zero for other types
    pub fn coupon_quantity(&self) -> u32 {
        match &self.grant {
            RewardGrant::Coupon { quantity, .. } => *quantity,
            _ => 0,
        }
    }

    /// Points granted, zero for other types
    pub fn points(&self) -> f64 {
        match &self.grant {
            RewardGrant::Points { amount } => *amount,
            _ => 0.0,
        }
    }

    /// Apply a patch to the fields relevant for this reward's type
    pub fn apply(&mut self, patch: RewardPatch) {
        match &mut self.grant {
            RewardGrant::Coupon {
                coupon_id,
                quantity,
            } => {
                if let Some(id) = patch.coupon_id {
                    *coupon_id = Some(id);
                }
                if let Some(q) = patch.quantity {
                    *quantity = q;
                }
            }
            RewardGrant::Points { amount } => {
                if let Some(v) = patch.value {
                    *amount = v;
                }
            }
            RewardGrant::Multiplier { factor } => {
                if let Some(v) = patch.value {
                    *factor = v;
                }
            }
        }
    }
}

/// Ordered list of rewards, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RewardList {
    items: Vec<RewardItem>,
}

impl RewardList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reward of the given type, returning its id
    pub fn add(&mut self, reward_type: RewardType) -> String {
        let item = RewardItem::new(reward_type);
        let id = item.id.clone();
        self.items.push(item);
        id
    }

    /// Patch a reward by id
    pub fn update(&mut self, id: &str, patch: RewardPatch) -> Result<()> {
        let item = self
            .items
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| CoreError::RewardNotFound(id.to_string()))?;
        item.apply(patch);
        Ok(())
    }

    /// Remove a reward by id, returning whether it existed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id != id);
        self.items.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&RewardItem> {
        self.items.iter().find(|r| r.id == id)
    }

    pub fn items(&self) -> &[RewardItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &RewardItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if any reward is a multiplier
    pub fn has_multiplier(&self) -> bool {
        self.items
            .iter()
            .any(|r| r.reward_type() == RewardType::Multiplier)
    }

    /// Total points granted per recipient
    pub fn total_points(&self) -> f64 {
        self.items.iter().map(RewardItem::points).sum()
    }
}

impl FromIterator<RewardItem> for RewardList {
    fn from_iter<I: IntoIterator<Item = RewardItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_uses_type_defaults() {
        let mut list = RewardList::new();
        let coupon = list.add(RewardType::Coupon);
        let points = list.add(RewardType::Points);

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(&coupon).unwrap().coupon_quantity(), 1);
        assert_eq!(list.get(&coupon).unwrap().coupon_id(), None);
        assert_eq!(list.get(&points).unwrap().points(), DEFAULT_POINTS);
        assert_eq!(list.items()[0].id, coupon);
    }

    #[test]
    fn test_update_ignores_irrelevant_fields() {
        let mut list = RewardList::new();
        let coupon = list.add(RewardType::Coupon);
        let multiplier = list.add(RewardType::Multiplier);

        list.update(
            &coupon,
            RewardPatch {
                value: Some(99.0),
                quantity: Some(3),
                coupon_id: Some("welcome10".to_string()),
            },
        )
        .unwrap();
        list.update(&multiplier, RewardPatch::coupon("ignored", 7)).unwrap();
        list.update(&multiplier, RewardPatch::value(3.0)).unwrap();

        let c = list.get(&coupon).unwrap();
        assert_eq!(c.coupon_id(), Some("welcome10"));
        assert_eq!(c.coupon_quantity(), 3);
        assert_eq!(
            list.get(&multiplier).unwrap().grant,
            RewardGrant::Multiplier { factor: 3.0 }
        );
    }

    #[test]
    fn test_update_and_remove_unknown_id() {
        let mut list = RewardList::new();
        assert_eq!(
            list.update("missing", RewardPatch::value(1.0)),
            Err(CoreError::RewardNotFound("missing".to_string()))
        );
        assert!(!list.remove("missing"));
    }

    #[test]
    fn test_has_multiplier_and_total_points() {
        let mut list = RewardList::new();
        assert!(!list.has_multiplier());
        let p = list.add(RewardType::Points);
        list.update(&p, RewardPatch::value(250.0)).unwrap();
        list.add(RewardType::Points);
        assert_eq!(list.total_points(), 350.0);

        let m = list.add(RewardType::Multiplier);
        assert!(list.has_multiplier());
        list.remove(&m);
        assert!(!list.has_multiplier());
    }

    #[test]
    fn test_reward_item_serde_shape() {
        let item = RewardItem {
            id: "r1".to_string(),
            grant: RewardGrant::Coupon {
                coupon_id: Some("c1".to_string()),
                quantity: 2,
            },
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "coupon");
        assert_eq!(json["coupon_id"], "c1");
        assert_eq!(json["quantity"], 2);
    }
}
