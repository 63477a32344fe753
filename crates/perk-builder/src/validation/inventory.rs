//! Inventory sufficiency for coupon-drop campaigns

use perk_core::{CouponCatalog, RewardItem};
use serde::{Deserialize, Serialize};

/// Demand versus remaining inventory for one coupon reward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchDropValidation {
    pub coupon_id: String,
    /// `projected reach × coupons per recipient`
    pub demand: u64,
    pub inventory: u64,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Check that a coupon reward can be honoured for the whole projected reach.
///
/// Returns `None` when the reward is not a coupon or its coupon does not
/// resolve; those cases are reported separately.
pub fn batch_drop_validation(
    projected_reach: u64,
    reward: &RewardItem,
    coupons: &CouponCatalog,
) -> Option<BatchDropValidation> {
    let coupon = coupons.get(reward.coupon_id()?)?;
    let demand = projected_reach.saturating_mul(u64::from(reward.coupon_quantity()));
    let is_valid = demand <= coupon.inventory;

    let message = (!is_valid).then(|| {
        format!(
            "Insufficient inventory for '{}': {} coupons needed but only {} remaining.",
            coupon.name, demand, coupon.inventory
        )
    });

    Some(BatchDropValidation {
        coupon_id: coupon.id.clone(),
        demand,
        inventory: coupon.inventory,
        is_valid,
        message,
    })
}
