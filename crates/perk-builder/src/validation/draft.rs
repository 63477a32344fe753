//! Whole-draft validation run before publish

use super::coupon_tier::coupon_validation_warning;
use super::diagnostic::{Diagnostic, ValidationReport};
use perk_core::{
    CampaignDraft, CampaignKind, CouponCatalog, ReferralSide, RewardItem, RewardList, RewardType,
};
use std::collections::BTreeMap;
use tracing::debug;

pub const INVENTORY_SHORTFALL: &str = "E001";
pub const UNRESOLVED_COUPON: &str = "E002";
pub const MISSING_NAME: &str = "E003";
pub const TIER_RESTRICTED_FRIEND_COUPON: &str = "W001";
pub const REACH_UNAVAILABLE: &str = "E004";

/// Validate a draft against the coupon catalog and a projected reach.
///
/// Tier mismatches on referral friend coupons are advisory. Inventory
/// shortfalls on coupon-drop campaigns, unresolved coupons and a missing
/// name block publishing. A coupon drop with coupon rewards also blocks
/// while no reach figure is available, since inventory cannot be checked.
pub fn validate_draft(
    draft: &CampaignDraft,
    coupons: &CouponCatalog,
    projected_reach: Option<u64>,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    if draft.name.trim().is_empty() {
        report.push(Diagnostic::blocking(MISSING_NAME, "Campaign name is required."));
    }

    for list in draft.rewards().reward_lists() {
        for reward in list.iter() {
            check_coupon_resolves(reward, coupons, &mut report);
        }
    }

    if let Some(referral) = draft.referral() {
        for reward in referral.friend.iter() {
            if let Some(warning) = coupon_validation_warning(ReferralSide::Friend, reward, coupons) {
                report.push(
                    Diagnostic::advisory(TIER_RESTRICTED_FRIEND_COUPON, warning).for_reward(&reward.id),
                );
            }
        }
    }

    if draft.kind() == CampaignKind::CouponDrop {
        if let Some(rewards) = draft.flat_rewards() {
            check_inventory(rewards, coupons, projected_reach, &mut report);
        }
    }

    debug!(
        diagnostics = report.diagnostics.len(),
        can_publish = report.can_publish(),
        "Draft validated"
    );
    report
}

/// Demand is summed per coupon across every reward of the drop, so two
/// rewards sharing a coupon are checked against its inventory together.
fn check_inventory(
    rewards: &RewardList,
    coupons: &CouponCatalog,
    projected_reach: Option<u64>,
    report: &mut ValidationReport,
) {
    if !rewards.iter().any(|r| r.reward_type() == RewardType::Coupon) {
        return;
    }
    let Some(reach) = projected_reach else {
        report.push(Diagnostic::blocking(
            REACH_UNAVAILABLE,
            "Projected reach is not available yet; coupon inventory cannot be checked.",
        ));
        return;
    };

    let mut per_coupon: BTreeMap<&str, (u64, Vec<&str>)> = BTreeMap::new();
    for reward in rewards.iter() {
        let Some(coupon_id) = reward.coupon_id() else {
            continue;
        };
        let demand = reach.saturating_mul(u64::from(reward.coupon_quantity()));
        let entry = per_coupon.entry(coupon_id).or_default();
        entry.0 = entry.0.saturating_add(demand);
        entry.1.push(reward.id.as_str());
    }

    for (coupon_id, (demand, reward_ids)) in per_coupon {
        // Unknown coupons are reported as unresolved
        let Some(coupon) = coupons.get(coupon_id) else {
            continue;
        };
        if demand <= coupon.inventory {
            continue;
        }
        let message = format!(
            "Insufficient inventory for '{}': {} coupons needed but only {} remaining.",
            coupon.name, demand, coupon.inventory
        );
        let diagnostic = Diagnostic::blocking(INVENTORY_SHORTFALL, message);
        report.push(match reward_ids.as_slice() {
            [only] => diagnostic.for_reward(*only),
            _ => diagnostic,
        });
    }
}

fn check_coupon_resolves(reward: &RewardItem, coupons: &CouponCatalog, report: &mut ValidationReport) {
    if reward.reward_type() != RewardType::Coupon {
        return;
    }
    let message = match reward.coupon_id() {
        None => "Select a coupon for this reward.".to_string(),
        Some(id) if coupons.get(id).is_none() => format!("Coupon '{}' does not exist.", id),
        Some(_) => return,
    };
    report.push(Diagnostic::blocking(UNRESOLVED_COUPON, message).for_reward(&reward.id));
}
