//! Campaign simulation
//!
//! Projects what a validated draft would cost if every member of the
//! audience were rewarded once: coupons drawn per coupon and points issued.
//! Milestone ladders are projected as if every member reached every
//! milestone, which gives an upper bound.

use crate::validation::{validate_draft, ValidationReport};
use perk_core::{CampaignDraft, CouponCatalog, RewardStructure};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Projected coupon usage for one coupon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponDemand {
    pub coupon_id: String,
    pub demand: u64,
    /// Remaining inventory, `None` when the coupon does not resolve
    pub inventory: Option<u64>,
}

impl CouponDemand {
    /// Units that would be missing, zero when inventory covers demand
    pub fn shortfall(&self) -> u64 {
        match self.inventory {
            Some(inventory) => self.demand.saturating_sub(inventory),
            None => self.demand,
        }
    }
}

/// Result of simulating a draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub projected_reach: u64,
    pub coupon_demand: Vec<CouponDemand>,
    pub points_liability: f64,
    pub milestone_count: usize,
    pub validation: ValidationReport,
}

impl SimulationReport {
    pub fn can_publish(&self) -> bool {
        self.validation.can_publish()
    }
}

/// Simulate a draft for a projected reach
pub fn simulate(draft: &CampaignDraft, coupons: &CouponCatalog, projected_reach: u64) -> SimulationReport {
    let mut per_coupon: BTreeMap<String, u64> = BTreeMap::new();
    let mut points_per_member = 0.0;

    for list in draft.rewards().reward_lists() {
        points_per_member += list.total_points();
        for reward in list.iter() {
            if let Some(coupon_id) = reward.coupon_id() {
                let demand = projected_reach.saturating_mul(u64::from(reward.coupon_quantity()));
                let entry = per_coupon.entry(coupon_id.to_string()).or_default();
                *entry = entry.saturating_add(demand);
            }
        }
    }

    let coupon_demand = per_coupon
        .into_iter()
        .map(|(coupon_id, demand)| CouponDemand {
            inventory: coupons.get(&coupon_id).map(|c| c.inventory),
            coupon_id,
            demand,
        })
        .collect();

    let milestone_count = match draft.rewards() {
        RewardStructure::Milestones { milestones } => milestones.len(),
        _ => 0,
    };

    SimulationReport {
        projected_reach,
        coupon_demand,
        points_liability: points_per_member * projected_reach as f64,
        milestone_count,
        validation: validate_draft(draft, coupons, Some(projected_reach)),
    }
}
