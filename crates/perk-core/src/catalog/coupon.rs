//! Coupon catalog consumed by reward validation

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tier value meaning the coupon is not restricted to any member tier
pub const ALL_TIERS: &str = "All";

/// A coupon that rewards can reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: String,
    pub name: String,
    /// Member tier the coupon is restricted to, or "All"
    #[serde(default = "default_tier")]
    pub tier: String,
    /// Remaining redeemable units
    pub inventory: u64,
}

fn default_tier() -> String {
    ALL_TIERS.to_string()
}

impl Coupon {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        tier: impl Into<String>,
        inventory: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tier: tier.into(),
            inventory,
        }
    }

    /// Returns true when only members of a specific tier may redeem it
    pub fn is_tier_restricted(&self) -> bool {
        self.tier != ALL_TIERS
    }
}

/// Read-only list of coupons
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "CouponCatalogRecord")]
pub struct CouponCatalog {
    coupons: Vec<Coupon>,
}

#[derive(Deserialize)]
struct CouponCatalogRecord {
    #[serde(default)]
    coupons: Vec<Coupon>,
}

impl TryFrom<CouponCatalogRecord> for CouponCatalog {
    type Error = CoreError;

    fn try_from(record: CouponCatalogRecord) -> Result<Self> {
        CouponCatalog::new(record.coupons)
    }
}

impl CouponCatalog {
    /// Create a catalog, rejecting empty or duplicate ids
    pub fn new(coupons: Vec<Coupon>) -> Result<Self> {
        let mut seen = HashSet::new();
        for coupon in &coupons {
            if coupon.id.trim().is_empty() {
                return Err(CoreError::InvalidCoupon {
                    id: coupon.id.clone(),
                    reason: "id must not be empty".to_string(),
                });
            }
            if !seen.insert(coupon.id.as_str()) {
                return Err(CoreError::DuplicateCoupon(coupon.id.clone()));
            }
        }
        Ok(Self { coupons })
    }

    pub fn get(&self, id: &str) -> Option<&Coupon> {
        self.coupons.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coupon> {
        self.coupons.iter()
    }

    pub fn len(&self) -> usize {
        self.coupons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coupons.is_empty()
    }
}
