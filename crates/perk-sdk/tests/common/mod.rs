//! Common fixtures for SDK integration tests

#![allow(dead_code)]

use perk_core::{Coupon, CouponCatalog};
use perk_sdk::{CampaignEditor, CampaignEditorBuilder, FixedReach, MemoryCampaignStore};
use std::sync::Arc;

/// Coupons used across the scenarios
pub fn coupons() -> CouponCatalog {
    CouponCatalog::new(vec![
        Coupon::new("free_coffee", "Free Coffee", "All", 1500),
        Coupon::new("gold_lounge", "Gold Lounge Pass", "Gold", 300),
        Coupon::new("welcome_gift", "Welcome Gift", "All", 2500),
    ])
    .expect("fixture coupons are valid")
}

/// Editor over the commerce catalog, a shared memory store and a fixed reach
pub struct TestEditor {
    pub store: MemoryCampaignStore,
    reach: Option<u64>,
}

impl TestEditor {
    pub fn new() -> Self {
        Self {
            store: MemoryCampaignStore::new(),
            reach: Some(1000),
        }
    }

    pub fn with_reach(mut self, reach: u64) -> Self {
        self.reach = Some(reach);
        self
    }

    pub fn without_reach(mut self) -> Self {
        self.reach = None;
        self
    }

    pub async fn build(&self) -> CampaignEditor {
        let mut builder = CampaignEditorBuilder::new()
            .with_coupon_catalog(coupons())
            .with_store(Arc::new(self.store.clone()));
        if let Some(reach) = self.reach {
            builder = builder.with_reach_estimator(Arc::new(FixedReach(reach)));
        }
        builder.build().await.expect("editor builds")
    }
}
