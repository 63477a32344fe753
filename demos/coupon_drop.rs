//! Coupon drop example
//!
//! This example demonstrates:
//! - Loading the editor from configuration
//! - Blocking a publish on insufficient coupon inventory
//! - Fixing the draft and publishing

use perk_core::{CampaignKind, Coupon, CouponCatalog, RewardPatch, RewardType};
use perk_sdk::{CampaignEditorBuilder, EditorConfig, FixedReach, SdkError};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    perk_demos::init_tracing()?;
    println!("=== Coupon Drop Example ===\n");

    let coupons = CouponCatalog::new(vec![
        Coupon::new("free_coffee", "Free Coffee", "All", 1500),
        Coupon::new("free_pastry", "Free Pastry", "All", 2500),
    ])?;

    let mut editor = CampaignEditorBuilder::new()
        .with_config(EditorConfig::load()?)
        .with_coupon_catalog(coupons)
        .with_reach_estimator(Arc::new(FixedReach(1000)))
        .build()
        .await?;

    editor.set_kind(CampaignKind::CouponDrop);
    editor.draft_mut().name = "Morning drop".to_string();

    let rewards = editor.draft_mut().flat_rewards_mut()?;
    let reward_id = rewards.add(RewardType::Coupon);
    rewards.update(&reward_id, RewardPatch::coupon("free_coffee", 2))?;

    match editor.publish().await {
        Err(SdkError::PublishBlocked(report)) => {
            println!("Publish blocked:");
            for diagnostic in report.blocking() {
                println!("  [{}] {}", diagnostic.code, diagnostic.message);
            }
        }
        Err(e) => return Err(e.into()),
        Ok(campaign) => println!("Unexpectedly published {}", campaign.id),
    }

    println!("\nSwitching to the pastry coupon...");
    editor
        .draft_mut()
        .flat_rewards_mut()?
        .update(&reward_id, RewardPatch::coupon("free_pastry", 2))?;

    if let Some(check) = editor.batch_drop_check(&reward_id)? {
        println!("  Demand {} / inventory {}", check.demand, check.inventory);
    }

    let campaign = editor.publish().await?;
    println!("\nPublished campaign {} ('{}')", campaign.id, campaign.name());

    Ok(())
}
