//! Referral campaign example
//!
//! This example demonstrates:
//! - Building an audience with the condition builder
//! - Configuring inviter and friend rewards
//! - Reading the advisory tier warning before publishing

use perk_core::{
    BuiltinCatalog, CampaignKind, Coupon, CouponCatalog, MemberProfile, Operator, ReferralSide,
    RewardPatch, RewardType, Value,
};
use perk_sdk::{
    CampaignEditorBuilder, EditorConfig, MemberPoolEstimator, MemoryCampaignStore,
    RepositoryConfig,
};
use std::sync::Arc;

fn member(spend: f64, tier: &str, orders: f64) -> MemberProfile {
    let mut profile = MemberProfile::new();
    profile.insert("lifetime_spend".to_string(), Value::from(spend));
    profile.insert("member_tier".to_string(), Value::from(tier));
    profile.insert("order_count".to_string(), Value::from(orders));
    profile
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    perk_demos::init_tracing()?;
    println!("=== Referral Campaign Example ===\n");

    let coupons = CouponCatalog::new(vec![
        Coupon::new("welcome_coffee", "Welcome Coffee", "All", 5000),
        Coupon::new("gold_lounge", "Gold Lounge Pass", "Gold", 200),
    ])?;

    let pool = MemberPoolEstimator::new(vec![
        member(120.0, "Bronze", 2.0),
        member(860.0, "Gold", 14.0),
        member(1540.0, "Platinum", 31.0),
        member(410.0, "Silver", 6.0),
    ]);

    let store = MemoryCampaignStore::new();
    let mut editor = CampaignEditorBuilder::new()
        .with_config(EditorConfig {
            repository: RepositoryConfig::memory()
                .with_builtin_catalog(BuiltinCatalog::MemberBehavior),
            ..Default::default()
        })
        .with_coupon_catalog(coupons)
        .with_store(Arc::new(store.clone()))
        .with_reach_estimator(Arc::new(pool))
        .build()
        .await?;

    editor.set_kind(CampaignKind::Referral);
    editor.draft_mut().name = "Bring a friend".to_string();

    // Audience: loyal members in the upper tiers
    let conditions = editor.conditions_mut();
    conditions.open()?;
    conditions.select_attribute("member_tier")?;
    conditions.toggle_option("Gold")?;
    conditions.toggle_option("Platinum")?;
    let tier_condition = conditions.commit();

    conditions.open()?;
    conditions.select_attribute("order_count")?;
    conditions.set_operator(Operator::GreaterThan)?;
    conditions.set_single_value("10")?;
    let orders_condition = conditions.commit();

    println!("Audience:");
    for id in [tier_condition, orders_condition].into_iter().flatten() {
        if let Some(chip) = editor.conditions().chip(&id) {
            println!("  {}", chip);
        }
    }

    // Rewards for both sides of the referral
    let referral = editor.draft_mut().referral_mut()?;
    let inviter = referral.side_mut(ReferralSide::Inviter);
    let points_id = inviter.add(RewardType::Points);
    inviter.update(&points_id, RewardPatch::value(250.0))?;

    let friend = referral.side_mut(ReferralSide::Friend);
    let lounge_id = friend.add(RewardType::Coupon);
    friend.update(&lounge_id, RewardPatch::coupon("gold_lounge", 1))?;

    if let Some(warning) = editor.coupon_warning(ReferralSide::Friend, &lounge_id)? {
        println!("\nWarning: {}", warning);
    }

    let reach = editor.refresh_reach().await?.unwrap_or_default();
    let simulation = editor.simulate()?;
    println!("\nSimulation:");
    println!("  Projected reach: {}", reach);
    println!("  Points liability: {}", simulation.points_liability);
    for demand in &simulation.coupon_demand {
        println!("  Coupon {}: {} needed", demand.coupon_id, demand.demand);
    }

    let campaign = editor.publish().await?;
    println!("\nPublished campaign {} at {}", campaign.id, campaign.created_at);
    println!("{}", serde_json::to_string_pretty(&campaign)?);

    Ok(())
}
