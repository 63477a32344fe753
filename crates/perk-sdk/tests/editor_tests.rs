//! End-to-end editing sessions: build, validate, simulate and publish

mod common;

use common::TestEditor;
use perk_core::{CampaignKind, ConditionLogic, Operator, ReferralSide, RewardPatch, RewardType};
use perk_sdk::{CampaignStore, SdkError, Severity};

#[tokio::test]
async fn test_coupon_drop_inventory_blocks_publish() -> anyhow::Result<()> {
    let fixture = TestEditor::new().with_reach(1000);
    let mut editor = fixture.build().await;

    editor.set_kind(CampaignKind::CouponDrop);
    editor.draft_mut().name = "Coffee drop".to_string();
    let rewards = editor.draft_mut().flat_rewards_mut()?;
    let reward_id = rewards.add(RewardType::Coupon);
    rewards.update(&reward_id, RewardPatch::coupon("free_coffee", 2))?;

    editor.refresh_reach().await?;
    let check = editor.batch_drop_check(&reward_id)?.expect("coupon resolves");
    assert_eq!(check.demand, 2000);
    assert_eq!(check.inventory, 1500);
    assert!(!check.is_valid);

    let result = editor.publish().await;
    let Err(SdkError::PublishBlocked(report)) = result else {
        panic!("expected publish to be blocked");
    };
    assert_eq!(report.with_code("E001").count(), 1);
    assert!(fixture.store.is_empty().await);

    // The session survives a blocked publish; switch to the bigger batch
    editor
        .draft_mut()
        .flat_rewards_mut()?
        .update(&reward_id, RewardPatch::coupon("welcome_gift", 2))?;
    let campaign = editor.publish().await?;
    assert_eq!(campaign.name(), "Coffee drop");
    assert_eq!(fixture.store.len().await, 1);
    Ok(())
}

#[tokio::test]
async fn test_referral_tier_warning_is_advisory() -> anyhow::Result<()> {
    let fixture = TestEditor::new();
    let mut editor = fixture.build().await;

    editor.set_kind(CampaignKind::Referral);
    editor.draft_mut().name = "Bring a friend".to_string();
    let referral = editor.draft_mut().referral_mut()?;
    let friend = referral.side_mut(ReferralSide::Friend);
    let gold_id = friend.add(RewardType::Coupon);
    friend.update(&gold_id, RewardPatch::coupon("gold_lounge", 1))?;
    let inviter = referral.side_mut(ReferralSide::Inviter);
    let inviter_id = inviter.add(RewardType::Coupon);
    inviter.update(&inviter_id, RewardPatch::coupon("gold_lounge", 1))?;

    assert_eq!(
        editor.coupon_warning(ReferralSide::Friend, &gold_id)?.as_deref(),
        Some("Coupon is restricted to Gold users, but Friend is a New User.")
    );
    assert_eq!(editor.coupon_warning(ReferralSide::Inviter, &inviter_id)?, None);

    let report = editor.validate();
    assert!(report.can_publish());
    let advisories: Vec<_> = report.advisories().collect();
    assert_eq!(advisories.len(), 1);
    assert_eq!(advisories[0].severity, Severity::Advisory);
    assert_eq!(advisories[0].reward_id.as_deref(), Some(gold_id.as_str()));

    let campaign = editor.publish().await?;
    assert_eq!(campaign.draft.kind(), CampaignKind::Referral);
    Ok(())
}

#[tokio::test]
async fn test_friend_coupon_for_all_tiers_is_silent() -> anyhow::Result<()> {
    let mut editor = TestEditor::new().build().await;
    editor.set_kind(CampaignKind::Referral);
    let friend = editor.draft_mut().referral_mut()?.side_mut(ReferralSide::Friend);
    let id = friend.add(RewardType::Coupon);
    friend.update(&id, RewardPatch::coupon("free_coffee", 1))?;

    assert_eq!(editor.coupon_warning(ReferralSide::Friend, &id)?, None);
    Ok(())
}

#[tokio::test]
async fn test_audience_is_published_with_the_draft() -> anyhow::Result<()> {
    let fixture = TestEditor::new();
    let mut editor = fixture.build().await;
    editor.draft_mut().name = "Big carts".to_string();

    let conditions = editor.conditions_mut();
    conditions.open()?;
    conditions.select_attribute("cart_total")?;
    conditions.set_min("10")?;
    conditions.set_max("50")?;
    let condition_id = conditions.commit().expect("valid range commits");
    conditions.set_logic(ConditionLogic::Or);

    assert_eq!(editor.conditions().chip(&condition_id).as_deref(), Some("$10 - $50"));
    // The draft itself does not carry the audience until publish
    assert!(editor.draft().audience.is_empty());
    assert_eq!(editor.snapshot().audience.len(), 1);

    let campaign = editor.publish().await?;
    let stored = fixture.store.get(campaign.id).await?;
    let condition = stored.draft.audience.get(&condition_id).expect("condition stored");
    assert_eq!(condition.operator, Operator::Between);
    assert_eq!(condition.value, "10:50");
    assert_eq!(stored.draft.audience.logic(), ConditionLogic::Or);

    // Publishing starts a fresh session
    assert!(editor.audience().is_empty());
    assert!(editor.draft().name.is_empty());
    assert_eq!(editor.projected_reach(), None);
    Ok(())
}

#[tokio::test]
async fn test_missing_name_blocks_publish() -> anyhow::Result<()> {
    let fixture = TestEditor::new();
    let mut editor = fixture.build().await;

    let result = editor.publish().await;
    let Err(SdkError::PublishBlocked(report)) = result else {
        panic!("expected publish to be blocked");
    };
    assert_eq!(report.with_code("E003").count(), 1);
    assert!(fixture.store.is_empty().await);
    Ok(())
}

#[tokio::test]
async fn test_without_estimator_coupon_drop_cannot_publish() -> anyhow::Result<()> {
    let fixture = TestEditor::new().without_reach();
    let mut editor = fixture.build().await;
    editor.set_kind(CampaignKind::CouponDrop);
    editor.draft_mut().name = "Drop".to_string();
    let rewards = editor.draft_mut().flat_rewards_mut()?;
    let id = rewards.add(RewardType::Coupon);
    rewards.update(&id, RewardPatch::coupon("free_coffee", 1_000_000))?;

    assert_eq!(editor.refresh_reach().await?, None);
    assert!(matches!(editor.simulate(), Err(SdkError::ReachUnavailable)));
    assert!(matches!(editor.batch_drop_check(&id), Err(SdkError::ReachUnavailable)));

    let report = editor.validate();
    assert!(!report.can_publish());
    assert_eq!(report.with_code("E004").count(), 1);

    let result = editor.publish().await;
    assert!(matches!(result, Err(SdkError::PublishBlocked(_))));
    assert!(fixture.store.is_empty().await);
    Ok(())
}

#[tokio::test]
async fn test_rewards_sharing_a_coupon_block_together() -> anyhow::Result<()> {
    let fixture = TestEditor::new().with_reach(1000);
    let mut editor = fixture.build().await;
    editor.set_kind(CampaignKind::CouponDrop);
    editor.draft_mut().name = "Double coffee".to_string();
    let rewards = editor.draft_mut().flat_rewards_mut()?;
    for _ in 0..2 {
        let id = rewards.add(RewardType::Coupon);
        rewards.update(&id, RewardPatch::coupon("free_coffee", 1))?;
    }

    editor.refresh_reach().await?;
    let simulation = editor.simulate()?;
    assert_eq!(simulation.coupon_demand[0].shortfall(), 500);
    assert!(!simulation.can_publish());

    let result = editor.publish().await;
    let Err(SdkError::PublishBlocked(report)) = result else {
        panic!("expected publish to be blocked");
    };
    assert_eq!(report.with_code("E001").count(), 1);
    assert!(fixture.store.is_empty().await);
    Ok(())
}

#[tokio::test]
async fn test_simulate_milestones_and_points() -> anyhow::Result<()> {
    let mut editor = TestEditor::new().with_reach(200).build().await;
    editor.set_kind(CampaignKind::Accumulated);
    editor.draft_mut().name = "Spend ladder".to_string();

    let ladder = editor.draft_mut().milestones_mut()?;
    let first = ladder.add_milestone();
    let second = ladder.add_milestone();
    ladder.add_reward(&first, RewardType::Points)?;
    ladder.add_reward(&second, RewardType::Points)?;

    let thresholds: Vec<f64> = editor
        .draft()
        .milestones()
        .expect("milestone structure")
        .iter()
        .map(|m| m.threshold)
        .collect();
    assert_eq!(thresholds, vec![500.0, 1000.0]);

    editor.refresh_reach().await?;
    let report = editor.simulate()?;
    assert_eq!(report.projected_reach, 200);
    assert_eq!(report.milestone_count, 2);
    assert_eq!(report.points_liability, 2.0 * 100.0 * 200.0);
    assert!(report.can_publish());
    Ok(())
}

#[tokio::test]
async fn test_kind_change_keeps_compatible_rewards() -> anyhow::Result<()> {
    let mut editor = TestEditor::new().build().await;
    editor.set_kind(CampaignKind::Standard);
    editor
        .draft_mut()
        .flat_rewards_mut()?
        .add(RewardType::Multiplier);
    assert!(editor.draft().stacking_visible());

    editor.set_kind(CampaignKind::BoostSales);
    assert_eq!(editor.draft().flat_rewards().map(|r| r.len()), Some(1));

    editor.set_kind(CampaignKind::Referral);
    assert!(editor.draft().flat_rewards().is_none());
    assert!(matches!(
        editor.coupon_warning(ReferralSide::Friend, "missing"),
        Err(SdkError::RewardNotFound(_))
    ));
    Ok(())
}

#[tokio::test]
async fn test_discard_resets_session() -> anyhow::Result<()> {
    let mut editor = TestEditor::new().build().await;
    editor.draft_mut().name = "Scratch".to_string();
    let conditions = editor.conditions_mut();
    conditions.open()?;
    conditions.select_attribute("payment_method")?;
    editor.refresh_reach().await?;
    assert_eq!(editor.projected_reach(), Some(1000));

    editor.discard();
    assert!(editor.draft().name.is_empty());
    assert!(editor.conditions().state().is_closed());
    assert_eq!(editor.projected_reach(), None);
    Ok(())
}

#[tokio::test]
async fn test_future_start_publishes_scheduled() -> anyhow::Result<()> {
    let mut editor = TestEditor::new().build().await;
    editor.draft_mut().name = "Holiday".to_string();
    editor.draft_mut().starts_at = Some(chrono::Utc::now() + chrono::Duration::days(30));

    let campaign = editor.publish().await?;
    assert_eq!(campaign.status, perk_core::CampaignStatus::Scheduled);
    Ok(())
}
