//! Campaign editing session

use perk_builder::{
    batch_drop_validation, coupon_validation_warning, simulate, validate_draft,
    BatchDropValidation, ConditionBuilder, SimulationReport, ValidationReport,
};
use perk_core::{
    AttributeCatalog, Campaign, CampaignDraft, CampaignKind, ConditionSet, CouponCatalog,
    ReferralSide,
};
use perk_repository::{CampaignStore, ReachEstimator};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{Result, SdkError};

/// One user's editing session over a single campaign draft
///
/// The draft's audience is edited through the [`ConditionBuilder`] and only
/// merged into the draft by [`snapshot`](Self::snapshot) and
/// [`publish`](Self::publish).
pub struct CampaignEditor {
    draft: CampaignDraft,
    conditions: ConditionBuilder,
    attributes: Arc<AttributeCatalog>,
    coupons: Arc<CouponCatalog>,
    store: Arc<dyn CampaignStore>,
    estimator: Option<Arc<dyn ReachEstimator>>,
    default_kind: CampaignKind,
    reach: Option<u64>,
}

impl CampaignEditor {
    pub(crate) fn new(
        attributes: Arc<AttributeCatalog>,
        coupons: Arc<CouponCatalog>,
        store: Arc<dyn CampaignStore>,
        estimator: Option<Arc<dyn ReachEstimator>>,
        default_kind: CampaignKind,
        draft: Option<CampaignDraft>,
    ) -> Result<Self> {
        let mut draft = draft.unwrap_or_else(|| CampaignDraft::new(default_kind));
        let audience = std::mem::take(&mut draft.audience);
        let conditions = ConditionBuilder::with_conditions(Arc::clone(&attributes), audience)?;

        Ok(Self {
            draft,
            conditions,
            attributes,
            coupons,
            store,
            estimator,
            default_kind,
            reach: None,
        })
    }

    /// The draft being edited, without its audience
    pub fn draft(&self) -> &CampaignDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut CampaignDraft {
        &mut self.draft
    }

    /// Change the campaign kind, keeping rewards when the shape is unchanged
    pub fn set_kind(&mut self, kind: CampaignKind) {
        debug!("Campaign kind set to {:?}", kind);
        self.draft.set_kind(kind);
    }

    pub fn conditions(&self) -> &ConditionBuilder {
        &self.conditions
    }

    /// Audience builder. Reach is not re-estimated until [`refresh_reach`](Self::refresh_reach).
    pub fn conditions_mut(&mut self) -> &mut ConditionBuilder {
        &mut self.conditions
    }

    pub fn audience(&self) -> &ConditionSet {
        self.conditions.conditions()
    }

    pub fn attributes(&self) -> &AttributeCatalog {
        &self.attributes
    }

    pub fn coupons(&self) -> &CouponCatalog {
        &self.coupons
    }

    /// Reach from the last [`refresh_reach`](Self::refresh_reach)
    pub fn projected_reach(&self) -> Option<u64> {
        self.reach
    }

    /// The complete draft, audience included
    pub fn snapshot(&self) -> CampaignDraft {
        let mut draft = self.draft.clone();
        draft.audience = self.conditions.conditions().clone();
        draft
    }

    /// Ask the estimator for the size of the current audience
    ///
    /// Returns `None` without an estimator; the reach then stays unavailable.
    pub async fn refresh_reach(&mut self) -> Result<Option<u64>> {
        let Some(estimator) = &self.estimator else {
            debug!("No reach estimator configured");
            return Ok(None);
        };
        let reach = estimator.estimate(self.conditions.conditions()).await?;
        debug!("Projected reach refreshed: {}", reach);
        self.reach = Some(reach);
        Ok(self.reach)
    }

    /// Tier warning for a reward on one side of a referral
    pub fn coupon_warning(&self, side: ReferralSide, reward_id: &str) -> Result<Option<String>> {
        let referral = self.draft.referral().ok_or_else(|| {
            SdkError::CoreError(perk_core::CoreError::StructureMismatch {
                expected: "referral",
                actual: self.draft.rewards().shape_name(),
            })
        })?;
        let reward = referral
            .side(side)
            .get(reward_id)
            .ok_or_else(|| SdkError::RewardNotFound(reward_id.to_string()))?;
        Ok(coupon_validation_warning(side, reward, &self.coupons))
    }

    /// Inventory check for one coupon reward of a coupon drop
    ///
    /// `Ok(None)` when the reward has no resolvable coupon.
    pub fn batch_drop_check(&self, reward_id: &str) -> Result<Option<BatchDropValidation>> {
        let reach = self.reach.ok_or(SdkError::ReachUnavailable)?;
        let reward = self
            .draft
            .rewards()
            .reward_lists()
            .into_iter()
            .find_map(|list| list.get(reward_id))
            .ok_or_else(|| SdkError::RewardNotFound(reward_id.to_string()))?;
        Ok(batch_drop_validation(reach, reward, &self.coupons))
    }

    /// Validate the draft against the coupon catalog and the last reach
    pub fn validate(&self) -> ValidationReport {
        validate_draft(&self.draft, &self.coupons, self.reach)
    }

    /// Simulate the draft at the last reach
    pub fn simulate(&self) -> Result<SimulationReport> {
        let reach = self.reach.ok_or(SdkError::ReachUnavailable)?;
        Ok(simulate(&self.draft, &self.coupons, reach))
    }

    /// Refresh reach, validate and hand the draft to the store
    ///
    /// On success the session starts over with a fresh draft.
    pub async fn publish(&mut self) -> Result<Campaign> {
        self.refresh_reach().await?;

        let report = self.validate();
        if !report.can_publish() {
            for diagnostic in report.blocking() {
                warn!("[{}] {}", diagnostic.code, diagnostic.message);
            }
            warn!("Publish of '{}' blocked", self.draft.name);
            return Err(SdkError::PublishBlocked(report));
        }

        let campaign = self.store.save(self.snapshot()).await?;
        info!(
            "Published campaign {} ('{}', {:?})",
            campaign.id,
            campaign.name(),
            campaign.draft.kind()
        );

        self.discard();
        Ok(campaign)
    }

    /// Throw away the draft, audience and reach
    pub fn discard(&mut self) {
        debug!("Discarding draft '{}'", self.draft.name);
        self.draft = CampaignDraft::new(self.default_kind);
        self.conditions.reset();
        self.reach = None;
    }
}
