//! Builder pattern for CampaignEditor

use perk_core::{AttributeCatalog, CampaignDraft, CouponCatalog};
use perk_repository::{
    CampaignStore, Catalogs, FixedReach, MemberPoolEstimator, ReachEstimator,
};
use std::sync::Arc;
use tracing::info;

use crate::config::{EditorConfig, ReachSource};
use crate::editor::CampaignEditor;
use crate::error::Result;

/// Builder for CampaignEditor
///
/// Anything not supplied explicitly is resolved from the [`EditorConfig`].
///
/// # Example
///
/// ```rust,ignore
/// use perk_sdk::{CampaignEditorBuilder, EditorConfig};
/// use perk_repository::FixedReach;
/// use std::sync::Arc;
///
/// // Everything from configuration
/// let editor = CampaignEditorBuilder::new()
///     .with_config(EditorConfig::load()?)
///     .build()
///     .await?;
///
/// // Explicit collaborators (for testing)
/// let editor = CampaignEditorBuilder::new()
///     .with_coupon_catalog(coupons)
///     .with_reach_estimator(Arc::new(FixedReach(1000)))
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct CampaignEditorBuilder {
    config: EditorConfig,
    attributes: Option<AttributeCatalog>,
    coupons: Option<CouponCatalog>,
    store: Option<Arc<dyn CampaignStore>>,
    estimator: Option<Arc<dyn ReachEstimator>>,
    draft: Option<CampaignDraft>,
}

impl CampaignEditorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration used for anything not supplied directly
    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this attribute catalog instead of the configured source
    pub fn with_attribute_catalog(mut self, catalog: AttributeCatalog) -> Self {
        self.attributes = Some(catalog);
        self
    }

    /// Use this coupon catalog instead of the configured source
    pub fn with_coupon_catalog(mut self, catalog: CouponCatalog) -> Self {
        self.coupons = Some(catalog);
        self
    }

    pub fn with_store(mut self, store: Arc<dyn CampaignStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_reach_estimator(mut self, estimator: Arc<dyn ReachEstimator>) -> Self {
        self.estimator = Some(estimator);
        self
    }

    /// Resume editing an existing draft
    pub fn with_draft(mut self, draft: CampaignDraft) -> Self {
        self.draft = Some(draft);
        self
    }

    /// Build the editor
    pub async fn build(self) -> Result<CampaignEditor> {
        let (attributes, coupons) = match (self.attributes, self.coupons) {
            (Some(attributes), Some(coupons)) => (attributes, coupons),
            (attributes, coupons) => {
                let loaded = Catalogs::load(&self.config.repository).await?;
                (
                    attributes.unwrap_or(loaded.attributes),
                    coupons.unwrap_or(loaded.coupons),
                )
            }
        };

        let store = match self.store {
            Some(store) => store,
            None => self.config.repository.open_store().await?,
        };

        let estimator = match (self.estimator, &self.config.reach) {
            (Some(estimator), _) => Some(estimator),
            (None, Some(ReachSource::Fixed { reach })) => {
                Some(Arc::new(FixedReach(*reach)) as Arc<dyn ReachEstimator>)
            }
            (None, Some(ReachSource::MemberPool { path })) => {
                let pool = MemberPoolEstimator::from_json_file(path).await?;
                Some(Arc::new(pool) as Arc<dyn ReachEstimator>)
            }
            (None, None) => None,
        };

        info!(
            "Campaign editor ready: {} attributes, {} coupons, reach estimator {}",
            attributes.len(),
            coupons.len(),
            if estimator.is_some() { "configured" } else { "absent" }
        );

        CampaignEditor::new(
            Arc::new(attributes),
            Arc::new(coupons),
            store,
            estimator,
            self.config.default_kind,
            self.draft,
        )
    }
}
