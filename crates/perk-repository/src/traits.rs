//! Collaborator traits at the edge of the editor
//!
//! - [`CampaignStore`]: persists published drafts and assigns their identity
//! - [`ReachEstimator`]: projects how many members an audience covers
//!
//! Both are async so that implementations backed by files or remote
//! services fit behind the same interface as the in-memory ones.

use async_trait::async_trait;
use perk_core::{Campaign, CampaignDraft, ConditionSet};
use uuid::Uuid;

use crate::RepositoryResult;

/// Storage for published campaigns
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` for use across async tasks.
#[async_trait]
pub trait CampaignStore: Send + Sync {
    /// Persist a draft, assigning its id and creation timestamp
    async fn save(&self, draft: CampaignDraft) -> RepositoryResult<Campaign>;

    /// Load a campaign by id
    async fn get(&self, id: Uuid) -> RepositoryResult<Campaign>;

    /// All campaigns, oldest first
    async fn list(&self) -> RepositoryResult<Vec<Campaign>>;

    /// Delete a campaign, returning whether it existed
    async fn delete(&self, id: Uuid) -> RepositoryResult<bool>;
}

/// Source of the projected reach for an audience
#[async_trait]
pub trait ReachEstimator: Send + Sync {
    /// Number of members matched by the audience
    async fn estimate(&self, audience: &ConditionSet) -> RepositoryResult<u64>;
}
