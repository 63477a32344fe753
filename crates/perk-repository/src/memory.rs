//! In-memory campaign store

use async_trait::async_trait;
use perk_core::{Campaign, CampaignDraft};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::{CampaignStore, RepositoryError, RepositoryResult};

/// Campaign store backed by a map
///
/// Clones share the same underlying storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryCampaignStore {
    campaigns: Arc<RwLock<HashMap<Uuid, Campaign>>>,
}

impl MemoryCampaignStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored campaigns
    pub async fn len(&self) -> usize {
        self.campaigns.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.campaigns.read().await.is_empty()
    }

    pub async fn clear(&self) {
        self.campaigns.write().await.clear();
    }
}

#[async_trait]
impl CampaignStore for MemoryCampaignStore {
    async fn save(&self, draft: CampaignDraft) -> RepositoryResult<Campaign> {
        let campaign = Campaign::from_draft(draft);
        debug!("Storing campaign {} ('{}') in memory", campaign.id, campaign.name());
        self.campaigns
            .write()
            .await
            .insert(campaign.id, campaign.clone());
        Ok(campaign)
    }

    async fn get(&self, id: Uuid) -> RepositoryResult<Campaign> {
        self.campaigns
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::CampaignNotFound { id })
    }

    async fn list(&self) -> RepositoryResult<Vec<Campaign>> {
        let mut campaigns: Vec<Campaign> = self.campaigns.read().await.values().cloned().collect();
        campaigns.sort_by_key(|c| c.created_at);
        Ok(campaigns)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<bool> {
        Ok(self.campaigns.write().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perk_core::CampaignKind;

    #[tokio::test]
    async fn test_save_and_get() {
        let store = MemoryCampaignStore::new();
        let draft = CampaignDraft::new(CampaignKind::Standard).with_name("Weekend");

        let saved = store.save(draft.clone()).await.unwrap();
        assert_eq!(saved.draft, draft);

        let loaded = store.get(saved.id).await.unwrap();
        assert_eq!(loaded, saved);
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = MemoryCampaignStore::new();
        let id = Uuid::new_v4();
        let result = store.get(id).await;
        assert!(matches!(result, Err(RepositoryError::CampaignNotFound { id: missing }) if missing == id));
    }

    #[tokio::test]
    async fn test_list_and_delete() {
        let store = MemoryCampaignStore::new();
        let first = store
            .save(CampaignDraft::new(CampaignKind::Standard).with_name("First"))
            .await
            .unwrap();
        store
            .save(CampaignDraft::new(CampaignKind::Referral).with_name("Second"))
            .await
            .unwrap();

        assert_eq!(store.list().await.unwrap().len(), 2);

        assert!(store.delete(first.id).await.unwrap());
        assert!(!store.delete(first.id).await.unwrap());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let store = MemoryCampaignStore::new();
        let other = store.clone();
        store
            .save(CampaignDraft::new(CampaignKind::Standard))
            .await
            .unwrap();
        assert_eq!(other.len().await, 1);
    }
}
