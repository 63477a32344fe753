//! File system based campaign store

use async_trait::async_trait;
use path_absolutize::Absolutize;
use perk_core::{Campaign, CampaignDraft};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{CampaignStore, RepositoryError, RepositoryResult};

/// Campaign store writing one pretty-printed JSON file per campaign
///
/// Files are named `<uuid>.json` under the root directory. Writes are
/// serialized through a lock so concurrent saves never interleave.
pub struct FileSystemCampaignStore {
    root_path: PathBuf,
    write_lock: RwLock<()>,
}

impl FileSystemCampaignStore {
    /// Open a store rooted at `root_path`, creating the directory if needed
    ///
    /// # Example
    /// ```no_run
    /// # async fn run() -> perk_repository::RepositoryResult<()> {
    /// use perk_repository::FileSystemCampaignStore;
    ///
    /// let store = FileSystemCampaignStore::open("campaigns").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn open<P: AsRef<Path>>(root_path: P) -> RepositoryResult<Self> {
        let path = root_path.as_ref();

        let abs_path = path
            .absolutize()
            .map_err(|e| RepositoryError::Other(format!("Failed to absolutize path: {}", e)))?
            .to_path_buf();

        if abs_path.exists() && !abs_path.is_dir() {
            return Err(RepositoryError::InvalidPath { path: abs_path });
        }
        fs::create_dir_all(&abs_path).await?;

        info!("Campaign store opened at {}", abs_path.display());

        Ok(Self {
            root_path: abs_path,
            write_lock: RwLock::new(()),
        })
    }

    /// Directory holding the campaign files
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    fn campaign_path(&self, id: Uuid) -> PathBuf {
        self.root_path.join(format!("{}.json", id))
    }

    async fn read_campaign(path: &Path) -> RepositoryResult<Campaign> {
        let content = fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait]
impl CampaignStore for FileSystemCampaignStore {
    async fn save(&self, draft: CampaignDraft) -> RepositoryResult<Campaign> {
        let campaign = Campaign::from_draft(draft);
        let content = serde_json::to_string_pretty(&campaign)?;
        let path = self.campaign_path(campaign.id);

        let _guard = self.write_lock.write().await;
        fs::write(&path, content).await?;
        debug!("Wrote campaign {} to {}", campaign.id, path.display());

        Ok(campaign)
    }

    async fn get(&self, id: Uuid) -> RepositoryResult<Campaign> {
        let path = self.campaign_path(id);
        let _guard = self.write_lock.read().await;
        if !path.exists() {
            return Err(RepositoryError::CampaignNotFound { id });
        }
        Self::read_campaign(&path).await
    }

    async fn list(&self) -> RepositoryResult<Vec<Campaign>> {
        let _guard = self.write_lock.read().await;
        let mut campaigns = Vec::new();
        let mut entries = fs::read_dir(&self.root_path).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match Self::read_campaign(&path).await {
                Ok(campaign) => campaigns.push(campaign),
                Err(e) => warn!("Skipping unreadable campaign file {}: {}", path.display(), e),
            }
        }

        campaigns.sort_by_key(|c| c.created_at);
        Ok(campaigns)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<bool> {
        let path = self.campaign_path(id);
        let _guard = self.write_lock.write().await;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perk_core::{CampaignKind, RewardPatch, RewardType};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_creates_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("campaigns");
        let store = FileSystemCampaignStore::open(&root).await.unwrap();
        assert!(store.root_path().is_dir());
    }

    #[tokio::test]
    async fn test_open_rejects_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("campaigns");
        std::fs::write(&file, "not a directory").unwrap();

        let result = FileSystemCampaignStore::open(&file).await;
        assert!(matches!(result, Err(RepositoryError::InvalidPath { .. })));
    }

    #[tokio::test]
    async fn test_save_round_trips_through_disk() {
        let dir = TempDir::new().unwrap();
        let store = FileSystemCampaignStore::open(dir.path()).await.unwrap();

        let mut draft = CampaignDraft::new(CampaignKind::CouponDrop).with_name("Drop");
        let list = draft.flat_rewards_mut().unwrap();
        let id = list.add(RewardType::Coupon);
        list.update(&id, RewardPatch::coupon("c1", 2)).unwrap();

        let saved = store.save(draft).await.unwrap();
        assert!(dir.path().join(format!("{}.json", saved.id)).exists());

        let loaded = store.get(saved.id).await.unwrap();
        assert_eq!(loaded, saved);
    }

    #[tokio::test]
    async fn test_list_skips_foreign_files() {
        let dir = TempDir::new().unwrap();
        let store = FileSystemCampaignStore::open(dir.path()).await.unwrap();
        store
            .save(CampaignDraft::new(CampaignKind::Standard).with_name("A"))
            .await
            .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();
        std::fs::write(dir.path().join("broken.json"), "{").unwrap();

        let campaigns = store.list().await.unwrap();
        assert_eq!(campaigns.len(), 1);
        assert_eq!(campaigns[0].name(), "A");
    }

    #[tokio::test]
    async fn test_get_and_delete_missing() {
        let dir = TempDir::new().unwrap();
        let store = FileSystemCampaignStore::open(dir.path()).await.unwrap();
        let id = Uuid::new_v4();

        assert!(matches!(
            store.get(id).await,
            Err(RepositoryError::CampaignNotFound { .. })
        ));
        assert!(!store.delete(id).await.unwrap());
    }
}
