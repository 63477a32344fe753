//! Reach estimators

use async_trait::async_trait;
use perk_core::{ConditionSet, MemberProfile};
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{ReachEstimator, RepositoryError, RepositoryResult};

/// Estimator that reports the same reach for every audience
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedReach(pub u64);

#[async_trait]
impl ReachEstimator for FixedReach {
    async fn estimate(&self, _audience: &ConditionSet) -> RepositoryResult<u64> {
        Ok(self.0)
    }
}

/// Estimator counting the members of a known pool that match the audience
#[derive(Debug, Clone, Default)]
pub struct MemberPoolEstimator {
    members: Arc<RwLock<Vec<MemberProfile>>>,
}

impl MemberPoolEstimator {
    pub fn new(members: Vec<MemberProfile>) -> Self {
        Self {
            members: Arc::new(RwLock::new(members)),
        }
    }

    /// Load the pool from a JSON array of member profiles
    pub async fn from_json_file(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RepositoryError::InvalidPath {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path).await?;
        let members: Vec<MemberProfile> = serde_json::from_str(&content)?;
        debug!("Loaded {} member profiles from {}", members.len(), path.display());
        Ok(Self::new(members))
    }

    /// Add a member to the pool
    pub async fn insert(&self, member: MemberProfile) {
        self.members.write().await.push(member);
    }

    pub async fn len(&self) -> usize {
        self.members.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.members.read().await.is_empty()
    }
}

#[async_trait]
impl ReachEstimator for MemberPoolEstimator {
    async fn estimate(&self, audience: &ConditionSet) -> RepositoryResult<u64> {
        let members = self.members.read().await;
        let reach = members.iter().filter(|m| audience.matches(m)).count();
        debug!(
            "Audience with {} conditions reaches {} of {} members",
            audience.len(),
            reach,
            members.len()
        );
        Ok(reach as u64)
    }
}
