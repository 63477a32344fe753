//! Persisted campaign records

use super::draft::CampaignDraft;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status at publish time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    /// Starts at a future `starts_at`
    Scheduled,
    Active,
}

/// A published campaign: a draft plus the identity assigned on save
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub status: CampaignStatus,
    pub draft: CampaignDraft,
}

impl Campaign {
    /// Assign a fresh identity and timestamp to a draft
    pub fn from_draft(draft: CampaignDraft) -> Self {
        let created_at = Utc::now();
        let status = match draft.starts_at {
            Some(start) if start > created_at => CampaignStatus::Scheduled,
            _ => CampaignStatus::Active,
        };
        Self {
            id: Uuid::new_v4(),
            created_at,
            status,
            draft,
        }
    }

    pub fn name(&self) -> &str {
        &self.draft.name
    }
}
