//! Milestone ladders for accumulated-progress campaigns

use super::item::{RewardList, RewardPatch, RewardType};
use crate::error::{CoreError, Result};
use crate::id::generate_id;
use serde::{Deserialize, Serialize};

/// Offset between a new milestone and the last one in the ladder
pub const MILESTONE_STEP: f64 = 500.0;

/// A threshold and the rewards it unlocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub threshold: f64,
    #[serde(default)]
    pub rewards: RewardList,
}

/// Partial update of a milestone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MilestonePatch {
    #[serde(default)]
    pub threshold: Option<f64>,
}

/// Ordered list of milestones.
///
/// Thresholds default to strictly increasing values, but manual overrides
/// are accepted as-is: an out-of-order ladder is representable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MilestoneLadder {
    milestones: Vec<Milestone>,
}

impl MilestoneLadder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a milestone at `last threshold + 500` (500 on an empty ladder)
    pub fn add_milestone(&mut self) -> String {
        let last = self.milestones.last().map_or(0.0, |m| m.threshold);
        let milestone = Milestone {
            id: generate_id("ms"),
            threshold: last + MILESTONE_STEP,
            rewards: RewardList::new(),
        };
        let id = milestone.id.clone();
        self.milestones.push(milestone);
        id
    }

    pub fn update_milestone(&mut self, id: &str, patch: MilestonePatch) -> Result<()> {
        let milestone = self.get_mut(id)?;
        if let Some(threshold) = patch.threshold {
            milestone.threshold = threshold;
        }
        Ok(())
    }

    pub fn remove_milestone(&mut self, id: &str) -> bool {
        let before = self.milestones.len();
        self.milestones.retain(|m| m.id != id);
        self.milestones.len() != before
    }

    /// Add a reward to one milestone
    pub fn add_reward(&mut self, milestone_id: &str, reward_type: RewardType) -> Result<String> {
        Ok(self.get_mut(milestone_id)?.rewards.add(reward_type))
    }

    pub fn update_reward(
        &mut self,
        milestone_id: &str,
        reward_id: &str,
        patch: RewardPatch,
    ) -> Result<()> {
        self.get_mut(milestone_id)?.rewards.update(reward_id, patch)
    }

    pub fn remove_reward(&mut self, milestone_id: &str, reward_id: &str) -> Result<bool> {
        Ok(self.get_mut(milestone_id)?.rewards.remove(reward_id))
    }

    pub fn get(&self, id: &str) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Milestone> {
        self.milestones
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| CoreError::MilestoneNotFound(id.to_string()))
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn iter(&self) -> impl Iterator<Item = &Milestone> {
        self.milestones.iter()
    }

    pub fn len(&self) -> usize {
        self.milestones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }

    /// Whether thresholds strictly increase along the ladder
    pub fn is_monotonic(&self) -> bool {
        self.milestones
            .windows(2)
            .all(|pair| pair[0].threshold < pair[1].threshold)
    }
}
