//! Referral reward split between inviter and friend

use super::item::RewardList;
use serde::{Deserialize, Serialize};

/// Audience side of a referral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferralSide {
    /// Existing member who sent the invite
    Inviter,
    /// Newly joined member
    Friend,
}

/// Two independent reward lists, one per referral side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferralRewards {
    #[serde(default)]
    pub inviter: RewardList,
    #[serde(default)]
    pub friend: RewardList,
}

impl ReferralRewards {
    pub fn side(&self, side: ReferralSide) -> &RewardList {
        match side {
            ReferralSide::Inviter => &self.inviter,
            ReferralSide::Friend => &self.friend,
        }
    }

    pub fn side_mut(&mut self, side: ReferralSide) -> &mut RewardList {
        match side {
            ReferralSide::Inviter => &mut self.inviter,
            ReferralSide::Friend => &mut self.friend,
        }
    }
}
