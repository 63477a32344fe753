//! Reward model
//!
//! What a customer receives, in one of three shapes depending on the
//! campaign kind: a flat [`RewardList`], a [`MilestoneLadder`], or a
//! [`ReferralRewards`] split.

mod item;
mod milestone;
mod referral;

pub use item::{
    RewardGrant, RewardItem, RewardList, RewardPatch, RewardType, DEFAULT_MULTIPLIER,
    DEFAULT_POINTS,
};
pub use milestone::{Milestone, MilestoneLadder, MilestonePatch, MILESTONE_STEP};
pub use referral::{ReferralRewards, ReferralSide};
