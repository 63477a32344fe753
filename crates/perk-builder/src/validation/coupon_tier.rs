//! Tier compatibility of referral friend coupons

use perk_core::{CouponCatalog, ReferralSide, RewardItem};

/// Advisory warning for a tier-restricted coupon given to the friend side
/// of a referral. The friend is a brand-new member, so a coupon limited to
/// any specific tier is likely unusable for them.
///
/// Returns `None` for the inviter side, for non-coupon rewards, for
/// unresolved coupons and for coupons open to all tiers.
pub fn coupon_validation_warning(
    side: ReferralSide,
    reward: &RewardItem,
    coupons: &CouponCatalog,
) -> Option<String> {
    if side != ReferralSide::Friend {
        return None;
    }
    let coupon = coupons.get(reward.coupon_id()?)?;
    coupon.is_tier_restricted().then(|| {
        format!(
            "Coupon is restricted to {} users, but Friend is a New User.",
            coupon.tier
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use perk_core::{Coupon, RewardList, RewardPatch, RewardType};

    fn coupons() -> CouponCatalog {
        CouponCatalog::new(vec![
            Coupon::new("gold10", "Gold 10% off", "Gold", 100),
            Coupon::new("welcome", "Welcome gift", "All", 100),
        ])
        .unwrap()
    }

    fn coupon_reward(coupon_id: &str) -> RewardItem {
        let mut list = RewardList::new();
        let id = list.add(RewardType::Coupon);
        list.update(&id, RewardPatch::coupon(coupon_id, 1)).unwrap();
        list.get(&id).unwrap().clone()
    }

    #[test]
    fn test_restricted_coupon_on_friend_side_warns() {
        let warning =
            coupon_validation_warning(ReferralSide::Friend, &coupon_reward("gold10"), &coupons())
                .unwrap();
        assert_eq!(
            warning,
            "Coupon is restricted to Gold users, but Friend is a New User."
        );
    }

    #[test]
    fn test_unrestricted_or_inviter_side_is_silent() {
        let catalog = coupons();
        assert!(coupon_validation_warning(ReferralSide::Friend, &coupon_reward("welcome"), &catalog)
            .is_none());
        assert!(coupon_validation_warning(ReferralSide::Inviter, &coupon_reward("gold10"), &catalog)
            .is_none());
        assert!(coupon_validation_warning(ReferralSide::Friend, &coupon_reward("missing"), &catalog)
            .is_none());
    }
}
