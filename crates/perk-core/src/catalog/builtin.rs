//! Built-in attribute catalogs
//!
//! Two catalogs ship with the engine: commerce attributes for purchase
//! campaigns and member-behavior attributes for audience segmentation.
//! Callers pick one, or load their own.

use super::attribute::{AttributeCatalog, AttributeDefinition};
use crate::condition::Operator;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Selector for a built-in catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinCatalog {
    Commerce,
    MemberBehavior,
}

impl BuiltinCatalog {
    /// Build the catalog
    pub fn catalog(self) -> Result<AttributeCatalog> {
        match self {
            BuiltinCatalog::Commerce => commerce(),
            BuiltinCatalog::MemberBehavior => member_behavior(),
        }
    }
}

fn commerce() -> Result<AttributeCatalog> {
    AttributeCatalog::new(
        "commerce",
        vec![
            AttributeDefinition::range(
                "cart_total",
                "Cart total",
                vec![Operator::Between, Operator::GreaterThan, Operator::LessThan],
            )
            .with_unit_prefix("$"),
            AttributeDefinition::range(
                "item_count",
                "Items in cart",
                vec![Operator::GreaterThan, Operator::LessThan, Operator::Equals],
            ),
            AttributeDefinition::multi_select(
                "product_category",
                "Product category",
                ["Apparel", "Footwear", "Accessories", "Beauty", "Home"],
            ),
            AttributeDefinition::multi_select(
                "payment_method",
                "Payment method",
                ["Credit Card", "Debit Card", "PayPal", "Gift Card"],
            ),
            AttributeDefinition::text(
                "discount_code",
                "Discount code used",
                vec![Operator::Equals, Operator::StartsWith, Operator::Contains],
            ),
        ],
    )
}

fn member_behavior() -> Result<AttributeCatalog> {
    AttributeCatalog::new(
        "member_behavior",
        vec![
            AttributeDefinition::range(
                "lifetime_spend",
                "Lifetime spend",
                vec![Operator::GreaterThan, Operator::LessThan, Operator::Between],
            )
            .with_unit_prefix("$"),
            AttributeDefinition::range(
                "order_count",
                "Number of orders",
                vec![Operator::GreaterThan, Operator::LessThan, Operator::Equals],
            ),
            AttributeDefinition::range(
                "days_since_last_purchase",
                "Days since last purchase",
                vec![Operator::GreaterThan, Operator::LessThan, Operator::Between],
            ),
            AttributeDefinition::range(
                "points_balance",
                "Points balance",
                vec![Operator::GreaterThan, Operator::LessThan, Operator::Between],
            ),
            AttributeDefinition::multi_select(
                "member_tier",
                "Member tier",
                ["Bronze", "Silver", "Gold", "Platinum"],
            ),
            AttributeDefinition::multi_select(
                "acquisition_channel",
                "Acquisition channel",
                ["Online", "In Store", "Referral", "Social"],
            ),
            AttributeDefinition::text(
                "email",
                "Email",
                vec![Operator::Contains, Operator::EndsWith, Operator::Equals],
            ),
        ],
    )
}
