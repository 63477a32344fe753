//! Static catalogs the editor works against
//!
//! - [`AttributeCatalog`]: filterable attributes driving the condition builder
//! - [`CouponCatalog`]: coupons rewards can grant, read for tier and inventory

mod attribute;
mod builtin;
mod coupon;

pub use attribute::{AttributeCatalog, AttributeDefinition, InputKind};
pub use builtin::BuiltinCatalog;
pub use coupon::{Coupon, CouponCatalog, ALL_TIERS};
