//! Type system for Perk
//!
//! Member profiles hold loosely typed attribute values; conditions are
//! evaluated against them.

pub mod value;

pub use value::Value;
