//! Attribute conditions
//!
//! A condition is a normalized `{attribute, operator, value}` triple built
//! against an attribute catalog. Conditions are grouped in a
//! [`ConditionSet`] that holds at most one condition per attribute and
//! combines them with AND (default) or OR logic.
//!
//! # Value encodings
//!
//! | input kind   | operator         | stored value       |
//! |--------------|------------------|--------------------|
//! | range        | `between`        | `"10:50"`          |
//! | range        | other            | `"25"`             |
//! | multi-select | `is_any_of`      | `"Gold, Platinum"` |
//! | text         | any text op      | raw substring      |

mod evaluator;
mod operator;
mod types;

pub use evaluator::MemberProfile;
pub use operator::Operator;
pub use types::{
    AttributeCondition, ConditionLogic, ConditionSet, OPTION_SEPARATOR, RANGE_SEPARATOR,
};
