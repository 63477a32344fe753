//! Operators available to attribute conditions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Condition operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    // Numeric operators
    /// Inclusive range, stored as `"<min>:<max>"`
    Between,
    /// Greater than (>)
    GreaterThan,
    /// Less than (<)
    LessThan,
    /// Equal; numeric when both sides parse as numbers
    Equals,

    // Text operators
    /// Substring match
    Contains,
    /// Starts with
    StartsWith,
    /// Ends with
    EndsWith,

    // Membership operators
    /// Member value matches any chosen option (OR across values)
    IsAnyOf,
}

impl Operator {
    /// Returns true if the operator is valid for range attributes
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Operator::Between | Operator::GreaterThan | Operator::LessThan | Operator::Equals
        )
    }

    /// Returns true if the operator is valid for text attributes
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            Operator::Equals | Operator::Contains | Operator::StartsWith | Operator::EndsWith
        )
    }

    /// Canonical key, as stored in catalogs and conditions
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Between => "between",
            Operator::GreaterThan => "greater_than",
            Operator::LessThan => "less_than",
            Operator::Equals => "equals",
            Operator::Contains => "contains",
            Operator::StartsWith => "starts_with",
            Operator::EndsWith => "ends_with",
            Operator::IsAnyOf => "is_any_of",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "between" => Ok(Operator::Between),
            "greater_than" => Ok(Operator::GreaterThan),
            "less_than" => Ok(Operator::LessThan),
            "equals" => Ok(Operator::Equals),
            "contains" => Ok(Operator::Contains),
            "starts_with" => Ok(Operator::StartsWith),
            "ends_with" => Ok(Operator::EndsWith),
            "is_any_of" => Ok(Operator::IsAnyOf),
            other => Err(format!("unknown operator '{}'", other)),
        }
    }
}
