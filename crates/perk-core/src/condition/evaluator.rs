//! Matching condition sets against member profiles
//!
//! Used by reach estimation to count which members a campaign audience
//! covers. Evaluation only depends on the stored operator and value, so a
//! condition set can be evaluated without the catalog it was built from.

use super::operator::Operator;
use super::types::{AttributeCondition, ConditionLogic, ConditionSet};
use crate::types::Value;
use std::collections::HashMap;

/// Attribute values of one member, keyed by attribute id
pub type MemberProfile = HashMap<String, Value>;

impl ConditionSet {
    /// Check whether a member falls inside this audience.
    ///
    /// An empty set matches every member.
    pub fn matches(&self, profile: &MemberProfile) -> bool {
        if self.is_empty() {
            return true;
        }
        match self.logic() {
            ConditionLogic::And => self.iter().all(|c| c.matches(profile)),
            ConditionLogic::Or => self.iter().any(|c| c.matches(profile)),
        }
    }
}

impl AttributeCondition {
    /// Evaluate this condition against a member. Missing attributes never match.
    pub fn matches(&self, profile: &MemberProfile) -> bool {
        let Some(actual) = profile.get(&self.attribute) else {
            return false;
        };

        match self.operator {
            Operator::Between => {
                let Some((min, max)) = self.range_bounds() else {
                    return false;
                };
                match (actual.as_f64(), parse_number(min), parse_number(max)) {
                    (Some(v), Some(min), Some(max)) => v >= min && v <= max,
                    _ => false,
                }
            }
            Operator::GreaterThan => compare_numbers(actual, &self.value, |a, b| a > b),
            Operator::LessThan => compare_numbers(actual, &self.value, |a, b| a < b),
            Operator::Equals => match (actual.as_f64(), parse_number(&self.value)) {
                (Some(a), Some(b)) => a == b,
                _ => actual
                    .as_str()
                    .is_some_and(|s| s.to_lowercase() == self.value.to_lowercase()),
            },
            Operator::Contains => compare_text(actual, &self.value, |a, b| a.contains(b)),
            Operator::StartsWith => compare_text(actual, &self.value, |a, b| a.starts_with(b)),
            Operator::EndsWith => compare_text(actual, &self.value, |a, b| a.ends_with(b)),
            Operator::IsAnyOf => {
                let chosen = self.options();
                actual
                    .string_members()
                    .iter()
                    .any(|member| chosen.iter().any(|opt| opt.eq_ignore_ascii_case(member)))
            }
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}

fn compare_numbers(actual: &Value, expected: &str, cmp: impl Fn(f64, f64) -> bool) -> bool {
    match (actual.as_f64(), parse_number(expected)) {
        (Some(a), Some(b)) => cmp(a, b),
        _ => false,
    }
}

fn compare_text(actual: &Value, expected: &str, cmp: impl Fn(&str, &str) -> bool) -> bool {
    actual
        .as_str()
        .is_some_and(|s| cmp(&s.to_lowercase(), &expected.to_lowercase()))
}
