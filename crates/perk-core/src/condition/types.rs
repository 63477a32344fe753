//! Condition types produced by the condition builder

use super::operator::Operator;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Separator between the bounds of a `between` value (`"10:50"`)
pub const RANGE_SEPARATOR: char = ':';

/// Separator between chosen options of a multi-select value (`"Gold, Silver"`)
pub const OPTION_SEPARATOR: &str = ", ";

/// A single attribute constraint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeCondition {
    /// Generated at creation, stable until removed
    pub id: String,
    /// Attribute id in the catalog the condition was built against
    pub attribute: String,
    pub operator: Operator,
    /// Canonical string encoding of the chosen value
    pub value: String,
}

impl AttributeCondition {
    pub fn new(
        id: impl Into<String>,
        attribute: impl Into<String>,
        operator: Operator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            attribute: attribute.into(),
            operator,
            value: value.into(),
        }
    }

    /// Split a `between` value into its raw bounds
    pub fn range_bounds(&self) -> Option<(&str, &str)> {
        if self.operator != Operator::Between {
            return None;
        }
        self.value.split_once(RANGE_SEPARATOR)
    }

    /// Chosen options of a multi-select value
    pub fn options(&self) -> Vec<&str> {
        if self.value.is_empty() {
            return Vec::new();
        }
        self.value.split(OPTION_SEPARATOR).collect()
    }
}

/// How the conditions of a set combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionLogic {
    /// Every condition must hold
    #[default]
    And,
    /// At least one condition must hold
    Or,
}

/// Ordered set of conditions, at most one per attribute
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "ConditionSetRecord")]
pub struct ConditionSet {
    logic: ConditionLogic,
    conditions: Vec<AttributeCondition>,
}

#[derive(Deserialize)]
struct ConditionSetRecord {
    #[serde(default)]
    logic: ConditionLogic,
    #[serde(default)]
    conditions: Vec<AttributeCondition>,
}

impl TryFrom<ConditionSetRecord> for ConditionSet {
    type Error = CoreError;

    fn try_from(record: ConditionSetRecord) -> Result<Self> {
        let mut set = ConditionSet::new(record.logic);
        for condition in record.conditions {
            set.push(condition)?;
        }
        Ok(set)
    }
}

impl ConditionSet {
    /// Create an empty set with the given logic
    pub fn new(logic: ConditionLogic) -> Self {
        Self {
            logic,
            conditions: Vec::new(),
        }
    }

    pub fn logic(&self) -> ConditionLogic {
        self.logic
    }

    pub fn set_logic(&mut self, logic: ConditionLogic) {
        self.logic = logic;
    }

    pub fn conditions(&self) -> &[AttributeCondition] {
        &self.conditions
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeCondition> {
        self.conditions.iter()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Check whether a condition already targets the attribute
    pub fn contains_attribute(&self, attribute: &str) -> bool {
        self.conditions.iter().any(|c| c.attribute == attribute)
    }

    /// Get a condition by id
    pub fn get(&self, id: &str) -> Option<&AttributeCondition> {
        self.conditions.iter().find(|c| c.id == id)
    }

    /// Append a condition, refusing a second condition on the same attribute
    pub fn push(&mut self, condition: AttributeCondition) -> Result<()> {
        if self.contains_attribute(&condition.attribute) {
            return Err(CoreError::DuplicateAttribute(condition.attribute));
        }
        self.conditions.push(condition);
        Ok(())
    }

    /// Remove a condition by id
    pub fn remove(&mut self, id: &str) -> Option<AttributeCondition> {
        let index = self.conditions.iter().position(|c| c.id == id)?;
        Some(self.conditions.remove(index))
    }

    /// Drop every condition, keeping the logic mode
    pub fn clear(&mut self) {
        self.conditions.clear();
    }
}
