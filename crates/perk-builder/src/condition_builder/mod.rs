//! Condition builder
//!
//! Builds an audience [`ConditionSet`] one condition at a time against an
//! attribute catalog. Each cycle opens the builder, picks an attribute that
//! is not used yet, enters a value and commits. Invalid entries are never
//! committed: `commit()` simply returns `None` and leaves everything as is.

mod format;
mod state;

pub use format::format_chip_value;
pub use state::{BuilderState, DraftValue, ValueEntry};

use crate::error::{BuilderError, Result};
use perk_core::id::generate_id;
use perk_core::{
    AttributeCatalog, AttributeCondition, AttributeDefinition, ConditionLogic, ConditionSet,
    Operator,
};
use std::sync::Arc;
use tracing::debug;

/// Catalog-driven condition builder
#[derive(Debug, Clone)]
pub struct ConditionBuilder {
    catalog: Arc<AttributeCatalog>,
    conditions: ConditionSet,
    state: BuilderState,
}

impl ConditionBuilder {
    /// Create a builder with an empty condition set
    pub fn new(catalog: Arc<AttributeCatalog>) -> Self {
        Self {
            catalog,
            conditions: ConditionSet::default(),
            state: BuilderState::Closed,
        }
    }

    /// Resume editing an existing condition set.
    ///
    /// Every condition must reference an attribute of the catalog.
    pub fn with_conditions(catalog: Arc<AttributeCatalog>, conditions: ConditionSet) -> Result<Self> {
        for condition in conditions.iter() {
            catalog.require(&condition.attribute)?;
        }
        Ok(Self {
            catalog,
            conditions,
            state: BuilderState::Closed,
        })
    }

    pub fn catalog(&self) -> &AttributeCatalog {
        &self.catalog
    }

    pub fn conditions(&self) -> &ConditionSet {
        &self.conditions
    }

    pub fn into_conditions(self) -> ConditionSet {
        self.conditions
    }

    pub fn state(&self) -> &BuilderState {
        &self.state
    }

    /// Whether another condition can be added
    pub fn can_add(&self) -> bool {
        self.conditions.len() < self.catalog.len()
    }

    /// Catalog attributes without a condition yet, in catalog order
    pub fn selectable_attributes(&self) -> Vec<&AttributeDefinition> {
        self.catalog
            .iter()
            .filter(|a| !self.conditions.contains_attribute(&a.id))
            .collect()
    }

    /// Start a new condition
    pub fn open(&mut self) -> Result<()> {
        if !self.can_add() {
            return Err(BuilderError::CatalogExhausted);
        }
        self.state = std::mem::take(&mut self.state).open()?;
        debug!("Condition builder opened");
        Ok(())
    }

    /// Pick the attribute for the new condition
    pub fn select_attribute(&mut self, attribute_id: &str) -> Result<()> {
        let attribute = self.catalog.require(attribute_id)?;
        if self.conditions.contains_attribute(attribute_id) {
            return Err(BuilderError::AttributeInUse(attribute_id.to_string()));
        }
        let current = std::mem::take(&mut self.state);
        match current.clone().select(attribute) {
            Ok(next) => {
                debug!(attribute = attribute_id, "Attribute selected");
                self.state = next;
                Ok(())
            }
            Err(err) => {
                self.state = current;
                Err(err)
            }
        }
    }

    pub fn set_operator(&mut self, operator: Operator) -> Result<()> {
        self.state.entry_mut()?.set_operator(operator)
    }

    pub fn set_text(&mut self, text: &str) -> Result<()> {
        self.state.entry_mut()?.set_text(text)
    }

    pub fn set_single_value(&mut self, value: &str) -> Result<()> {
        self.state.entry_mut()?.set_single_value(value)
    }

    pub fn set_min(&mut self, min: &str) -> Result<()> {
        self.state.entry_mut()?.set_min(min)
    }

    pub fn set_max(&mut self, max: &str) -> Result<()> {
        self.state.entry_mut()?.set_max(max)
    }

    pub fn toggle_option(&mut self, option: &str) -> Result<()> {
        self.state.entry_mut()?.toggle_option(option)
    }

    /// Whether the value being entered can be committed
    pub fn is_valid(&self) -> bool {
        self.state.entry().is_some_and(ValueEntry::is_valid)
    }

    /// Commit the entered value as a new condition.
    ///
    /// Returns the new condition id, or `None` without touching any state
    /// when there is nothing valid to commit.
    pub fn commit(&mut self) -> Option<String> {
        let entry = self.state.entry()?;
        let value = entry.normalized_value()?;

        let condition = AttributeCondition::new(
            generate_id("cond"),
            entry.attribute().id.clone(),
            entry.operator(),
            value,
        );
        let id = condition.id.clone();
        if let Err(err) = self.conditions.push(condition) {
            debug!(error = %err, "Condition rejected");
            return None;
        }

        debug!(condition_id = %id, total = self.conditions.len(), "Condition committed");
        self.state = BuilderState::Closed;
        Some(id)
    }

    /// Abandon the condition being built
    pub fn cancel(&mut self) {
        self.state = std::mem::take(&mut self.state).cancel();
    }

    /// Remove a committed condition by id
    pub fn remove(&mut self, condition_id: &str) -> bool {
        self.conditions.remove(condition_id).is_some()
    }

    pub fn set_logic(&mut self, logic: ConditionLogic) {
        self.conditions.set_logic(logic);
    }

    /// Drop all conditions and close the builder
    pub fn reset(&mut self) {
        self.conditions.clear();
        self.state = BuilderState::Closed;
    }

    /// Chip text for a committed condition
    pub fn chip(&self, condition_id: &str) -> Option<String> {
        let condition = self.conditions.get(condition_id)?;
        let attribute = self.catalog.get(&condition.attribute)?;
        Some(format_chip_value(condition, attribute))
    }
}
