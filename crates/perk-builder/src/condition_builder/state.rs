//! Builder state machine
//!
//! ```text
//! Closed ──open──▶ ChoosingAttribute ──select──▶ EnteringValue ──commit──▶ Closed
//!    ▲                    │                            │
//!    └──────cancel────────┴───────────cancel───────────┘
//! ```
//!
//! Transitions consume the state and return the next one, so the machine
//! can be driven and tested without any UI.

use crate::error::{BuilderError, Result};
use perk_core::condition::{OPTION_SEPARATOR, RANGE_SEPARATOR};
use perk_core::{AttributeDefinition, InputKind, Operator};

/// In-progress value, shaped by the attribute's input kind
#[derive(Debug, Clone, PartialEq)]
pub enum DraftValue {
    Text(String),
    /// `value` feeds single-value operators, `min`/`max` feed `between`
    Range {
        value: String,
        min: String,
        max: String,
    },
    /// Chosen options in selection order
    MultiSelect(Vec<String>),
}

impl DraftValue {
    /// Empty value holder for an input kind
    pub fn empty_for(input: &InputKind) -> Self {
        match input {
            InputKind::Text => DraftValue::Text(String::new()),
            InputKind::Range => DraftValue::Range {
                value: String::new(),
                min: String::new(),
                max: String::new(),
            },
            InputKind::MultiSelect { .. } => DraftValue::MultiSelect(Vec::new()),
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            DraftValue::Text(_) => "text",
            DraftValue::Range { .. } => "range",
            DraftValue::MultiSelect(_) => "multi-select",
        }
    }
}

/// Attribute chosen, value being entered
#[derive(Debug, Clone, PartialEq)]
pub struct ValueEntry {
    attribute: AttributeDefinition,
    operator: Operator,
    value: DraftValue,
}

impl ValueEntry {
    /// Start entering a value for an attribute, using its default operator
    pub fn new(attribute: &AttributeDefinition) -> Result<Self> {
        let operator = attribute
            .default_operator()
            .ok_or_else(|| perk_core::CoreError::InvalidAttribute {
                id: attribute.id.clone(),
                reason: "at least one operator is required".to_string(),
            })?;
        Ok(Self {
            attribute: attribute.clone(),
            operator,
            value: DraftValue::empty_for(&attribute.input),
        })
    }

    pub fn attribute(&self) -> &AttributeDefinition {
        &self.attribute
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> &DraftValue {
        &self.value
    }

    /// Switch operator; entered values are kept
    pub fn set_operator(&mut self, operator: Operator) -> Result<()> {
        if !self.attribute.supports(operator) {
            return Err(BuilderError::UnsupportedOperator {
                attribute: self.attribute.id.clone(),
                operator,
            });
        }
        self.operator = operator;
        Ok(())
    }

    pub fn set_text(&mut self, text: &str) -> Result<()> {
        match &mut self.value {
            DraftValue::Text(current) => {
                *current = text.to_string();
                Ok(())
            }
            other => Err(mismatch(&self.attribute, other, "text")),
        }
    }

    /// Value for single-value range operators
    pub fn set_single_value(&mut self, raw: &str) -> Result<()> {
        match &mut self.value {
            DraftValue::Range { value, .. } => {
                *value = raw.to_string();
                Ok(())
            }
            other => Err(mismatch(&self.attribute, other, "range")),
        }
    }

    pub fn set_min(&mut self, raw: &str) -> Result<()> {
        match &mut self.value {
            DraftValue::Range { min, .. } => {
                *min = raw.to_string();
                Ok(())
            }
            other => Err(mismatch(&self.attribute, other, "range")),
        }
    }

    pub fn set_max(&mut self, raw: &str) -> Result<()> {
        match &mut self.value {
            DraftValue::Range { max, .. } => {
                *max = raw.to_string();
                Ok(())
            }
            other => Err(mismatch(&self.attribute, other, "range")),
        }
    }

    /// Add the option if absent, remove it if present
    pub fn toggle_option(&mut self, option: &str) -> Result<()> {
        if !self.attribute.options().iter().any(|o| o == option) {
            if let DraftValue::MultiSelect(_) = self.value {
                return Err(BuilderError::UnknownOption {
                    attribute: self.attribute.id.clone(),
                    option: option.to_string(),
                });
            }
        }
        match &mut self.value {
            DraftValue::MultiSelect(chosen) => {
                if let Some(pos) = chosen.iter().position(|o| o == option) {
                    chosen.remove(pos);
                } else {
                    chosen.push(option.to_string());
                }
                Ok(())
            }
            other => Err(mismatch(&self.attribute, other, "multi-select")),
        }
    }

    /// Whether the entry can be committed
    pub fn is_valid(&self) -> bool {
        self.normalized_value().is_some()
    }

    /// Canonical value string, or `None` while the entry is invalid
    pub fn normalized_value(&self) -> Option<String> {
        match &self.value {
            DraftValue::Text(text) => (!text.is_empty()).then(|| text.clone()),
            DraftValue::Range { value, min, max } => {
                if self.operator == Operator::Between {
                    let (lo, hi) = (parse_number(min)?, parse_number(max)?);
                    (lo < hi).then(|| format!("{}{}{}", min.trim(), RANGE_SEPARATOR, max.trim()))
                } else {
                    parse_number(value).map(|_| value.trim().to_string())
                }
            }
            DraftValue::MultiSelect(chosen) => {
                (!chosen.is_empty()).then(|| chosen.join(OPTION_SEPARATOR))
            }
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn mismatch(attribute: &AttributeDefinition, value: &DraftValue, requested: &'static str) -> BuilderError {
    BuilderError::ValueKindMismatch {
        attribute: attribute.id.clone(),
        kind: value.kind_name(),
        requested,
    }
}

/// Current step of the condition builder
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BuilderState {
    #[default]
    Closed,
    ChoosingAttribute,
    EnteringValue(ValueEntry),
}

impl BuilderState {
    pub fn name(&self) -> &'static str {
        match self {
            BuilderState::Closed => "closed",
            BuilderState::ChoosingAttribute => "choosing attribute",
            BuilderState::EnteringValue(_) => "entering value",
        }
    }

    /// `Closed → ChoosingAttribute`
    pub fn open(self) -> Result<Self> {
        match self {
            BuilderState::Closed => Ok(BuilderState::ChoosingAttribute),
            other => Err(BuilderError::InvalidTransition {
                action: "open",
                state: other.name(),
            }),
        }
    }

    /// `ChoosingAttribute → EnteringValue`, seeding an empty value
    pub fn select(self, attribute: &AttributeDefinition) -> Result<Self> {
        match self {
            BuilderState::ChoosingAttribute => {
                Ok(BuilderState::EnteringValue(ValueEntry::new(attribute)?))
            }
            other => Err(BuilderError::InvalidTransition {
                action: "select an attribute",
                state: other.name(),
            }),
        }
    }

    /// Any state → `Closed`
    pub fn cancel(self) -> Self {
        BuilderState::Closed
    }

    pub fn entry(&self) -> Option<&ValueEntry> {
        match self {
            BuilderState::EnteringValue(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn entry_mut(&mut self) -> Result<&mut ValueEntry> {
        let state = self.name();
        match self {
            BuilderState::EnteringValue(entry) => Ok(entry),
            _ => Err(BuilderError::InvalidTransition {
                action: "edit the value",
                state,
            }),
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, BuilderState::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart_total() -> AttributeDefinition {
        AttributeDefinition::range(
            "cart_total",
            "Cart total",
            vec![Operator::Between, Operator::GreaterThan],
        )
        .with_unit_prefix("$")
    }

    #[test]
    fn test_transitions() {
        let state = BuilderState::default();
        assert!(state.is_closed());

        let state = state.open().unwrap();
        assert_eq!(state, BuilderState::ChoosingAttribute);

        let state = state.select(&cart_total()).unwrap();
        assert_eq!(state.entry().unwrap().operator(), Operator::Between);

        assert!(state.clone().open().is_err());
        assert!(state.cancel().is_closed());
    }

    #[test]
    fn test_select_requires_choosing_step() {
        let err = BuilderState::Closed.select(&cart_total()).unwrap_err();
        assert_eq!(
            err,
            BuilderError::InvalidTransition {
                action: "select an attribute",
                state: "closed"
            }
        );
    }

    #[test]
    fn test_between_validity() {
        let mut entry = ValueEntry::new(&cart_total()).unwrap();
        assert!(!entry.is_valid());

        entry.set_min("10").unwrap();
        assert!(!entry.is_valid());

        entry.set_max("10").unwrap();
        assert!(!entry.is_valid(), "min == max must be rejected");

        entry.set_max("5").unwrap();
        assert!(!entry.is_valid(), "min > max must be rejected");

        entry.set_max("50").unwrap();
        assert_eq!(entry.normalized_value().as_deref(), Some("10:50"));
    }

    #[test]
    fn test_single_value_requires_number() {
        let mut entry = ValueEntry::new(&cart_total()).unwrap();
        entry.set_operator(Operator::GreaterThan).unwrap();

        entry.set_single_value("abc").unwrap();
        assert!(!entry.is_valid());

        entry.set_single_value(" 25 ").unwrap();
        assert_eq!(entry.normalized_value().as_deref(), Some("25"));
    }

    #[test]
    fn test_operator_switch_keeps_values() {
        let mut entry = ValueEntry::new(&cart_total()).unwrap();
        entry.set_single_value("25").unwrap();
        entry.set_operator(Operator::GreaterThan).unwrap();
        entry.set_operator(Operator::Between).unwrap();
        entry.set_operator(Operator::GreaterThan).unwrap();
        assert!(entry.is_valid());

        assert!(matches!(
            entry.set_operator(Operator::LessThan),
            Err(BuilderError::UnsupportedOperator { .. })
        ));
    }

    #[test]
    fn test_text_validity() {
        let attr = AttributeDefinition::text("email", "Email", vec![Operator::Contains]);
        let mut entry = ValueEntry::new(&attr).unwrap();
        assert!(!entry.is_valid());
        // Whitespace is content; only the empty string is invalid
        entry.set_text("   ").unwrap();
        assert_eq!(entry.normalized_value().as_deref(), Some("   "));
        entry.set_text("").unwrap();
        assert!(!entry.is_valid());
        entry.set_text("@acme").unwrap();
        assert_eq!(entry.normalized_value().as_deref(), Some("@acme"));
    }

    #[test]
    fn test_multi_select_toggle() {
        let attr = AttributeDefinition::multi_select("tier", "Tier", ["Bronze", "Gold", "Platinum"]);
        let mut entry = ValueEntry::new(&attr).unwrap();
        assert!(!entry.is_valid());

        entry.toggle_option("Platinum").unwrap();
        entry.toggle_option("Gold").unwrap();
        entry.toggle_option("Bronze").unwrap();
        entry.toggle_option("Bronze").unwrap();
        assert_eq!(entry.normalized_value().as_deref(), Some("Platinum, Gold"));

        assert!(matches!(
            entry.toggle_option("Diamond"),
            Err(BuilderError::UnknownOption { .. })
        ));
    }

    #[test]
    fn test_kind_mismatch() {
        let mut entry = ValueEntry::new(&cart_total()).unwrap();
        let err = entry.set_text("hello").unwrap_err();
        assert_eq!(
            err,
            BuilderError::ValueKindMismatch {
                attribute: "cart_total".to_string(),
                kind: "range",
                requested: "text"
            }
        );
        assert!(matches!(
            entry.toggle_option("x"),
            Err(BuilderError::ValueKindMismatch { .. })
        ));
    }
}
