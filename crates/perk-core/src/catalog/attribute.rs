//! Attribute definitions and catalogs

use crate::condition::{Operator, OPTION_SEPARATOR};
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Input kind of a filterable attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "input_type", rename_all = "kebab-case")]
pub enum InputKind {
    /// Free text, matched with text operators
    Text,
    /// Numeric value, matched with numeric operators
    Range,
    /// Finite option set, always matched with `is_any_of`
    MultiSelect { options: Vec<String> },
}

impl InputKind {
    /// Name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Range => "range",
            InputKind::MultiSelect { .. } => "multi-select",
        }
    }
}

/// Static descriptor of a filterable field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// Unique key (e.g. "cart_total")
    pub id: String,

    /// Human readable label
    #[serde(default)]
    pub label: String,

    /// Input kind and its kind-specific data
    #[serde(flatten)]
    pub input: InputKind,

    /// Operators valid for this attribute; the first one is the default
    pub operators: Vec<Operator>,

    /// Display unit (e.g. "$"), no semantic effect
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_prefix: Option<String>,
}

impl AttributeDefinition {
    /// Create a text attribute
    pub fn text(id: impl Into<String>, label: impl Into<String>, operators: Vec<Operator>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            input: InputKind::Text,
            operators,
            unit_prefix: None,
        }
    }

    /// Create a range attribute
    pub fn range(id: impl Into<String>, label: impl Into<String>, operators: Vec<Operator>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            input: InputKind::Range,
            operators,
            unit_prefix: None,
        }
    }

    /// Create a multi-select attribute; operators are always `[is_any_of]`
    pub fn multi_select<S: Into<String>>(
        id: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            input: InputKind::MultiSelect {
                options: options.into_iter().map(Into::into).collect(),
            },
            operators: vec![Operator::IsAnyOf],
            unit_prefix: None,
        }
    }

    /// Set the display unit prefix
    pub fn with_unit_prefix(mut self, unit: impl Into<String>) -> Self {
        self.unit_prefix = Some(unit.into());
        self
    }

    /// The default operator (first declared)
    pub fn default_operator(&self) -> Option<Operator> {
        self.operators.first().copied()
    }

    pub fn supports(&self, operator: Operator) -> bool {
        self.operators.contains(&operator)
    }

    /// Options of a multi-select attribute, empty for other kinds
    pub fn options(&self) -> &[String] {
        match &self.input {
            InputKind::MultiSelect { options } => options,
            _ => &[],
        }
    }

    /// Unit prefix or the empty string
    pub fn unit(&self) -> &str {
        self.unit_prefix.as_deref().unwrap_or("")
    }

    /// Check the per-kind invariants of this definition
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(self.invalid("id must not be empty"));
        }
        if self.operators.is_empty() {
            return Err(self.invalid("at least one operator is required"));
        }

        match &self.input {
            InputKind::Text => {
                if let Some(op) = self.operators.iter().find(|op| !op.is_text()) {
                    return Err(self.invalid(&format!("operator '{}' is not a text operator", op)));
                }
            }
            InputKind::Range => {
                if let Some(op) = self.operators.iter().find(|op| !op.is_numeric()) {
                    return Err(self.invalid(&format!("operator '{}' is not a numeric operator", op)));
                }
            }
            InputKind::MultiSelect { options } => {
                if self.operators != [Operator::IsAnyOf] {
                    return Err(self.invalid("multi-select attributes only support 'is_any_of'"));
                }
                if options.is_empty() {
                    return Err(self.invalid("multi-select attributes need at least one option"));
                }
                // Stored values join options with the separator
                if let Some(bad) = options.iter().find(|o| o.contains(OPTION_SEPARATOR)) {
                    return Err(self.invalid(&format!(
                        "option '{}' contains the separator '{}'",
                        bad, OPTION_SEPARATOR
                    )));
                }
                let mut seen = HashSet::new();
                if let Some(dup) = options.iter().find(|o| !seen.insert(o.as_str())) {
                    return Err(self.invalid(&format!("duplicate option '{}'", dup)));
                }
            }
        }

        Ok(())
    }

    fn invalid(&self, reason: &str) -> CoreError {
        CoreError::InvalidAttribute {
            id: self.id.clone(),
            reason: reason.to_string(),
        }
    }
}

/// A finite, validated list of attribute definitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AttributeCatalogRecord")]
pub struct AttributeCatalog {
    name: String,
    attributes: Vec<AttributeDefinition>,
}

#[derive(Deserialize)]
struct AttributeCatalogRecord {
    #[serde(default)]
    name: String,
    attributes: Vec<AttributeDefinition>,
}

impl TryFrom<AttributeCatalogRecord> for AttributeCatalog {
    type Error = CoreError;

    fn try_from(record: AttributeCatalogRecord) -> Result<Self> {
        AttributeCatalog::new(record.name, record.attributes)
    }
}

impl AttributeCatalog {
    /// Create a catalog, validating every definition and id uniqueness
    pub fn new(name: impl Into<String>, attributes: Vec<AttributeDefinition>) -> Result<Self> {
        let catalog = Self {
            name: name.into(),
            attributes,
        };
        catalog.validate()?;
        log::debug!(
            "Attribute catalog '{}' loaded with {} attributes",
            catalog.name,
            catalog.attributes.len()
        );
        Ok(catalog)
    }

    /// Validate all definitions and id uniqueness
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for attribute in &self.attributes {
            attribute.validate()?;
            if !seen.insert(attribute.id.as_str()) {
                return Err(CoreError::DuplicateAttribute(attribute.id.clone()));
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, id: &str) -> Option<&AttributeDefinition> {
        self.attributes.iter().find(|a| a.id == id)
    }

    /// Get an attribute or fail with `UnknownAttribute`
    pub fn require(&self, id: &str) -> Result<&AttributeDefinition> {
        self.get(id)
            .ok_or_else(|| CoreError::UnknownAttribute(id.to_string()))
    }

    pub fn attributes(&self) -> &[AttributeDefinition] {
        &self.attributes
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeDefinition> {
        self.attributes.iter()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
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
    fn test_valid_definitions() {
        assert!(cart_total().validate().is_ok());
        assert!(AttributeDefinition::text("email", "Email", vec![Operator::Contains])
            .validate()
            .is_ok());
        assert!(AttributeDefinition::multi_select("tier", "Tier", ["Gold", "Silver"])
            .validate()
            .is_ok());
    }

    #[test]
    fn test_range_requires_numeric_operators() {
        let attr = AttributeDefinition::range("cart_total", "Cart", vec![Operator::Contains]);
        assert!(matches!(
            attr.validate(),
            Err(CoreError::InvalidAttribute { .. })
        ));

        let empty = AttributeDefinition::range("cart_total", "Cart", vec![]);
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_multi_select_rules() {
        let mut attr = AttributeDefinition::multi_select("tier", "Tier", ["Gold"]);
        attr.operators = vec![Operator::Equals];
        assert!(attr.validate().is_err());

        let no_options = AttributeDefinition::multi_select("tier", "Tier", Vec::<String>::new());
        assert!(no_options.validate().is_err());

        let dup = AttributeDefinition::multi_select("tier", "Tier", ["Gold", "Gold"]);
        assert!(dup.validate().is_err());
    }

    #[test]
    fn test_multi_select_rejects_separator_in_option() {
        let attr = AttributeDefinition::multi_select(
            "product_category",
            "Product category",
            ["Home, Garden", "Toys"],
        );
        let err = attr.validate().unwrap_err();
        assert!(err.to_string().contains("Home, Garden"));

        let ok = AttributeDefinition::multi_select(
            "product_category",
            "Product category",
            ["Home & Garden", "Home,Garden"],
        );
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let err = AttributeCatalog::new("commerce", vec![cart_total(), cart_total()]).unwrap_err();
        assert_eq!(err, CoreError::DuplicateAttribute("cart_total".to_string()));
    }

    #[test]
    fn test_default_operator_and_unit() {
        let attr = cart_total();
        assert_eq!(attr.default_operator(), Some(Operator::Between));
        assert_eq!(attr.unit(), "$");
        assert!(attr.supports(Operator::GreaterThan));
        assert!(!attr.supports(Operator::LessThan));
    }

    #[test]
    fn test_catalog_deserialize_validates() {
        let json = r#"{
            "name": "commerce",
            "attributes": [
                {"id": "cart_total", "input_type": "range", "operators": ["between", "greater_than"], "unit_prefix": "$"},
                {"id": "tier", "input_type": "multi-select", "options": ["Gold", "Silver"], "operators": ["is_any_of"]}
            ]
        }"#;
        let catalog: AttributeCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("tier").unwrap().options(), ["Gold", "Silver"]);

        let bad = r#"{"attributes": [{"id": "x", "input_type": "range", "operators": ["contains"]}]}"#;
        assert!(serde_json::from_str::<AttributeCatalog>(bad).is_err());
    }
}
