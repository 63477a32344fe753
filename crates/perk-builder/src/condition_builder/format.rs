//! Chip rendering for committed conditions

use perk_core::{AttributeCondition, AttributeDefinition, InputKind, Operator};

/// Render a condition's value the way the condition chip shows it.
///
/// Range values are prefixed with the attribute's unit; text and
/// multi-select values are shown as stored.
pub fn format_chip_value(condition: &AttributeCondition, attribute: &AttributeDefinition) -> String {
    match attribute.input {
        InputKind::Range => {
            let unit = attribute.unit();
            match condition.operator {
                Operator::Between => match condition.range_bounds() {
                    Some((min, max)) => format!("{unit}{min} - {unit}{max}"),
                    None => condition.value.clone(),
                },
                Operator::GreaterThan => format!("> {unit}{}", condition.value),
                Operator::LessThan => format!("< {unit}{}", condition.value),
                Operator::Equals => format!("= {unit}{}", condition.value),
                _ => condition.value.clone(),
            }
        }
        InputKind::Text | InputKind::MultiSelect { .. } => condition.value.clone(),
    }
}
