//! Identifier generation for editor-side records

use uuid::Uuid;

/// Generate a prefixed unique id (e.g. `cond_3f2a...`)
pub fn generate_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}
