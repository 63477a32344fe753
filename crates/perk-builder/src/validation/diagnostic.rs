//! Validation diagnostics and reports

use serde::{Deserialize, Serialize};

/// How a diagnostic affects publishing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Disables publish until resolved
    Blocking,
    /// Shown to the user, publish stays enabled
    Advisory,
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,

    /// Stable code (e.g. "E001", "W001")
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Reward the finding is about, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_id: Option<String>,
}

impl Diagnostic {
    /// Create a blocking diagnostic
    pub fn blocking(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Blocking,
            code: code.into(),
            message: message.into(),
            reward_id: None,
        }
    }

    /// Create an advisory diagnostic
    pub fn advisory(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Advisory,
            code: code.into(),
            message: message.into(),
            reward_id: None,
        }
    }

    pub fn for_reward(mut self, reward_id: impl Into<String>) -> Self {
        self.reward_id = Some(reward_id.into());
        self
    }

    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Blocking
    }
}

/// Outcome of validating a draft
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Publish is allowed unless a blocking diagnostic exists
    pub fn can_publish(&self) -> bool {
        !self.diagnostics.iter().any(Diagnostic::is_blocking)
    }

    pub fn blocking(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_blocking())
    }

    pub fn advisories(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_blocking())
    }

    /// Look up diagnostics by code
    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.diagnostics.iter().filter(move |d| d.code == code)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
