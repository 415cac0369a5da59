//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`Rule`] - The trait that all lint rules must implement
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Category`] - Broad classification of what a rule checks
//! - [`Severity`] - Severity level for violations

use serde::{Deserialize, Serialize};

use crate::config::LintConfig;
use crate::error::Result;
use crate::index::DocumentIndex;
use crate::violation::Violation;

/// Unique identifier for a lint rule (kebab-case).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Broad classification of what a rule checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Cross-node consistency of the document.
    Semantic,
    /// Naming and formatting conventions.
    Style,
    /// Security-relevant declarations.
    Security,
    /// Shape of individual schema nodes.
    Schema,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Semantic => write!(f, "semantic"),
            Category::Style => write!(f, "style"),
            Category::Security => write!(f, "security"),
            Category::Schema => write!(f, "schema"),
        }
    }
}

/// Severity level for lint violations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational hint, does not affect validity.
    Hint,
    /// Noteworthy but harmless.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that downstream tooling should fail on.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Hint => write!(f, "hint"),
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A lint rule over a document index.
///
/// Rules are pure: each `check` maps a read-only index and config to a list
/// of violations, with no shared mutable state between rules. A rule whose
/// body fails returns `Err`; the runner isolates that failure so the rest of
/// the catalog still runs.
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Category of this rule.
    fn category(&self) -> Category;

    /// Default severity for this rule's violations.
    fn default_severity(&self) -> Severity;

    /// Version prefixes this rule applies to; `None` means all versions.
    ///
    /// A rule whose prefixes exclude the document's version is skipped
    /// entirely by the runner, contributing zero violations.
    fn applicable_versions(&self) -> Option<&[&str]> {
        None
    }

    /// Check the document and return any violations.
    fn check(&self, index: &DocumentIndex, config: &LintConfig) -> Result<Vec<Violation>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_id_equality() {
        let id1 = RuleId::new("test-rule");
        let id2 = RuleId::new("test-rule");
        let id3 = RuleId::new("other-rule");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn rule_id_display() {
        let id = RuleId::new("my-rule");
        assert_eq!(format!("{}", id), "my-rule");
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Hint < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn severity_display() {
        assert_eq!(format!("{}", Severity::Hint), "hint");
        assert_eq!(format!("{}", Severity::Info), "info");
        assert_eq!(format!("{}", Severity::Warning), "warning");
        assert_eq!(format!("{}", Severity::Error), "error");
    }

    #[test]
    fn severity_serde_lowercase() {
        let sev: Severity = serde_yaml::from_str("error").unwrap();
        assert_eq!(sev, Severity::Error);
        assert_eq!(serde_json::to_string(&Severity::Hint).unwrap(), "\"hint\"");
    }

    #[test]
    fn category_display() {
        assert_eq!(format!("{}", Category::Semantic), "semantic");
        assert_eq!(format!("{}", Category::Schema), "schema");
    }
}
