//! Reference resolution failure reporting.
//!
//! The index builder records every reference it could not resolve (network
//! failure, malformed target, missing file) instead of aborting; this rule
//! turns those records into error-severity violations so a best-effort
//! report still surfaces them. Rules that need a resolved reference degrade
//! gracefully by skipping the affected sub-check; they never duplicate these
//! violations.

use crate::config::LintConfig;
use crate::error::Result;
use crate::index::DocumentIndex;
use crate::rule::{Category, Rule, RuleId, Severity};
use crate::violation::Violation;

/// Reports references the index builder failed to resolve.
pub struct ReferenceTargetRule;

impl Rule for ReferenceTargetRule {
    fn id(&self) -> RuleId {
        RuleId::new("semantic-reference-target")
    }

    fn name(&self) -> &str {
        "Reference Target"
    }

    fn description(&self) -> &str {
        "Every $ref must resolve to an existing target"
    }

    fn category(&self) -> Category {
        Category::Semantic
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, index: &DocumentIndex, _config: &LintConfig) -> Result<Vec<Violation>> {
        Ok(index
            .resolution_failures
            .iter()
            .map(|failure| {
                Violation::new(
                    self.id(),
                    self.default_severity(),
                    format!(
                        "reference '{}' could not be resolved: {}",
                        failure.target, failure.reason
                    ),
                    failure.pos,
                )
            })
            .collect())
    }
}
