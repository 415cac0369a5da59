//! Orphaned reusable component detection.
//!
//! Flags every declared component with no inbound reference edge, unless it
//! carries the `x-lint-used` opt-out annotation. Backed by the
//! [`reachability`](crate::reachability) analyzer.

use crate::config::LintConfig;
use crate::error::Result;
use crate::index::DocumentIndex;
use crate::reachability;
use crate::rule::{Category, Rule, RuleId, Severity};
use crate::violation::Violation;

/// Annotation that force-marks a component as used.
const OPT_OUT: &str = "x-lint-used";

/// Detects components that are never referenced.
pub struct UnusedComponentRule;

impl Rule for UnusedComponentRule {
    fn id(&self) -> RuleId {
        RuleId::new("semantic-unused-component")
    }

    fn name(&self) -> &str {
        "Unused Component"
    }

    fn description(&self) -> &str {
        "Detects reusable components with no inbound reference"
    }

    fn category(&self) -> Category {
        Category::Semantic
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, index: &DocumentIndex, _config: &LintConfig) -> Result<Vec<Violation>> {
        let reach = reachability::analyze(index);
        let mut violations = Vec::new();

        for component in &index.components {
            if component.annotations.contains_key(OPT_OUT) {
                continue;
            }
            if !reach.is_used(component.kind, &component.name) {
                violations.push(Violation::new(
                    self.id(),
                    self.default_severity(),
                    format!("component {} is never referenced", component.pointer),
                    component.key_pos,
                ));
            }
        }

        Ok(violations)
    }
}
