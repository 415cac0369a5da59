//! Numeric schema bounds check.
//!
//! Unbounded integers and numbers are a frequent source of overflow bugs in
//! generated clients. The right bounds are domain knowledge, so the fix is
//! interactive: two free-text prompts, minimum and maximum.

use crate::config::LintConfig;
use crate::error::Result;
use crate::fix::transforms::NumericBoundsFix;
use crate::index::DocumentIndex;
use crate::rule::{Category, Rule, RuleId, Severity};
use crate::violation::Violation;

/// Flags numeric schemas without both `minimum` and `maximum`.
pub struct NumericBoundsRule;

impl Rule for NumericBoundsRule {
    fn id(&self) -> RuleId {
        RuleId::new("schema-numeric-bounds")
    }

    fn name(&self) -> &str {
        "Numeric Bounds"
    }

    fn description(&self) -> &str {
        "Numeric schemas should declare minimum and maximum"
    }

    fn category(&self) -> Category {
        Category::Schema
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, index: &DocumentIndex, _config: &LintConfig) -> Result<Vec<Violation>> {
        let mut violations = Vec::new();

        for schema in &index.schemas {
            let numeric = matches!(schema.schema_type.as_deref(), Some("integer") | Some("number"));
            if numeric && (!schema.has_minimum || !schema.has_maximum) {
                violations.push(
                    Violation::new(
                        self.id(),
                        self.default_severity(),
                        format!("numeric schema {} declares no bounds", schema.pointer),
                        schema.pos,
                    )
                    .with_fix(Box::new(NumericBoundsFix::new(schema.handle))),
                );
            }
        }

        Ok(violations)
    }
}
