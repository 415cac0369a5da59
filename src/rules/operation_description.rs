//! Operation description presence check.
//!
//! The description text is the user's to write, so the fix is interactive:
//! one free-text prompt, applied against the decoded object model.

use crate::config::LintConfig;
use crate::error::Result;
use crate::fix::transforms::AddDescriptionFix;
use crate::index::DocumentIndex;
use crate::rule::{Category, Rule, RuleId, Severity};
use crate::violation::Violation;

/// Flags operations without a description.
pub struct OperationDescriptionRule;

impl Rule for OperationDescriptionRule {
    fn id(&self) -> RuleId {
        RuleId::new("style-operation-description")
    }

    fn name(&self) -> &str {
        "Operation Description"
    }

    fn description(&self) -> &str {
        "Operations should carry a description"
    }

    fn category(&self) -> Category {
        Category::Style
    }

    fn default_severity(&self) -> Severity {
        Severity::Hint
    }

    fn check(&self, index: &DocumentIndex, _config: &LintConfig) -> Result<Vec<Violation>> {
        let mut violations = Vec::new();

        for operation in &index.operations {
            if !operation.has_description {
                let pointer = operation.pointer.trim_start_matches('#').to_string();
                violations.push(
                    Violation::new(
                        self.id(),
                        self.default_severity(),
                        format!(
                            "operation {} {} has no description",
                            operation.method.to_uppercase(),
                            operation.path
                        ),
                        operation.pos,
                    )
                    .with_fix(Box::new(AddDescriptionFix::new(pointer))),
                );
            }
        }

        Ok(violations)
    }
}
