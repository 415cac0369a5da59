//! Response completeness check.
//!
//! A response needs both a description and a content schema; the two causes
//! are independent, so one response node can carry two violations at once.
//! Report-only: neither half has a mechanical fix.

use crate::config::LintConfig;
use crate::error::Result;
use crate::index::DocumentIndex;
use crate::rule::{Category, Rule, RuleId, Severity};
use crate::violation::Violation;

/// Flags responses missing a description or a content schema.
pub struct ResponseContentRule;

impl Rule for ResponseContentRule {
    fn id(&self) -> RuleId {
        RuleId::new("semantic-response-content")
    }

    fn name(&self) -> &str {
        "Response Content"
    }

    fn description(&self) -> &str {
        "Responses need a description and a content schema"
    }

    fn category(&self) -> Category {
        Category::Semantic
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, index: &DocumentIndex, _config: &LintConfig) -> Result<Vec<Violation>> {
        let mut violations = Vec::new();

        for response in &index.responses {
            if !response.has_description {
                violations.push(Violation::new(
                    self.id(),
                    self.default_severity(),
                    format!("response {} has no description", response.status),
                    response.pos,
                ));
            }
            if !response.has_content {
                violations.push(Violation::new(
                    self.id(),
                    self.default_severity(),
                    format!("response {} has no content schema", response.status),
                    response.pos,
                ));
            }
        }

        Ok(violations)
    }
}
