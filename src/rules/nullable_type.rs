//! 3.0-style `nullable` marker check (OpenAPI 3.1 only).
//!
//! OpenAPI 3.1 dropped the `nullable` keyword in favor of type arrays that
//! include `"null"`. Carries an automatic tree fix performing the rewrite.
//! Version-gated: on a 3.0 document this rule contributes nothing.

use crate::config::LintConfig;
use crate::error::Result;
use crate::fix::transforms::NullableTypeFix;
use crate::index::DocumentIndex;
use crate::rule::{Category, Rule, RuleId, Severity};
use crate::violation::Violation;

/// Flags `nullable: true` in 3.1 documents.
pub struct NullableTypeRule;

impl Rule for NullableTypeRule {
    fn id(&self) -> RuleId {
        RuleId::new("schema-nullable-type")
    }

    fn name(&self) -> &str {
        "Nullable Type"
    }

    fn description(&self) -> &str {
        "3.1 schemas must use type arrays instead of 'nullable'"
    }

    fn category(&self) -> Category {
        Category::Schema
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn applicable_versions(&self) -> Option<&[&str]> {
        Some(&["3.1"])
    }

    fn check(&self, index: &DocumentIndex, _config: &LintConfig) -> Result<Vec<Violation>> {
        let mut violations = Vec::new();

        for schema in &index.schemas {
            if schema.nullable {
                violations.push(
                    Violation::new(
                        self.id(),
                        self.default_severity(),
                        format!(
                            "schema {} uses 'nullable'; use a type array including \"null\"",
                            schema.pointer
                        ),
                        schema.pos,
                    )
                    .with_fix(Box::new(NullableTypeFix::new(
                        schema.handle,
                        schema.schema_type.clone(),
                    ))),
                );
            }
        }

        Ok(violations)
    }
}
