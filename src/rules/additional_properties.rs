//! Explicit `additionalProperties` check for object schemas.
//!
//! An object schema without an explicit `additionalProperties` silently
//! accepts unknown fields. Carries an automatic object-model fix inserting
//! `additionalProperties: false`.

use serde_json::Value;

use crate::config::LintConfig;
use crate::error::Result;
use crate::fix::transforms::InsertFieldFix;
use crate::index::DocumentIndex;
use crate::rule::{Category, Rule, RuleId, Severity};
use crate::violation::Violation;

/// Flags object schemas without an explicit `additionalProperties`.
pub struct AdditionalPropertiesRule;

impl Rule for AdditionalPropertiesRule {
    fn id(&self) -> RuleId {
        RuleId::new("schema-additional-properties")
    }

    fn name(&self) -> &str {
        "Additional Properties"
    }

    fn description(&self) -> &str {
        "Object schemas should declare additionalProperties explicitly"
    }

    fn category(&self) -> Category {
        Category::Schema
    }

    fn default_severity(&self) -> Severity {
        Severity::Hint
    }

    fn check(&self, index: &DocumentIndex, _config: &LintConfig) -> Result<Vec<Violation>> {
        let mut violations = Vec::new();

        for schema in &index.schemas {
            if schema.schema_type.as_deref() == Some("object")
                && !schema.has_additional_properties
            {
                let pointer = schema.pointer.trim_start_matches('#').to_string();
                violations.push(
                    Violation::new(
                        self.id(),
                        self.default_severity(),
                        format!(
                            "object schema {} does not declare additionalProperties",
                            schema.pointer
                        ),
                        schema.pos,
                    )
                    .with_fix(Box::new(InsertFieldFix::new(
                        pointer,
                        "additionalProperties",
                        Value::Bool(false),
                        "declare additionalProperties: false",
                    ))),
                );
            }
        }

        Ok(violations)
    }
}
