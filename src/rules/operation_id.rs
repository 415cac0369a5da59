//! Operation id naming check.

use regex::Regex;

use crate::config::LintConfig;
use crate::error::{OaslintError, Result};
use crate::index::DocumentIndex;
use crate::rule::{Category, Rule, RuleId, Severity};
use crate::violation::Violation;

const KEBAB_CASE: &str = "^[a-z][a-z0-9]*(-[a-z0-9]+)*$";

/// Flags missing or non-kebab-case operation ids.
pub struct OperationIdRule;

impl Rule for OperationIdRule {
    fn id(&self) -> RuleId {
        RuleId::new("style-operation-id")
    }

    fn name(&self) -> &str {
        "Operation Id"
    }

    fn description(&self) -> &str {
        "Operations need a kebab-case operationId"
    }

    fn category(&self) -> Category {
        Category::Style
    }

    fn default_severity(&self) -> Severity {
        Severity::Hint
    }

    fn check(&self, index: &DocumentIndex, _config: &LintConfig) -> Result<Vec<Violation>> {
        let pattern = Regex::new(KEBAB_CASE).map_err(|e| OaslintError::RuleExecution {
            rule: self.id().0,
            message: e.to_string(),
        })?;
        let mut violations = Vec::new();

        for operation in &index.operations {
            match &operation.operation_id {
                None => violations.push(Violation::new(
                    self.id(),
                    self.default_severity(),
                    format!(
                        "operation {} {} has no operationId",
                        operation.method.to_uppercase(),
                        operation.path
                    ),
                    operation.pos,
                )),
                Some(id) if !pattern.is_match(id) => violations.push(Violation::new(
                    self.id(),
                    self.default_severity(),
                    format!("operationId '{}' is not kebab-case", id),
                    operation.pos,
                )),
                Some(_) => {}
            }
        }

        Ok(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::OperationEntry;
    use crate::tree::{NodeKind, Pos, SyntaxTree};

    fn operation(tree: &mut SyntaxTree, operation_id: Option<&str>) -> OperationEntry {
        let handle = tree.alloc(NodeKind::Mapping(vec![]), Pos::new(4, 5));
        OperationEntry {
            method: "get".to_string(),
            path: "/pets".to_string(),
            pointer: "#/paths/~1pets/get".to_string(),
            pos: Pos::new(4, 5),
            handle,
            operation_id: operation_id.map(str::to_string),
            has_description: true,
        }
    }

    fn check_with(operation_id: Option<&str>) -> Vec<Violation> {
        let mut tree = SyntaxTree::new();
        let mut index = DocumentIndex::new("openapi.yaml", "3.0.3");
        index.operations.push(operation(&mut tree, operation_id));
        OperationIdRule
            .check(&index, &LintConfig::default())
            .unwrap()
    }

    #[test]
    fn flags_missing_operation_id() {
        let violations = check_with(None);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("no operationId"));
    }

    #[test]
    fn flags_camel_case_operation_id() {
        let violations = check_with(Some("listPets"));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("not kebab-case"));
    }

    #[test]
    fn kebab_case_passes() {
        assert!(check_with(Some("list-pets")).is_empty());
        assert!(check_with(Some("list")).is_empty());
        assert!(check_with(Some("list-pets-v2")).is_empty());
    }
}
