//! Batch fix application ("apply all safe fixes").
//!
//! The [`FixEngine`] partitions a pass's violations by fixability and
//! interactivity, applies every automatic fix against the live tree and
//! object model, and hands interactive fixes back to the caller. After a
//! batch the caller must re-index and re-run the catalog; the engine never
//! re-validates on its own, since fix application invalidates the index.

use tracing::{debug, warn};

use super::Fix;
use crate::error::Result;
use crate::tree::SyntaxTree;
use crate::violation::Violation;

/// Result of one automatic fix batch.
#[derive(Debug, Default)]
pub struct FixOutcome {
    /// Automatic fixes that ran without error (stale-handle no-ops included,
    /// by design indistinguishable from applied ones).
    pub applied: usize,
    /// Per-fix errors; one failing fix never aborts the batch.
    pub errors: Vec<String>,
    /// Fix-bearing violations requiring prompt answers; never auto-applied.
    pub interactive: Vec<Violation>,
    /// Violations without a fix.
    pub report_only: Vec<Violation>,
}

/// Engine for applying fixes in batch.
pub struct FixEngine;

impl FixEngine {
    /// Create a new fix engine.
    pub fn new() -> Self {
        Self
    }

    /// Apply every automatic fix among `violations` against the live tree
    /// and decoded object model.
    ///
    /// Each fix mutates through its own captured handle; nothing is
    /// re-resolved by position. The mutation phase requires exclusive
    /// ownership of the tree, expressed by the `&mut` borrow, and the engine
    /// retains neither borrow past the call.
    pub fn apply_automatic(
        &self,
        violations: Vec<Violation>,
        tree: &mut SyntaxTree,
        doc: &mut serde_json::Value,
    ) -> FixOutcome {
        let mut outcome = FixOutcome::default();

        for mut violation in violations {
            let Some(mut fix) = violation.fix.take() else {
                outcome.report_only.push(violation);
                continue;
            };
            if fix.interactive() {
                violation.fix = Some(fix);
                outcome.interactive.push(violation);
                continue;
            }
            match Self::run_fix(fix.as_mut(), tree, doc) {
                Ok(()) => {
                    debug!("applied fix for {}: {}", violation.rule_id, fix.description());
                    outcome.applied += 1;
                }
                Err(e) => {
                    warn!("fix for {} failed: {}", violation.rule_id, e);
                    outcome.errors.push(format!("{}: {}", violation.rule_id, e));
                }
            }
        }

        outcome
    }

    /// Apply one fix (typically interactive, after its prompts are
    /// answered) against the live tree and object model.
    pub fn apply_one(
        &self,
        fix: &mut dyn Fix,
        tree: &mut SyntaxTree,
        doc: &mut serde_json::Value,
    ) -> Result<()> {
        Self::run_fix(fix, tree, doc)
    }

    /// Preview fix-bearing violations without applying anything.
    pub fn preview(&self, violations: &[Violation]) -> Vec<String> {
        violations
            .iter()
            .filter_map(|v| v.fix.as_ref().map(|fix| (v, fix)))
            .map(|(v, fix)| {
                let (before, after) = fix.describe_change();
                if before.is_empty() && after.is_empty() {
                    format!("{}: {} (no change)", v.rule_id, fix.description())
                } else {
                    format!("{}: {} [{} -> {}]", v.rule_id, fix.description(), before, after)
                }
            })
            .collect()
    }

    // Exactly one of the two entry points is meaningful per fix; the other
    // is a safe no-op, so both are always invoked.
    fn run_fix(fix: &mut dyn Fix, tree: &mut SyntaxTree, doc: &mut serde_json::Value) -> Result<()> {
        fix.apply_node(tree)?;
        fix.apply(doc)
    }
}

impl Default for FixEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fix::transforms::{strip_trailing_slashes, NumericBoundsFix, ScalarRewriteFix};
    use crate::rule::{RuleId, Severity};
    use crate::tree::{MapEntry, NodeKind, Pos};

    fn server_tree() -> (SyntaxTree, crate::tree::NodeHandle) {
        let mut tree = SyntaxTree::new();
        let url = tree.alloc(
            NodeKind::Scalar("https://api.example.com///".to_string()),
            Pos::new(3, 10),
        );
        let root = tree.alloc(
            NodeKind::Mapping(vec![MapEntry {
                key: "url".to_string(),
                key_pos: Pos::new(3, 5),
                value: url,
            }]),
            Pos::new(1, 1),
        );
        tree.set_root(root);
        (tree, url)
    }

    fn slash_violation(url: crate::tree::NodeHandle) -> Violation {
        Violation::new(
            RuleId::new("style-server-trailing-slash"),
            Severity::Warning,
            "server URL has trailing slashes",
            Pos::new(3, 10),
        )
        .with_fix(Box::new(ScalarRewriteFix::new(
            url,
            "https://api.example.com///",
            "strip trailing slashes",
            strip_trailing_slashes,
        )))
    }

    #[test]
    fn applies_automatic_fixes() {
        let (mut tree, url) = server_tree();
        let mut doc = serde_json::json!({});
        let engine = FixEngine::new();

        let outcome =
            engine.apply_automatic(vec![slash_violation(url)], &mut tree, &mut doc);

        assert_eq!(outcome.applied, 1);
        assert!(outcome.errors.is_empty());
        assert_eq!(tree.scalar(url), Some("https://api.example.com"));
    }

    #[test]
    fn partitions_interactive_and_report_only() {
        let (mut tree, url) = server_tree();
        let mut doc = serde_json::json!({});
        let engine = FixEngine::new();

        let interactive = Violation::new(
            RuleId::new("schema-numeric-bounds"),
            Severity::Info,
            "numeric schema has no bounds",
            Pos::new(5, 3),
        )
        .with_fix(Box::new(NumericBoundsFix::new(url)));
        let report_only = Violation::new(
            RuleId::new("semantic-response-content"),
            Severity::Warning,
            "response has no content",
            Pos::new(9, 7),
        );

        let outcome = engine.apply_automatic(
            vec![slash_violation(url), interactive, report_only],
            &mut tree,
            &mut doc,
        );

        assert_eq!(outcome.applied, 1);
        assert_eq!(outcome.interactive.len(), 1);
        assert_eq!(outcome.report_only.len(), 1);
        // Interactive fix was not applied: the schema mapping is untouched.
        assert_eq!(tree.scalar(url), Some("https://api.example.com"));
    }

    #[test]
    fn stale_handle_is_silent_noop() {
        let (mut tree, url) = server_tree();
        let root = tree.root().unwrap();
        let mut doc = serde_json::json!({});
        let engine = FixEngine::new();

        // An earlier fix in the batch removed the shared ancestor.
        let violation = slash_violation(url);
        tree.remove_entry(root, "url");

        let outcome = engine.apply_automatic(vec![violation], &mut tree, &mut doc);

        assert_eq!(outcome.applied, 1);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn not_ready_interactive_fix_errors_via_apply_one() {
        let (mut tree, url) = server_tree();
        let mut doc = serde_json::json!({});
        let engine = FixEngine::new();
        let mut fix = NumericBoundsFix::new(url);

        assert!(engine.apply_one(&mut fix, &mut tree, &mut doc).is_err());
    }

    #[test]
    fn preview_describes_changes() {
        let (_, url) = server_tree();
        let violations = vec![slash_violation(url)];
        let engine = FixEngine::new();

        let lines = engine.preview(&violations);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("https://api.example.com/// -> https://api.example.com"));
    }
}
