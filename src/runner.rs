//! Catalog runner.
//!
//! Executes active rules against one document index with version gating,
//! enable/disable selection, per-rule failure isolation, and severity
//! overrides, and aggregates the violations sorted by position.
//!
//! Positions in the returned violations are valid for the tree the index was
//! built from. After applying any structural fix, re-index before running
//! the catalog again.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::config::LintConfig;
use crate::index::DocumentIndex;
use crate::registry::RuleRegistry;
use crate::rule::{Rule, RuleId, Severity};
use crate::tree::Pos;
use crate::violation::Violation;

/// Run every active rule and aggregate violations.
pub fn run(
    registry: &RuleRegistry,
    index: &DocumentIndex,
    config: &LintConfig,
) -> Vec<Violation> {
    let selected = bundle_selection(registry, config);
    let mut violations = Vec::new();

    for rule in registry.iter() {
        let id = rule.id();
        if !is_active(&id, rule, index, config, selected.as_ref()) {
            continue;
        }
        match rule.check(index, config) {
            Ok(mut found) => {
                if let Some(severity) = config.severity_override(&id) {
                    for violation in &mut found {
                        violation.severity = severity;
                    }
                }
                violations.extend(found);
            }
            Err(e) => {
                // One rule's defect must not block the others.
                warn!("rule {} failed: {}", id, e);
                violations.push(Violation::new(
                    id,
                    Severity::Error,
                    format!("rule execution failed: {e}"),
                    Pos::default(),
                ));
            }
        }
    }

    violations.sort_by(|a, b| {
        (a.pos, &a.rule_id, &a.message).cmp(&(b.pos, &b.rule_id, &b.message))
    });
    violations
}

fn bundle_selection(registry: &RuleRegistry, config: &LintConfig) -> Option<HashSet<RuleId>> {
    if config.extends.is_empty() {
        return None;
    }
    let mut selected = HashSet::new();
    for name in &config.extends {
        match registry.bundle(name) {
            Some(ids) => selected.extend(ids),
            None => warn!("unknown rule bundle '{}'", name),
        }
    }
    Some(selected)
}

fn is_active(
    id: &RuleId,
    rule: &dyn Rule,
    index: &DocumentIndex,
    config: &LintConfig,
    selected: Option<&HashSet<RuleId>>,
) -> bool {
    let in_bundle = selected.map_or(true, |s| s.contains(id));
    let enabled = config.enabled(id).unwrap_or(in_bundle);
    if !enabled {
        debug!("rule {} disabled", id);
        return false;
    }
    if let Some(prefixes) = rule.applicable_versions() {
        if !index.version_matches(prefixes) {
            debug!("rule {} skipped for version {}", id, index.version);
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{OaslintError, Result};
    use crate::rule::Category;

    struct FixedRule {
        id: &'static str,
        versions: Option<&'static [&'static str]>,
        fail: bool,
    }

    impl Rule for FixedRule {
        fn id(&self) -> RuleId {
            RuleId::new(self.id)
        }
        fn name(&self) -> &str {
            "Fixed Rule"
        }
        fn description(&self) -> &str {
            "Emits one violation"
        }
        fn category(&self) -> Category {
            Category::Style
        }
        fn default_severity(&self) -> Severity {
            Severity::Warning
        }
        fn applicable_versions(&self) -> Option<&[&str]> {
            self.versions
        }
        fn check(&self, _index: &DocumentIndex, _config: &LintConfig) -> Result<Vec<Violation>> {
            if self.fail {
                return Err(OaslintError::RuleExecution {
                    rule: self.id.to_string(),
                    message: "internal defect".to_string(),
                });
            }
            Ok(vec![Violation::new(
                self.id(),
                self.default_severity(),
                "found something",
                Pos::new(2, 3),
            )])
        }
    }

    fn registry_with(rules: Vec<FixedRule>) -> RuleRegistry {
        let mut registry = RuleRegistry::new();
        for rule in rules {
            registry.register(Box::new(rule));
        }
        registry
    }

    fn rule(id: &'static str) -> FixedRule {
        FixedRule {
            id,
            versions: None,
            fail: false,
        }
    }

    #[test]
    fn runs_all_rules_by_default() {
        let registry = registry_with(vec![rule("a-rule"), rule("b-rule")]);
        let index = DocumentIndex::new("openapi.yaml", "3.0.3");

        let violations = run(&registry, &index, &LintConfig::default());
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn version_gated_rule_contributes_nothing() {
        let registry = registry_with(vec![FixedRule {
            id: "three-one-only",
            versions: Some(&["3.1"]),
            fail: false,
        }]);
        let index = DocumentIndex::new("openapi.yaml", "3.0.3");

        let violations = run(&registry, &index, &LintConfig::default());
        assert!(violations.is_empty());

        let index = DocumentIndex::new("openapi.yaml", "3.1.0");
        let violations = run(&registry, &index, &LintConfig::default());
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn severity_override_changes_only_severity() {
        let registry = registry_with(vec![rule("a-rule")]);
        let index = DocumentIndex::new("openapi.yaml", "3.0.3");

        let baseline = run(&registry, &index, &LintConfig::default());
        let config = LintConfig::from_yaml("rules:\n  a-rule:\n    severity: error\n").unwrap();
        let overridden = run(&registry, &index, &config);

        assert_eq!(baseline.len(), overridden.len());
        assert_eq!(baseline[0].message, overridden[0].message);
        assert_eq!(baseline[0].severity, Severity::Warning);
        assert_eq!(overridden[0].severity, Severity::Error);
    }

    #[test]
    fn disabled_rule_is_skipped() {
        let registry = registry_with(vec![rule("a-rule"), rule("b-rule")]);
        let index = DocumentIndex::new("openapi.yaml", "3.0.3");
        let config = LintConfig::from_yaml("rules:\n  a-rule:\n    enabled: false\n").unwrap();

        let violations = run(&registry, &index, &config);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_id, RuleId::new("b-rule"));
    }

    #[test]
    fn failing_rule_is_isolated() {
        let registry = registry_with(vec![
            rule("healthy-rule"),
            FixedRule {
                id: "broken-rule",
                versions: None,
                fail: true,
            },
        ]);
        let index = DocumentIndex::new("openapi.yaml", "3.0.3");

        let violations = run(&registry, &index, &LintConfig::default());

        assert_eq!(violations.len(), 2);
        let failed: Vec<_> = violations
            .iter()
            .filter(|v| v.message.contains("rule execution failed"))
            .collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].rule_id, RuleId::new("broken-rule"));
        assert_eq!(failed[0].severity, Severity::Error);
    }

    #[test]
    fn bundle_selection_limits_rules() {
        let mut registry = registry_with(vec![rule("a-rule"), rule("b-rule")]);
        registry.define_bundle("minimal", vec![RuleId::new("a-rule")]);
        let index = DocumentIndex::new("openapi.yaml", "3.0.3");
        let config = LintConfig::from_yaml("extends: [minimal]\n").unwrap();

        let violations = run(&registry, &index, &config);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule_id, RuleId::new("a-rule"));
    }

    #[test]
    fn explicit_enable_overrides_bundle_exclusion() {
        let mut registry = registry_with(vec![rule("a-rule"), rule("b-rule")]);
        registry.define_bundle("minimal", vec![RuleId::new("a-rule")]);
        let index = DocumentIndex::new("openapi.yaml", "3.0.3");
        let config = LintConfig::from_yaml(
            "extends: [minimal]\nrules:\n  b-rule:\n    enabled: true\n",
        )
        .unwrap();

        let violations = run(&registry, &index, &config);
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn output_is_sorted_by_position() {
        struct TwoPositions;
        impl Rule for TwoPositions {
            fn id(&self) -> RuleId {
                RuleId::new("two-positions")
            }
            fn name(&self) -> &str {
                "Two Positions"
            }
            fn description(&self) -> &str {
                "Emits out of order"
            }
            fn category(&self) -> Category {
                Category::Style
            }
            fn default_severity(&self) -> Severity {
                Severity::Hint
            }
            fn check(
                &self,
                _index: &DocumentIndex,
                _config: &LintConfig,
            ) -> Result<Vec<Violation>> {
                Ok(vec![
                    Violation::new(self.id(), Severity::Hint, "later", Pos::new(9, 1)),
                    Violation::new(self.id(), Severity::Hint, "earlier", Pos::new(2, 1)),
                ])
            }
        }
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(TwoPositions));
        let index = DocumentIndex::new("openapi.yaml", "3.0.3");

        let violations = run(&registry, &index, &LintConfig::default());
        assert_eq!(violations[0].message, "earlier");
        assert_eq!(violations[1].message, "later");
    }
}
