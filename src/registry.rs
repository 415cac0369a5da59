//! Rule registry.
//!
//! The [`RuleRegistry`] is an explicitly constructed value passed into the
//! runner, never ambient process-wide state, so tests can build isolated
//! subsets. It also owns named rule bundles; `all` is built in.

use std::collections::HashMap;

use crate::rule::{Rule, RuleId};
use crate::rules::{
    AdditionalPropertiesRule, NullableTypeRule, NumericBoundsRule, OperationDescriptionRule,
    OperationIdRule, ReferenceTargetRule, ResponseContentRule, ServerTrailingSlashRule,
    UnusedComponentRule,
};

/// Registry of available lint rules and named bundles.
pub struct RuleRegistry {
    rules: HashMap<RuleId, Box<dyn Rule>>,
    bundles: HashMap<String, Vec<RuleId>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
            bundles: HashMap::new(),
        }
    }

    /// Create a registry with all built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(UnusedComponentRule));
        registry.register(Box::new(ReferenceTargetRule));
        registry.register(Box::new(ResponseContentRule));
        registry.register(Box::new(ServerTrailingSlashRule));
        registry.register(Box::new(OperationIdRule));
        registry.register(Box::new(OperationDescriptionRule));
        registry.register(Box::new(NullableTypeRule));
        registry.register(Box::new(NumericBoundsRule));
        registry.register(Box::new(AdditionalPropertiesRule));
        registry
    }

    /// Register a lint rule.
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.insert(rule.id(), rule);
    }

    /// Define a named bundle of rule ids.
    pub fn define_bundle(&mut self, name: impl Into<String>, rules: Vec<RuleId>) {
        self.bundles.insert(name.into(), rules);
    }

    /// Resolve a bundle name to rule ids. `all` always resolves to every
    /// registered rule.
    pub fn bundle(&self, name: &str) -> Option<Vec<RuleId>> {
        if name == "all" {
            return Some(self.rules.keys().cloned().collect());
        }
        self.bundles.get(name).cloned()
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn Rule> {
        self.rules.get(id).map(|r| r.as_ref())
    }

    /// Iterate over all rules.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.values().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
