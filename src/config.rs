//! Lint configuration.
//!
//! [`LintConfig`] carries per-rule settings (enable/disable, severity
//! override), named bundle selection, and pass-through resolve options for
//! the index builder. It deserializes from YAML.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{OaslintError, Result};
use crate::rule::{RuleId, Severity};

/// Per-rule settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    /// Explicit enable/disable; `None` falls back to bundle selection.
    pub enabled: Option<bool>,
    /// Severity override; changes only the severity field of violations,
    /// never their count or messages.
    pub severity: Option<Severity>,
}

/// Options forwarded to the index builder, not interpreted here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Virtual filesystem root for relative reference resolution.
    pub root: Option<PathBuf>,
    /// Refuse to fetch references outside the document set.
    pub disable_external_refs: bool,
}

/// Lint run configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Named rule bundles to activate, e.g. `["all"]`. Empty means every
    /// registered rule is active.
    pub extends: Vec<String>,
    /// Per-rule settings keyed by rule id.
    pub rules: BTreeMap<String, RuleSettings>,
    /// Pass-through options for the index builder.
    pub resolve: ResolveOptions,
}

impl LintConfig {
    /// Parse a config from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|e| OaslintError::ConfigError {
            message: e.to_string(),
        })
    }

    /// Load a config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Explicit enable/disable setting for a rule, if any.
    pub fn enabled(&self, id: &RuleId) -> Option<bool> {
        self.rules.get(&id.0).and_then(|s| s.enabled)
    }

    /// Severity override for a rule, if any.
    pub fn severity_override(&self, id: &RuleId) -> Option<Severity> {
        self.rules.get(&id.0).and_then(|s| s.severity)
    }
}
