//! oaslint - lint and auto-fix engine for OpenAPI-shaped documents.
//!
//! Given a caller-built [`DocumentIndex`](index::DocumentIndex) and a
//! position-tracked [`SyntaxTree`](tree::SyntaxTree), oaslint runs a catalog
//! of pluggable rules and offers automatic and interactive fixes that mutate
//! the tree (or the decoded object model) in place.
//!
//! # Modules
//!
//! - [`config`] - Per-rule settings, bundles, and resolve pass-through
//! - [`error`] - Error types and result alias
//! - [`fix`] - Fix contract, concrete fixes, and the batch engine
//! - [`index`] - Read-only document catalogs consumed by rules
//! - [`interact`] - Terminal prompt answering for interactive fixes
//! - [`output`] - Human and JSON report formatters
//! - [`reachability`] - Used/orphaned component analysis
//! - [`registry`] - Explicit rule registry and named bundles
//! - [`rule`] - Rule trait, ids, categories, severities
//! - [`rules`] - Built-in rules
//! - [`runner`] - Catalog execution with gating and failure isolation
//! - [`tree`] - Mutable syntax tree with stable node handles
//! - [`violation`] - The violation record and its stable rendering
//!
//! # Example
//!
//! ```
//! use oaslint::{LintConfig, RuleRegistry};
//! use oaslint::index::DocumentIndex;
//!
//! let registry = RuleRegistry::with_builtins();
//! let index = DocumentIndex::new("openapi.yaml", "3.0.3");
//! let violations = oaslint::run(&registry, &index, &LintConfig::default());
//! // An empty document has nothing to flag.
//! assert!(violations.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod fix;
pub mod index;
pub mod interact;
pub mod output;
pub mod reachability;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod runner;
pub mod tree;
pub mod violation;

pub use config::{LintConfig, ResolveOptions, RuleSettings};
pub use error::{OaslintError, Result};
pub use fix::engine::{FixEngine, FixOutcome};
pub use fix::{Fix, InputState, Prompt, PromptKind};
pub use registry::RuleRegistry;
pub use rule::{Category, Rule, RuleId, Severity};
pub use runner::run;
pub use violation::Violation;
