//! Fix abstraction.
//!
//! A [`Fix`] is a capability object describing one remediation. Fixes come in
//! two interactivity shapes (automatic and prompt-driven) and mutate either
//! the decoded object model (`apply`) or the concrete syntax tree
//! (`apply_node`); exactly one of the two is meaningful per concrete fix, the
//! other defaults to a safe no-op.
//!
//! # State machine
//!
//! Automatic fixes are ready on creation. Interactive fixes require one
//! answer per prompt, supplied in a single [`Fix::set_input`] call, before
//! they may be applied; applying earlier is a usage-contract error, never a
//! silent partial apply. All fixes are idempotent: applying against an
//! already-correct target leaves the serialized tree byte-identical.

pub mod engine;
pub mod transforms;

use crate::error::{OaslintError, Result};
use crate::tree::SyntaxTree;

/// One question an interactive fix asks before it can be applied.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Short label shown to the user, e.g. `minimum`.
    pub label: String,
    /// What kind of answer is expected.
    pub kind: PromptKind,
}

impl Prompt {
    /// A free-text prompt.
    pub fn free_text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: PromptKind::FreeText,
        }
    }

    /// A prompt answered by picking one of a fixed set of choices.
    pub fn choice(label: impl Into<String>, choices: Vec<String>) -> Self {
        Self {
            label: label.into(),
            kind: PromptKind::Choice(choices),
        }
    }
}

/// The answer shape of a [`Prompt`].
#[derive(Debug, Clone)]
pub enum PromptKind {
    /// Any text.
    FreeText,
    /// One of a fixed set of values.
    Choice(Vec<String>),
}

/// A single remediation, automatic or interactive.
pub trait Fix {
    /// Human-readable description of what applying this fix does.
    fn description(&self) -> String;

    /// Whether this fix requires prompt answers before applying.
    fn interactive(&self) -> bool {
        false
    }

    /// Ordered prompts; empty for automatic fixes.
    fn prompts(&self) -> &[Prompt] {
        &[]
    }

    /// Supply one answer per prompt, all in one call.
    ///
    /// Wrong arity is a usage-contract error and leaves the fix not ready.
    fn set_input(&mut self, _answers: &[String]) -> Result<()> {
        Err(OaslintError::contract("fix takes no input"))
    }

    /// Whether the fix may be applied. Automatic fixes are always ready.
    fn is_ready(&self) -> bool {
        true
    }

    /// Mutate the decoded object model. Safe no-op unless this fix is
    /// object-mutating.
    fn apply(&mut self, _doc: &mut serde_json::Value) -> Result<()> {
        Ok(())
    }

    /// Mutate the concrete syntax tree through the fix's captured handle.
    /// Safe no-op unless this fix is tree-mutating. A handle whose node has
    /// vanished (an earlier fix restructured a shared ancestor) is a silent
    /// no-op by design.
    fn apply_node(&mut self, _tree: &mut SyntaxTree) -> Result<()> {
        Ok(())
    }

    /// `(before, after)` preview of the change, both empty when the fix
    /// would be a no-op. For an interactive fix whose inputs are not yet
    /// set, `after` is empty. Pure read, callable anytime before apply.
    fn describe_change(&self) -> (String, String);
}

/// Prompt-answer storage shared by interactive fixes.
///
/// Concrete interactive fixes embed this and delegate arity checking and the
/// ready/not-ready distinction to it.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    answers: Option<Vec<String>>,
}

impl InputState {
    /// Store answers after validating arity and choice membership.
    pub fn set(&mut self, prompts: &[Prompt], answers: &[String]) -> Result<()> {
        if answers.len() != prompts.len() {
            return Err(OaslintError::contract(format!(
                "expected {} answer(s), got {}",
                prompts.len(),
                answers.len()
            )));
        }
        for (prompt, answer) in prompts.iter().zip(answers) {
            if let PromptKind::Choice(choices) = &prompt.kind {
                if !choices.contains(answer) {
                    return Err(OaslintError::contract(format!(
                        "'{}' is not a valid choice for prompt '{}'",
                        answer, prompt.label
                    )));
                }
            }
        }
        self.answers = Some(answers.to_vec());
        Ok(())
    }

    /// Whether all answers have been supplied.
    pub fn ready(&self) -> bool {
        self.answers.is_some()
    }

    /// The stored answers, or a usage-contract error when not ready.
    pub fn answers(&self) -> Result<&[String]> {
        self.answers.as_deref().ok_or_else(|| {
            OaslintError::contract("fix applied before all prompt inputs were set")
        })
    }
}
