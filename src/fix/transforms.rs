//! Concrete fix implementations.
//!
//! Fixes here are composed from small building blocks rather than deep
//! hierarchies: [`ScalarRewriteFix`] is a generic scalar text transform
//! parameterized by a pure function, [`InsertFieldFix`] a generic object
//! field insertion. The interactive fixes embed
//! [`InputState`](super::InputState) for their prompt state machine.

use serde_json::Value;

use super::{Fix, InputState, Prompt};
use crate::error::{OaslintError, Result};
use crate::tree::{NodeHandle, NodeKind, SyntaxTree};

/// Automatic, tree-mutating: rewrite one scalar through a pure text
/// transform. Idempotent whenever the transform is.
pub struct ScalarRewriteFix {
    handle: NodeHandle,
    before: String,
    transform: fn(&str) -> String,
    label: String,
}

impl ScalarRewriteFix {
    pub fn new(
        handle: NodeHandle,
        before: impl Into<String>,
        label: impl Into<String>,
        transform: fn(&str) -> String,
    ) -> Self {
        Self {
            handle,
            before: before.into(),
            transform,
            label: label.into(),
        }
    }
}

impl Fix for ScalarRewriteFix {
    fn description(&self) -> String {
        self.label.clone()
    }

    fn apply_node(&mut self, tree: &mut SyntaxTree) -> Result<()> {
        // Stale handle: the node vanished under an earlier fix in the batch.
        let Some(current) = tree.scalar(self.handle).map(str::to_string) else {
            return Ok(());
        };
        let next = (self.transform)(&current);
        if next != current {
            tree.set_scalar(self.handle, next);
        }
        Ok(())
    }

    fn describe_change(&self) -> (String, String) {
        let after = (self.transform)(&self.before);
        if after == self.before {
            (String::new(), String::new())
        } else {
            (self.before.clone(), after)
        }
    }
}

/// Automatic, object-mutating: insert a field into the decoded model at a
/// JSON pointer, if absent. A missing pointer target or an existing field is
/// a no-op.
pub struct InsertFieldFix {
    pointer: String,
    key: String,
    value: Value,
    label: String,
}

impl InsertFieldFix {
    /// `pointer` is an RFC 6901 pointer into the decoded document, e.g.
    /// `/components/schemas/Pet`.
    pub fn new(
        pointer: impl Into<String>,
        key: impl Into<String>,
        value: Value,
        label: impl Into<String>,
    ) -> Self {
        Self {
            pointer: pointer.into(),
            key: key.into(),
            value,
            label: label.into(),
        }
    }
}

impl Fix for InsertFieldFix {
    fn description(&self) -> String {
        self.label.clone()
    }

    fn apply(&mut self, doc: &mut Value) -> Result<()> {
        let Some(target) = doc.pointer_mut(&self.pointer) else {
            return Ok(());
        };
        let Some(object) = target.as_object_mut() else {
            return Ok(());
        };
        if !object.contains_key(&self.key) {
            object.insert(self.key.clone(), self.value.clone());
        }
        Ok(())
    }

    fn describe_change(&self) -> (String, String) {
        (String::new(), format!("{}: {}", self.key, self.value))
    }
}

/// Automatic, tree-mutating: rewrite a 3.0-style `nullable: true` schema to
/// the 3.1 form, removing the `nullable` entry and turning `type: T` into
/// `type: [T, "null"]`. A schema without a `nullable` entry is already
/// correct and stays byte-identical.
pub struct NullableTypeFix {
    schema: NodeHandle,
    type_before: Option<String>,
}

impl NullableTypeFix {
    pub fn new(schema: NodeHandle, type_before: Option<String>) -> Self {
        Self {
            schema,
            type_before,
        }
    }
}

impl Fix for NullableTypeFix {
    fn description(&self) -> String {
        "rewrite 'nullable: true' to a type array including 'null'".to_string()
    }

    fn apply_node(&mut self, tree: &mut SyntaxTree) -> Result<()> {
        if tree.is_stale(self.schema) {
            return Ok(());
        }
        if tree.child(self.schema, "nullable").is_none() {
            return Ok(());
        }
        tree.remove_entry(self.schema, "nullable");

        let Some(type_handle) = tree.child(self.schema, "type") else {
            // No declared type: removing the marker is all there is to do,
            // an untyped 3.1 schema already admits null.
            return Ok(());
        };
        match tree.kind(type_handle) {
            Some(NodeKind::Scalar(_)) => {
                let pos = tree.pos(type_handle).unwrap_or_default();
                let current = tree
                    .scalar(type_handle)
                    .map(str::to_string)
                    .unwrap_or_default();
                let first = tree.alloc(NodeKind::Scalar(current), pos);
                let null = tree.alloc(NodeKind::Scalar("null".to_string()), pos);
                tree.replace_kind(type_handle, NodeKind::Sequence(vec![first, null]));
            }
            Some(NodeKind::Sequence(_)) => {
                let has_null = tree
                    .items(type_handle)
                    .iter()
                    .any(|item| tree.scalar(*item) == Some("null"));
                if !has_null {
                    let pos = tree.pos(type_handle).unwrap_or_default();
                    let null = tree.alloc(NodeKind::Scalar("null".to_string()), pos);
                    tree.push_item(type_handle, null);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn describe_change(&self) -> (String, String) {
        match &self.type_before {
            Some(t) => (
                format!("type: {t}, nullable: true"),
                format!("type: [{t}, \"null\"]"),
            ),
            None => ("nullable: true".to_string(), String::new()),
        }
    }
}

/// Interactive, tree-mutating: add `minimum` and `maximum` bounds to a
/// numeric schema. Two free-text prompts; answers must parse as numbers.
pub struct NumericBoundsFix {
    schema: NodeHandle,
    prompts: Vec<Prompt>,
    input: InputState,
}

impl NumericBoundsFix {
    pub fn new(schema: NodeHandle) -> Self {
        Self {
            schema,
            prompts: vec![Prompt::free_text("minimum"), Prompt::free_text("maximum")],
            input: InputState::default(),
        }
    }
}

impl Fix for NumericBoundsFix {
    fn description(&self) -> String {
        "add minimum/maximum bounds to numeric schema".to_string()
    }

    fn interactive(&self) -> bool {
        true
    }

    fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    fn set_input(&mut self, answers: &[String]) -> Result<()> {
        self.input.set(&self.prompts, answers)?;
        for answer in answers {
            if answer.parse::<f64>().is_err() {
                self.input = InputState::default();
                return Err(OaslintError::contract(format!(
                    "'{answer}' is not a number"
                )));
            }
        }
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.input.ready()
    }

    fn apply_node(&mut self, tree: &mut SyntaxTree) -> Result<()> {
        let answers = self.input.answers()?.to_vec();
        if tree.is_stale(self.schema) {
            return Ok(());
        }
        tree.insert_entry(self.schema, "minimum", NodeKind::Scalar(answers[0].clone()));
        tree.insert_entry(self.schema, "maximum", NodeKind::Scalar(answers[1].clone()));
        Ok(())
    }

    fn describe_change(&self) -> (String, String) {
        match self.input.answers() {
            Ok(answers) => (
                String::new(),
                format!("minimum: {}, maximum: {}", answers[0], answers[1]),
            ),
            Err(_) => (String::new(), String::new()),
        }
    }
}

/// Interactive, object-mutating: set a description supplied by the user on
/// the node at a JSON pointer.
pub struct AddDescriptionFix {
    pointer: String,
    prompts: Vec<Prompt>,
    input: InputState,
}

impl AddDescriptionFix {
    pub fn new(pointer: impl Into<String>) -> Self {
        Self {
            pointer: pointer.into(),
            prompts: vec![Prompt::free_text("description")],
            input: InputState::default(),
        }
    }
}

impl Fix for AddDescriptionFix {
    fn description(&self) -> String {
        "add a description".to_string()
    }

    fn interactive(&self) -> bool {
        true
    }

    fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    fn set_input(&mut self, answers: &[String]) -> Result<()> {
        self.input.set(&self.prompts, answers)
    }

    fn is_ready(&self) -> bool {
        self.input.ready()
    }

    fn apply(&mut self, doc: &mut Value) -> Result<()> {
        let answers = self.input.answers()?.to_vec();
        let Some(target) = doc.pointer_mut(&self.pointer) else {
            return Ok(());
        };
        let Some(object) = target.as_object_mut() else {
            return Ok(());
        };
        if !object.contains_key("description") {
            object.insert("description".to_string(), Value::String(answers[0].clone()));
        }
        Ok(())
    }

    fn describe_change(&self) -> (String, String) {
        match self.input.answers() {
            Ok(answers) => (String::new(), format!("description: {}", answers[0])),
            Err(_) => (String::new(), String::new()),
        }
    }
}

/// Strip every trailing slash from a URL, not just one.
pub fn strip_trailing_slashes(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
