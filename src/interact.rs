//! Terminal prompt answering for interactive fixes.
//!
//! Collects one answer per prompt of an interactive fix via `dialoguer`.
//! The caller then feeds the answers into
//! [`Fix::set_input`](crate::fix::Fix::set_input) and applies the fix
//! explicitly; nothing here touches the tree.

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::error::{OaslintError, Result};
use crate::fix::{Fix, PromptKind};

/// Convert dialoguer errors to OaslintError.
fn map_dialoguer_err(e: dialoguer::Error) -> OaslintError {
    OaslintError::Io(e.into())
}

/// Ask the user every prompt of a fix, in order.
///
/// Returns an empty vector for an automatic fix without touching the
/// terminal.
pub fn collect_inputs(fix: &dyn Fix, term: &Term) -> Result<Vec<String>> {
    let theme = ColorfulTheme::default();
    let mut answers = Vec::with_capacity(fix.prompts().len());

    for prompt in fix.prompts() {
        match &prompt.kind {
            PromptKind::FreeText => {
                let answer: String = Input::<String>::with_theme(&theme)
                    .with_prompt(&prompt.label)
                    .interact_on(term)
                    .map_err(map_dialoguer_err)?;
                answers.push(answer);
            }
            PromptKind::Choice(choices) => {
                let selection = Select::with_theme(&theme)
                    .with_prompt(&prompt.label)
                    .items(choices)
                    .default(0)
                    .interact_on(term)
                    .map_err(map_dialoguer_err)?;
                answers.push(choices[selection].clone());
            }
        }
    }

    Ok(answers)
}
