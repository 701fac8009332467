//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{PrereqError, Result};

use super::{Prompt, PromptResult};

fn map_dialoguer_err(e: dialoguer::Error) -> PrereqError {
    PrereqError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user on a terminal.
///
/// Empty answers are returned as-is so callers can explain what they need.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let theme = prompt_theme();
    let answer: String = Input::<String>::with_theme(&theme)
        .with_prompt(&prompt.question)
        .allow_empty(true)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::String(answer))
}
