//! Thin wrappers over dialoguer so menu code reads as intent.

use crate::error::CliError;

/// Pick one entry from a menu; returns the selected index.
pub fn select(title: &str, items: &[&str]) -> Result<usize, CliError> {
    Ok(dialoguer::Select::new()
        .with_prompt(title)
        .items(items)
        .default(0)
        .interact()?)
}

pub fn input_text(prompt: &str) -> Result<String, CliError> {
    Ok(dialoguer::Input::<String>::new()
        .with_prompt(prompt)
        .interact_text()?)
}

/// Numeric input. Menus use 0 as "go back" where noted in the prompt.
pub fn input_u32(prompt: &str) -> Result<u32, CliError> {
    Ok(dialoguer::Input::<u32>::new()
        .with_prompt(prompt)
        .interact_text()?)
}

pub fn password(prompt: &str) -> Result<String, CliError> {
    Ok(dialoguer::Password::new().with_prompt(prompt).interact()?)
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    Ok(dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()?)
}
