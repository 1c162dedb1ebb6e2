//! User confirmation prompts for destructive operations

use dialoguer::Confirm;

use crate::error::{KestraError, Result};

/// Ask the user to confirm a destructive operation.
///
/// `--yes` skips the prompt entirely. Quiet mode never prompts: without
/// `--yes` the operation fails instead of silently proceeding.
pub fn confirm_action(prompt: &str, assume_yes: bool, quiet: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    if quiet {
        return Err(KestraError::Config(
            "Confirmation required in quiet mode. Re-run with --yes to proceed.".to_string(),
        ));
    }

    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| KestraError::Config(format!("Failed to read confirmation: {}", e)))
}
