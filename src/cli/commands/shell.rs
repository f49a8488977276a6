//! Shell completions command.

use clap_complete::Shell;

use crate::error::HabitsError;
use crate::features::shell::{completion_install_instructions, generate_completions};

/// Execute completions command.
///
/// # Errors
///
/// Returns an error if the completion script cannot be generated.
pub fn completions(shell: Shell, instructions: bool) -> Result<String, HabitsError> {
    if instructions {
        return Ok(completion_install_instructions(shell));
    }
    generate_completions(shell)
}
