//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, elvish and PowerShell.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::HabitsError;

/// Binary name the completion scripts are registered for.
const BIN_NAME: &str = "habits";

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns `HabitsError::Parse` if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, HabitsError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut buf);
    String::from_utf8(buf).map_err(|e| HabitsError::Parse(format!("UTF-8 error: {e}")))
}

/// Get installation instructions for shell completions.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r"# Add to ~/.bashrc or ~/.bash_profile:
source <(habits completions bash)
"
        .to_string(),

        Shell::Zsh => r"# Save to your fpath:
habits completions zsh > ~/.zsh/completions/_habits
# Then add to ~/.zshrc:
fpath=(~/.zsh/completions $fpath)
autoload -Uz compinit && compinit
"
        .to_string(),

        Shell::Fish => r"# Save to fish completions directory:
habits completions fish > ~/.config/fish/completions/habits.fish
"
        .to_string(),

        Shell::PowerShell => r"# Add to your PowerShell profile ($PROFILE):
habits completions powershell | Out-String | Invoke-Expression
"
        .to_string(),

        Shell::Elvish => r"# Save to elvish completions directory:
habits completions elvish > ~/.elvish/lib/habits.elv
"
        .to_string(),

        _ => "Unknown shell".to_string(),
    }
}
