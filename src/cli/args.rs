use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "habits")]
#[command(about = "Track daily habits and keep your streaks going")]
#[command(long_about = "habits - a daily habit tracker

Create habits, mark them done each day, and watch your streaks grow.
Data is kept in ~/.habits/ (override with HABITS_HOME).

QUICK START:
  habits add \"Read 20 pages\"   Create a habit
  habits done read             Mark it done for today (run again to undo)
  habits                       Show all habits with streaks
  habits stats read            Detailed statistics for one habit

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from config.yaml.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug)
    ///
    /// Logs go to stderr. `HABITS_LOG` takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List habits with today's state and streaks
    ///
    /// This is the default when no command is given.
    ///
    /// # Examples
    ///
    ///   habits
    ///   habits ls -o json
    #[command(alias = "ls")]
    List,

    /// Create a new habit
    ///
    /// # Examples
    ///
    ///   habits add Meditate
    ///   habits add "Read 20 pages"
    #[command(alias = "a")]
    Add(AddArgs),

    /// Toggle today's completion for a habit
    ///
    /// Marks the habit done for today, or unmarks it if already done.
    /// Only today's date can be changed.
    ///
    /// # Examples
    ///
    ///   habits done read
    ///   habits t 1718000000000
    #[command(alias = "toggle", alias = "t")]
    Done(HabitArgs),

    /// Delete a habit and its history
    ///
    /// # Examples
    ///
    ///   habits delete read
    ///   habits rm read --yes
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Show detailed statistics
    ///
    /// Without a habit, shows statistics for every habit.
    Stats(StatsArgs),

    /// Generate shell completion scripts
    ///
    /// # Examples
    ///
    ///   habits completions bash > ~/.local/share/bash-completion/completions/habits
    Completions(CompletionsArgs),
}

/// Arguments for creating a habit.
#[derive(Args)]
pub struct AddArgs {
    /// Habit name (multiple words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub name: Vec<String>,
}

/// A habit selector.
#[derive(Args)]
pub struct HabitArgs {
    /// Habit id or name (case-insensitive)
    pub habit: String,
}

/// Arguments for deleting a habit.
#[derive(Args)]
pub struct DeleteArgs {
    /// Habit id or name (case-insensitive)
    pub habit: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for statistics.
#[derive(Args)]
pub struct StatsArgs {
    /// Habit id or name; all habits when omitted
    pub habit: Option<String>,
}

/// Arguments for shell completions.
#[derive(Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,

    /// Print installation instructions instead of the script
    #[arg(long)]
    pub instructions: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_is_list() {
        let cli = Cli::try_parse_from(["habits"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.output.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_list_alias() {
        let cli = Cli::try_parse_from(["habits", "ls"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn test_cli_add_joins_words() {
        let cli = Cli::try_parse_from(["habits", "add", "Read", "20", "pages"]).unwrap();
        if let Some(Commands::Add(args)) = cli.command {
            assert_eq!(args.name.join(" "), "Read 20 pages");
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn test_cli_add_requires_name() {
        assert!(Cli::try_parse_from(["habits", "add"]).is_err());
    }

    #[test]
    fn test_cli_done_aliases() {
        for alias in ["done", "toggle", "t"] {
            let cli = Cli::try_parse_from(["habits", alias, "read"]).unwrap();
            if let Some(Commands::Done(args)) = cli.command {
                assert_eq!(args.habit, "read");
            } else {
                panic!("Expected Done command for alias {alias}");
            }
        }
    }

    #[test]
    fn test_cli_delete_yes() {
        let cli = Cli::try_parse_from(["habits", "rm", "read", "-y"]).unwrap();
        if let Some(Commands::Delete(args)) = cli.command {
            assert_eq!(args.habit, "read");
            assert!(args.yes);
        } else {
            panic!("Expected Delete command");
        }
    }

    #[test]
    fn test_cli_stats_optional_habit() {
        let cli = Cli::try_parse_from(["habits", "stats"]).unwrap();
        if let Some(Commands::Stats(args)) = cli.command {
            assert!(args.habit.is_none());
        } else {
            panic!("Expected Stats command");
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::try_parse_from(["habits", "list", "-o", "json", "-vv"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["habits", "completions", "zsh"]).unwrap();
        if let Some(Commands::Completions(args)) = cli.command {
            assert_eq!(args.shell, Shell::Zsh);
            assert!(!args.instructions);
        } else {
            panic!("Expected Completions command");
        }
    }
}
