use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use habits::cli::args::{Cli, Commands};
use habits::cli::commands;
use habits::config::{Config, Paths};
use habits::core::LocalClock;
use habits::storage::{Database, HabitStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    habits::logging::init(cli.verbose);

    // Completions need neither config nor storage.
    if let Some(Commands::Completions(args)) = &cli.command {
        print!("{}", commands::completions(args.shell, args.instructions)?);
        return Ok(());
    }

    let paths = Paths::new()?;
    let config = Config::load_from_path(&paths.config_file)?;
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    paths.ensure_dirs()?;
    let store = HabitStore::new(Database::open_at(&paths.database)?, config.storage.key);
    let clock = LocalClock;

    let output = match cli.command {
        None | Some(Commands::List) => commands::list(&store, &clock, format)?,
        Some(Commands::Add(args)) => commands::add(&store, &clock, &args.name.join(" "), format)?,
        Some(Commands::Done(args)) => commands::done(&store, &clock, &args.habit, format)?,
        Some(Commands::Delete(args)) => commands::delete(
            &store,
            &args.habit,
            args.yes,
            &mut commands::confirm_on_terminal,
            format,
        )?,
        Some(Commands::Stats(args)) => {
            commands::stats(&store, &clock, args.habit.as_deref(), format)?
        },
        Some(Commands::Completions(_)) => String::new(),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
