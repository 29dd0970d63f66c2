//! tallerflow CLI - Repair shop workflow, budgets and service history

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tallerflow::cli::commands;
use tallerflow::cli::{Cli, Commands};
use tallerflow::errors::to_exit_code;
use tallerflow::fs::resolve_data_dir;

fn main() {
    let cli = Cli::parse();

    // Flags override RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> tallerflow::Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref(), None);
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");

    match cli.command {
        Some(Commands::Vehicle { action }) => commands::vehicle::run(&data_dir, action),
        Some(Commands::Budget { action }) => commands::budget::run(&data_dir, action),
        Some(Commands::Rate { action }) => commands::rate::run(&data_dir, action),
        Some(Commands::Method { action }) => commands::method::run(&data_dir, action),
        Some(Commands::History { action }) => commands::history::run(&data_dir, action),
        Some(Commands::Stats { json }) => commands::stats::run(&data_dir, json),
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
