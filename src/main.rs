use std::error::Error;
use std::io;

use clap::Parser;
use tally::cli::commands::Cli;
use tally::cli::handlers;
use tally::io::{config_io, log};
use tally::store::{MemoryStore, SqliteStore};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "exiting with error");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = config_io::load_config(cli.config.as_deref())?;
    log::init_tracing(&config.log);

    if cli.memory {
        let mut store = MemoryStore::new();
        return match cli.command {
            // No subcommand → launch TUI
            None => tally::tui::run(store, &config),
            Some(cmd) => handlers::dispatch(&mut store, cmd, cli.json, &mut io::stdout().lock()),
        };
    }

    let db_path = config_io::resolve_db_path(cli.db.as_deref(), &config)?;
    let mut store = SqliteStore::open(&db_path)?;

    match cli.command {
        None => tally::tui::run(store, &config),
        Some(cmd) => handlers::dispatch(&mut store, cmd, cli.json, &mut io::stdout().lock()),
    }
}
