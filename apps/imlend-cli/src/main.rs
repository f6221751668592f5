//! imlend - console library manager
//!
//! Keeps a catalog of books, a registry of users and the loans between them
//! for the length of one session.

mod app;
mod config;
mod error;
mod input;
mod menu;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use imlend_core::Library;
use tracing_subscriber::EnvFilter;

use app::App;
use config::CliConfig;
use error::CliError;
use input::Prompter;

#[derive(Parser, Debug)]
#[command(name = "imlend", version, about = "Manage books, users and loans")]
struct Args {
    /// Config file (defaults to ~/.imlend/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, overrides the config file (RUST_LOG wins over both)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let args = Args::parse();

    let config = match CliConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(2);
        }
    };

    let level = args
        .log_level
        .unwrap_or_else(|| config.logging.level.clone());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut library = Library::new();
    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout(), config.input);

    let result = App::new(&mut library, prompter).run();
    tracing::info!(
        books = library.catalog().len(),
        users = library.registry().len(),
        loans = library.ledger().loan_count(),
        "session ended"
    );

    match result {
        Ok(()) => println!("Goodbye."),
        Err(CliError::InputClosed) => {}
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
