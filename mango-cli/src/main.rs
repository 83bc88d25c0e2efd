//! Mango CLI
//!
//! A task manager living in your command line. The first argument selects a
//! subcommand; everything after it is handed to that subcommand's handler
//! through the registry in `mango-core`.

use mango_cli::cli::{register_commands, CliContext};
use mango_cli::config::CliConfig;
use mango_cli::format::OutputFormat;
use mango_cli::store::TaskStore;
use mango_core::{user_db_path, Error, Registry};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    // Arguments, excluding the program name
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Build configuration using priority chain: defaults → file → env
    let config = match build_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.verbose);

    let db_path = config.db_path.clone().unwrap_or_else(user_db_path);
    debug!(path = %db_path.display(), "using task database");

    let output_format = match config.output_format.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let ctx = CliContext::new(TaskStore::new(db_path), output_format);
    let mut registry = Registry::new();
    register_commands(&mut registry, &ctx);

    if args.is_empty() {
        eprint!("usage:{}", registry.usage());
        std::process::exit(2);
    }

    // Execute the selected subcommand; exit-code translation lives only here
    match registry.execute(&args) {
        Ok(()) => {}
        Err(e @ Error::UnknownCommand(_)) => {
            eprintln!("Error: {}", e);
            eprint!("usage:{}", registry.usage());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn build_config() -> anyhow::Result<CliConfig> {
    CliConfig::builder()
        .with_config_file(true)?
        .with_env_overrides()
        .build()
}

/// Route `MANGO_LOG` to the subscriber; verbose mode defaults to debug.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("MANGO_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
