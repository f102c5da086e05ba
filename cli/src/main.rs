//! bankctl - entry point
//!
//! CLI-based entry point that dispatches to the individual commands.

mod args;
mod commands;

use clap::Parser;

use args::{Cli, Commands};
use common::{init_tracing, AppConfig};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::from_env();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose, &config.log_filter);
    tracing::debug!(?config, "Configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::Locate(args) => commands::locate::execute(args, &config).await,
        Commands::Calc(args) => commands::calc::execute(args),
        Commands::Transact(args) => commands::transact::execute(args, &config),
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
