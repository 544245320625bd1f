//! CLI Module
//!
//! Command-line interface for MateApps using Clap v4.

mod commands;
mod ui;

use crate::config::Config;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

/// MateApps - navigation shell for the MateApps mini-applications
#[derive(Parser, Debug)]
#[command(name = "mateapps")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug mode (writes log files to ~/.mateapps/logs/)
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive shell (default)
    Run {
        /// App to show first (espressioni, termometro, mcmmcd, sudoku)
        #[arg(short, long)]
        app: Option<String>,

        /// Disable interaction sounds
        #[arg(long)]
        mute: bool,
    },

    /// List the available apps
    List,

    /// Show the effective configuration
    Config,
}

/// Load configuration from `--config` or the standard locations
fn load_config(path: Option<&str>) -> Result<Config> {
    let config = match path {
        Some(p) => Config::load_from_path(p),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Main CLI entry point
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    // Held until exit so buffered log lines reach the file
    let _log_guard = crate::logging::init(&config.logging, cli.debug)?;
    if cli.debug {
        tracing::info!("Debug mode enabled");
    }

    match cli.command {
        None => ui::cmd_run(config, None, false).await,
        Some(Commands::Run { app, mute }) => ui::cmd_run(config, app, mute).await,
        Some(Commands::List) => commands::cmd_list(&config),
        Some(Commands::Config) => commands::cmd_config(&config),
    }
}
