//! CLI for resolving Scenarioo base URLs.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use scenarioo_core::config::{self, Settings};
use scenarioo_core::Environment;

use commands::{run_config, run_resolve, run_settings};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "scenarioo")]
#[command(about = "Resolve Scenarioo viewer base URLs and backend configuration", long_about = None)]
pub struct Cli {
    /// Deployment environment, overrides the config file and SCENARIOO_ENV.
    #[arg(long, global = true, value_name = "development|production")]
    pub env: Option<Environment>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the four URL prefixes for the current environment.
    Resolve {
        /// Current absolute URL of the viewer (used for absolute links in production).
        #[arg(long, default_value = "")]
        location: String,
    },

    /// Fetch the backend configuration and print it as JSON.
    Config {
        /// Current absolute URL of the viewer (required in production).
        #[arg(long)]
        location: Option<String>,
    },

    /// Show the settings file path and effective settings.
    Settings,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let settings = effective_settings(config::load_or_init()?, cli.env);
        tracing::debug!("effective settings: {:?}", settings);

        match cli.command {
            CliCommand::Resolve { location } => run_resolve(&settings, &location),
            CliCommand::Config { location } => run_config(&settings, location.as_deref()),
            CliCommand::Settings => run_settings(&settings),
        }
    }
}

/// File settings, then SCENARIOO_ENV, then `--env`.
fn effective_settings(file: Settings, cli_env: Option<Environment>) -> Settings {
    let mut settings = file.with_env_override();
    if let Some(env) = cli_env {
        settings.env = env;
    }
    settings
}

#[cfg(test)]
mod tests;
