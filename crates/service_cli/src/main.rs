//! Copula CLI - Correlated Growth/Margin Scenario Generation
//!
//! This is the operational entry point for the Gaussian copula engine.
//!
//! # Commands
//!
//! - `copula simulate --out <dir>` - Sample, transform and report
//! - `copula check` - Validate the resolved configuration without sampling
//!
//! # Configuration
//!
//! Parameters resolve from defaults, then `--config <file>` (TOML), then
//! `COPULA_*` environment variables, then command line flags. `RUST_LOG`
//! overrides the configured log level. Logs go to stderr so that stdout
//! carries only the JSON report.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{build_config, CliArgs};

/// Gaussian copula scenario generator for revenue growth and profit margin
#[derive(Parser)]
#[command(name = "copula")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample correlated growth/margin scenarios and write reports
    Simulate {
        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        out: PathBuf,

        #[command(flatten)]
        args: CliArgs,
    },

    /// Validate configuration and print derived model parameters
    Check {
        #[command(flatten)]
        args: CliArgs,
    },
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let args = match &cli.command {
        Commands::Simulate { args, .. } | Commands::Check { args } => args,
    };
    let config = build_config(args)?;

    init_tracing(config.log_level.as_filter_str());
    info!(?config, "Configuration resolved");

    match cli.command {
        Commands::Simulate { out, .. } => {
            let output = commands::simulate::run(&config, &out)?;
            info!(
                files = ?output.files,
                growth_median = output.summary.growth.p50,
                margin_median = output.summary.margin.p50,
                "Reports written"
            );
            println!("{}", serde_json::to_string_pretty(&output.diagnostics)?);
        }
        Commands::Check { .. } => {
            let report = commands::check::run(&config)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
