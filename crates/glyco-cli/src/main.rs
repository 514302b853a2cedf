//! Glyco CLI - diabetes risk intake from the command line.

mod commands;
mod config;
mod input;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::input::VitalsArgs;

#[derive(Parser)]
#[command(name = "glyco")]
#[command(author, version, about = "Glyco - Diabetes risk intake", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default glyco.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Predict diabetes risk and explain it
    Assess {
        #[command(flatten)]
        vitals: VitalsArgs,

        /// Skip the remote predictor and use the local estimate
        #[arg(long)]
        offline: bool,

        /// Reject vitals outside the accepted input ranges
        #[arg(long)]
        strict: bool,

        /// Print the assessment as JSON
        #[arg(long)]
        json: bool,
    },

    /// List risk and positive factors without predicting
    Factors {
        #[command(flatten)]
        vitals: VitalsArgs,

        /// Print the factors as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether the remote predictor is reachable
    Health {
        /// Keep polling and report every change
        #[arg(short, long)]
        watch: bool,
    },

    /// Show the model and its accepted input ranges
    Info {
        /// Show local input ranges without contacting the predictor
        #[arg(long)]
        local: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Assess {
            vitals,
            offline,
            strict,
            json,
        } => commands::assess::run(&vitals, offline, strict, json).await,
        Commands::Factors { vitals, json } => commands::factors::run(&vitals, json),
        Commands::Health { watch } => commands::health::run(watch).await,
        Commands::Info { local } => commands::info::run(local).await,
    }
}
