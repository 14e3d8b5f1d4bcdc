//! Tessera CLI - Command-line interface for Tessera scene checks

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, checks, types};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tessera")]
#[command(about = "Load scenes and report what the scene checks find", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a scene and run the scene checks on it
    Check {
        /// Path to scene file
        scene: String,

        /// Component type catalog (a TOML file or a directory of them)
        #[arg(long, default_value = "types")]
        types: String,

        /// Check selection file
        #[arg(long)]
        config: Option<String>,

        /// Run only this check (repeatable)
        #[arg(long = "only")]
        only: Vec<String>,

        /// Skip this check (repeatable)
        #[arg(long = "disable")]
        disable: Vec<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List the scene checks that would run
    Checks {
        /// Check selection file
        #[arg(long)]
        config: Option<String>,
    },

    /// List registered component types and their aliases
    Types {
        /// Component type catalog (a TOML file or a directory of them)
        #[arg(long, default_value = "types")]
        types: String,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check {
            scene,
            types,
            config,
            only,
            disable,
            format,
        } => check::run(check::CheckArgs {
            scene,
            types,
            config,
            only,
            disable,
            format,
        }),
        Commands::Checks { config } => checks::run(config.as_deref()),
        Commands::Types { types } => types::run(&types),
    }
}
