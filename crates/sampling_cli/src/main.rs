//! Sampling CLI - Command Line Front End for sampling_core
//!
//! # Commands
//!
//! - `sampling demo` - Run every sampler on a fixed population and groups
//! - `sampling systematic -p 0..100 -s 10 -t 5` - Systematic sample
//! - `sampling simple -p a,b,c -t 5` - Simple random sample with replacement
//! - `sampling stratified -g 0..100 -g a,b,c -t 5` - Stratified sample
//!
//! # Configuration
//!
//! Settings are read from `sampling.toml` (see `--config`) and may be
//! overridden by `SAMPLING_MODE` and `SAMPLING_LOG_LEVEL`. `RUST_LOG` takes
//! precedence over the configured log level.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sampling_core::rng::{RandomMode, RandomSource};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;
mod population;

use config::CliConfig;
pub use error::{CliError, Result};

/// Statistical sampling over in-memory populations
#[derive(Parser)]
#[command(name = "sampling")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "sampling.toml")]
    config: PathBuf,

    /// Use the operating system's cryptographically secure generator
    #[arg(long, global = true)]
    strong: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every sampler on 0..100 and the groups a,b,c and x,y
    Demo,

    /// Take every `step`-th item from a random starting offset
    Systematic {
        /// Population: a range such as 0..100 or a list such as a,b,c
        #[arg(short, long)]
        population: String,

        /// Stride between picked items
        #[arg(short, long)]
        step: usize,

        /// Sample size
        #[arg(short, long)]
        till: usize,
    },

    /// Draw items uniformly with replacement
    Simple {
        /// Population: a range such as 0..100 or a list such as a,b,c
        #[arg(short, long)]
        population: String,

        /// Sample size
        #[arg(short, long)]
        till: usize,
    },

    /// Sample each group in proportion to its size
    Stratified {
        /// A group (repeat for each group): a range or a comma-separated list
        #[arg(short = 'g', long = "group", required = true)]
        groups: Vec<String>,

        /// Sample size
        #[arg(short, long)]
        till: usize,
    },
}

fn init_tracing(config: &CliConfig, verbose: bool) -> Result<()> {
    let directive = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directive).map_err(|e| CliError::Logging(e.to_string()))?,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_with_env_and_validate(&cli.config)?;
    init_tracing(&config, cli.verbose)?;

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "Loaded configuration");

    let mode = if cli.strong {
        RandomMode::Cryptographic
    } else {
        config.mode
    };
    let mut rng = RandomSource::with_mode(mode);

    match cli.command {
        Commands::Demo => commands::demo::run(),
        Commands::Systematic {
            population,
            step,
            till,
        } => commands::sample::systematic(&mut rng, &population, step, till),
        Commands::Simple { population, till } => {
            commands::sample::simple(&mut rng, &population, till)
        }
        Commands::Stratified { groups, till } => {
            commands::sample::stratified(&mut rng, &groups, till)
        }
    }
}
