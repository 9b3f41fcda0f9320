//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tardisim")]
#[command(version)]
#[command(about = "Estimate tardigrade survival from temperature, humidity and radiation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to project configuration file
    #[arg(short, long, global = true, default_value = "tardisim.toml")]
    pub config: PathBuf,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score the inputs, sample the distribution, and print the full report
    Run {
        #[command(flatten)]
        inputs: InputArgs,

        #[command(flatten)]
        sampling: SamplingArgs,

        /// Number of histogram bins
        #[arg(long)]
        bins: Option<usize>,

        /// Width of the longest chart bar
        #[arg(long)]
        width: Option<usize>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Score the inputs only
    Score {
        #[command(flatten)]
        inputs: InputArgs,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Sample the probability distribution only
    Sample {
        #[command(flatten)]
        sampling: SamplingArgs,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Configuration helpers
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Validate the configuration file
    Validate,

    /// Show example configuration
    Example,
}

/// Environmental inputs. Out-of-range values are clamped with a warning.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Temperature in °C, -150 to 150 (default 25)
    #[arg(short, long, allow_negative_numbers = true)]
    pub temperature: Option<f64>,

    /// Relative humidity in %, 0 to 100 (default 50)
    #[arg(short = 'u', long, allow_negative_numbers = true)]
    pub humidity: Option<f64>,

    /// Radiation in %, 0 to 100 (default 10)
    #[arg(short, long, allow_negative_numbers = true)]
    pub radiation: Option<f64>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct SamplingArgs {
    /// Number of Monte-Carlo samples (default 1000)
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Seed for a reproducible run
    #[arg(short, long)]
    pub seed: Option<u64>,
}
