//! Command-Line Interface

use crate::resample::PolicyKind;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Choreo Lab - Analyze capture logs and export choreography CSVs
#[derive(Parser, Debug)]
#[command(name = "choreo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a capture log against the configured limits
    Analyze {
        /// Input log file
        input: PathBuf,
    },

    /// Export a single log as CSV
    Export {
        /// Input log file
        input: PathBuf,

        /// Resampling policy
        #[arg(short, long)]
        policy: Option<PolicyArg>,

        /// Target rate for the rate-floor policy (frames per second)
        #[arg(short, long)]
        rate: Option<f64>,

        /// Output file (defaults to the input name with .csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Merge several logs into the full choreography CSV
    Merge {
        /// Mapping file (JSON array of {file, modules} entries)
        #[arg(short, long)]
        mapping: PathBuf,

        /// Input log files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output file (defaults to full_choreography.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse a log and save the session as JSON
    Parse {
        /// Input log file
        input: PathBuf,

        /// Output session file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Resampling policy CLI argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Halve the rate by averaging adjacent sample pairs
    PairAveraging,
    /// Convert to the target rate by nearest-floor lookup
    RateFloor,
}

impl From<PolicyArg> for PolicyKind {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::PairAveraging => PolicyKind::PairAveraging,
            PolicyArg::RateFloor => PolicyKind::RateFloor,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
