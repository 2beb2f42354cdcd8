use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::defaults;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable summary
    Pretty,
    /// Machine readable JSON
    Json,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Organism preset (e-coli, human, yeast)
    ///
    /// Defaults to E. coli unless a configuration file is given.
    #[arg(short, long, conflicts_with = "config")]
    pub organism: Option<String>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Length of a random template
    #[arg(
        short,
        long,
        conflicts_with_all = ["sequence", "fasta"],
        default_value_t = defaults::SEQUENCE_LENGTH
    )]
    pub length: usize,

    /// Template sequence (A/C/G/T)
    #[arg(long, conflicts_with = "fasta")]
    pub sequence: Option<String>,

    /// Read the template from the first record of a FASTA file
    #[arg(long)]
    pub fasta: Option<PathBuf>,

    /// Random seed (overrides the configuration)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum number of fork steps (overrides the configuration)
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Bases unwound per step (default: 1% of the template)
    #[arg(long)]
    pub step_size: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Write the event history to this file (.csv for CSV, JSON otherwise)
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,
}
