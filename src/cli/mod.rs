//! Command-line parsing for the vocd-D estimator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the estimation code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "vocd", version, about = "Lexical diversity (vocd-D) estimator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate D for each input text and print per-trial diagnostics.
    Estimate(EstimateArgs),
    /// Build and print one observation table per text (no D search).
    Observe(InputArgs),
}

/// Input texts plus sampling options shared by all commands.
#[derive(Debug, Args, Clone)]
pub struct InputArgs {
    /// Text files to analyze ('-' reads stdin).
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Analyze the bundled demo passage.
    #[arg(long)]
    pub demo: bool,

    /// Smallest sample size N.
    #[arg(long, env = "VOCD_FROM", default_value_t = 35)]
    pub from: usize,

    /// Largest sample size N (inclusive).
    #[arg(long, env = "VOCD_TO", default_value_t = 50)]
    pub to: usize,

    /// Increment between sample sizes.
    #[arg(long, env = "VOCD_STEP", default_value_t = 1)]
    pub step: usize,

    /// Requested segments per sample size (accepted for compatibility; 100 are always drawn).
    #[arg(long, default_value_t = 100)]
    pub samples: usize,

    /// Random seed; each text derives its own generator from it.
    #[arg(long, env = "VOCD_SEED", default_value_t = 42)]
    pub seed: u64,
}

/// Options for `vocd estimate`.
#[derive(Debug, Args, Clone)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print every trial's observation table.
    #[arg(long)]
    pub observations: bool,

    /// Export the full run to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,

    /// Export all observations to CSV.
    #[arg(long = "export-csv", value_name = "CSV")]
    pub export_csv: Option<PathBuf>,
}
