use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// K-nearest-neighbor classification with leave-one-out validation.
#[derive(Parser)]
#[command(
    name = "loocv",
    version,
    about = "K-nearest-neighbor classification with leave-one-out validation"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Classify every instance against the rest and report accuracy.
    Evaluate(EvaluateArgs),
    /// Load a dataset and report its statistics.
    Describe(DescribeArgs),
}

/// Dataset selection shared by every subcommand.
#[derive(clap::Args)]
pub struct DatasetArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the ARFF dataset path from config.
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// Override the class attribute name (default: last attribute).
    #[arg(long = "class-attribute")]
    pub class_attribute: Option<String>,
}

/// Arguments for the `evaluate` subcommand.
#[derive(clap::Args)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub source: DatasetArgs,

    /// Override the neighbor count from config.
    #[arg(short)]
    pub k: Option<usize>,

    /// Override the distance measure (euclidean, manhattan, chebyshev, canberra).
    #[arg(long)]
    pub distance: Option<String>,

    /// Classify held-out instances on the rayon thread pool.
    #[arg(long)]
    pub parallel: bool,

    /// Print the run report as JSON on stdout.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `describe` subcommand.
#[derive(clap::Args)]
pub struct DescribeArgs {
    #[command(flatten)]
    pub source: DatasetArgs,
}
