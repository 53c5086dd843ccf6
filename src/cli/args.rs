//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    completions::CompletionsArgs,
    dataset::DatasetArgs,
    failures::FailuresArgs,
    fleet::FleetArgs,
    metrics::MetricsArgs,
};

#[derive(Parser)]
#[command(name = "fuelgen")]
#[command(author, version, about = "Synthetic naval fuel-quality fixture generator")]
#[command(long_about = "Fabricates synthetic fuel-quality measurements and simulated fuel-pump failure events for a small naval fleet, written out as CSV fixtures.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Seed for the random stream (default: config, then OS entropy)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the monthly fuel-analysis dataset
    Dataset(DatasetArgs),

    /// Simulate a per-pump failure log (renewal process)
    Failures(FailuresArgs),

    /// Show the built-in fleet
    Fleet(FleetArgs),

    /// Show fuel-quality metric ranges and drifts
    Metrics(MetricsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format for the inspection commands
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListFormat {
    /// Markdown table
    #[default]
    Table,
    /// Comma-separated values (for spreadsheets)
    Csv,
    /// JSON format (for programming)
    Json,
}
