//! Command-line interface for hirschberg-align.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **align**: Align two sequence files and report the cost and alignment
//! - **costs**: Show, export, or validate cost configurations
//!
//! ## Usage
//!
//! ```text
//! # Align two FASTA files with the embedded reference costs
//! hirschberg-align align query.fa target.fa
//!
//! # Use a custom cost table and the quadratic baseline
//! hirschberg-align align a.txt b.txt --costs my_costs.json --method full
//!
//! # JSON output for scripting
//! hirschberg-align align a.fa b.fa --format json --stats
//!
//! # Inspect the built-in tables
//! hirschberg-align costs show --preset unit
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::store::CostConfig;
use crate::config::CostPreset;

pub mod align;
pub mod costs;

#[derive(Parser)]
#[command(name = "hirschberg-align")]
#[command(version)]
#[command(about = "Optimal global pairwise alignment in linear space")]
#[command(
    long_about = "hirschberg-align computes an optimal global alignment of two sequences under a configurable substitution matrix and per-symbol gap costs.\n\nIt uses Hirschberg's divide-and-conquer algorithm, so memory grows linearly with the input rather than with the product of the two lengths."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align two sequences
    Align(align::AlignArgs),

    /// Manage cost configurations
    Costs(costs::CostsArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Where the cost tables come from
#[derive(clap::Args, Clone, Debug)]
pub struct CostSource {
    /// Path to a cost configuration file (JSON); takes precedence over --preset
    #[arg(long)]
    pub costs: Option<PathBuf>,

    /// Built-in cost tables used when no file is given
    #[arg(long, value_enum, default_value = "reference")]
    pub preset: CostPreset,
}

impl CostSource {
    /// Load the selected configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed.
    pub fn load(&self) -> anyhow::Result<CostConfig> {
        match &self.costs {
            Some(path) => Ok(CostConfig::load_from_file(path)?),
            None => Ok(self.preset.config()?),
        }
    }
}
