use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use tracing::info;

use crate::cli::{CostSource, OutputFormat};
use crate::config::store::CostConfig;
use crate::core::cost_model::CostModel;

#[derive(Args)]
pub struct CostsArgs {
    #[command(subcommand)]
    pub command: CostsCommands,
}

#[derive(Subcommand)]
pub enum CostsCommands {
    /// Show gap costs and the substitution matrix
    Show {
        #[command(flatten)]
        source: CostSource,
    },

    /// Export a cost configuration to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        #[command(flatten)]
        source: CostSource,
    },

    /// Check that a cost configuration file is complete
    Validate {
        /// Cost configuration file (JSON)
        #[arg(required = true)]
        path: PathBuf,
    },
}

/// Execute costs subcommand
///
/// # Errors
///
/// Returns an error if a configuration cannot be loaded, is incomplete, or
/// the output cannot be written.
pub fn run(args: CostsArgs, format: OutputFormat) -> anyhow::Result<()> {
    match args.command {
        CostsCommands::Show { source } => run_show(&source, format),
        CostsCommands::Export { output, source } => run_export(&output, &source),
        CostsCommands::Validate { path } => run_validate(&path),
    }
}

fn run_show(source: &CostSource, format: OutputFormat) -> anyhow::Result<()> {
    let config = source.load()?;
    let model = config.to_model()?;

    match format {
        OutputFormat::Text => print_text_tables(&config.name, &model),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&CostConfig::from_model(&config.name, &model))?
            );
        }
        OutputFormat::Tsv => print_tsv_tables(&model),
    }

    Ok(())
}

fn print_text_tables(name: &str, model: &CostModel) {
    let alphabet = model.alphabet();
    let gap = model.gap_table();
    let substitution = model.substitution_table();

    println!("Cost model: {name}");
    println!("Alphabet:   {}", String::from_utf8_lossy(alphabet));
    println!("Symmetric:  {}", model.is_symmetric());

    println!("\nGap costs:");
    for &s in alphabet {
        println!("  {}  {:>6}", char::from(s), gap[&s]);
    }

    println!("\nSubstitution costs (row = first sequence, column = second):");
    let header: String = alphabet
        .iter()
        .map(|&b| format!("{:>6}", char::from(b)))
        .collect();
    println!("   {header}");
    for &a in alphabet {
        let row: String = alphabet
            .iter()
            .map(|b| format!("{:>6}", substitution[&a][b]))
            .collect();
        println!("  {}{row}", char::from(a));
    }
}

fn print_tsv_tables(model: &CostModel) {
    let gap = model.gap_table();
    println!("first\tsecond\tcost");
    for &a in model.alphabet() {
        println!("{}\t-\t{}", char::from(a), gap[&a]);
    }
    for (a, row) in model.substitution_table() {
        for (b, cost) in row {
            println!("{}\t{}\t{cost}", char::from(a), char::from(b));
        }
    }
}

fn run_export(output: &Path, source: &CostSource) -> anyhow::Result<()> {
    let config = source.load()?;
    // Round-trip through the model so only complete tables are exported.
    let model = config.to_model()?;

    let json = CostConfig::from_model(&config.name, &model).to_json()?;
    std::fs::write(output, json)?;

    println!(
        "Exported cost model '{}' ({} symbols) to {}",
        config.name,
        model.alphabet().len(),
        output.display()
    );

    Ok(())
}

fn run_validate(path: &Path) -> anyhow::Result<()> {
    let config = CostConfig::load_from_file(path)?;
    let model = config.to_model()?;
    info!("Loaded cost configuration {}", path.display());

    println!(
        "OK: '{}' defines {} symbols ({}), {}",
        config.name,
        model.alphabet().len(),
        String::from_utf8_lossy(model.alphabet()),
        if model.is_symmetric() {
            "symmetric"
        } else {
            "asymmetric"
        }
    );

    Ok(())
}
