use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;
use tracing::info;

use crate::align::{align_with, AlignmentStats};
use crate::cli::{CostSource, OutputFormat};
use crate::core::alignment::AlignmentResult;
use crate::core::sequence::Sequence;
use crate::core::types::AlignMethod;
use crate::parsing::{parse_sequence_file, ParseOptions};
use crate::utils::validation::validate_sequence;

#[derive(Args)]
pub struct AlignArgs {
    /// First sequence (FASTA, gzipped FASTA, or raw text). Use '-' for stdin
    #[arg(required = true)]
    pub input_a: PathBuf,

    /// Second sequence (FASTA, gzipped FASTA, or raw text)
    #[arg(required = true)]
    pub input_b: PathBuf,

    #[command(flatten)]
    pub source: CostSource,

    /// Alignment algorithm
    #[arg(long, value_enum, default_value = "hirschberg")]
    pub method: AlignMethod,

    /// Wrap text output at this many columns (0 disables wrapping)
    #[arg(short, long, default_value = "60")]
    pub width: usize,

    /// Report recursion and memory counters
    #[arg(long)]
    pub stats: bool,

    /// Keep the case of input symbols instead of upper-casing them
    #[arg(long)]
    pub preserve_case: bool,
}

/// Everything needed to report one alignment
struct Report<'a> {
    seq_a: &'a Sequence,
    seq_b: &'a Sequence,
    costs_name: &'a str,
    method: AlignMethod,
    result: &'a AlignmentResult,
    stats: Option<&'a AlignmentStats>,
    elapsed: Duration,
}

/// Execute align subcommand
///
/// # Errors
///
/// Returns an error if an input cannot be parsed, the cost configuration is
/// invalid, or a symbol is not covered by the cost model.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AlignArgs, format: OutputFormat) -> anyhow::Result<()> {
    if args.input_a.as_os_str() == "-" && args.input_b.as_os_str() == "-" {
        anyhow::bail!("Only one input can be read from stdin");
    }

    let options = ParseOptions {
        uppercase: !args.preserve_case,
    };
    let seq_a = parse_sequence_file(&args.input_a, options)?;
    let seq_b = parse_sequence_file(&args.input_b, options)?;

    let config = args.source.load()?;
    let model = config.to_model()?;

    validate_sequence(&seq_a.name, &seq_a.symbols, &model)?;
    validate_sequence(&seq_b.name, &seq_b.symbols, &model)?;

    info!(
        "Aligning {} ({} symbols) against {} ({} symbols) with {} costs",
        seq_a.name,
        seq_a.len(),
        seq_b.name,
        seq_b.len(),
        config.name
    );

    let start = Instant::now();
    let (result, stats) = align_with(args.method, &seq_a.symbols, &seq_b.symbols, &model)?;
    let elapsed = start.elapsed();

    info!(
        cost = result.cost,
        columns = result.len(),
        "Alignment finished in {:.3}s",
        elapsed.as_secs_f64()
    );

    let report = Report {
        seq_a: &seq_a,
        seq_b: &seq_b,
        costs_name: &config.name,
        method: args.method,
        result: &result,
        stats: args.stats.then_some(&stats),
        elapsed,
    };

    match format {
        OutputFormat::Text => print_text(&report, args.width),
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Tsv => print_tsv(&report),
    }

    Ok(())
}

/// Rows of the alignment text block, wrapped at `width` columns
fn alignment_blocks(result: &AlignmentResult, width: usize) -> Vec<[String; 3]> {
    let top = result.aligned_a_str();
    let middle = result.marker_line();
    let bottom = result.aligned_b_str();

    if width == 0 || result.len() <= width {
        return vec![[top, middle, bottom]];
    }

    // All three rows are one byte per column.
    (0..result.len())
        .step_by(width)
        .map(|start| {
            let end = (start + width).min(result.len());
            [
                top[start..end].to_string(),
                middle[start..end].to_string(),
                bottom[start..end].to_string(),
            ]
        })
        .collect()
}

fn print_text(report: &Report<'_>, width: usize) {
    let result = report.result;
    let counts = result.counts();

    println!("Alignment Results");
    println!("{}", "=".repeat(60));

    println!("\nSequence A: {} ({} symbols)", report.seq_a.name, report.seq_a.len());
    println!("Sequence B: {} ({} symbols)", report.seq_b.name, report.seq_b.len());
    println!("Costs:      {}", report.costs_name);
    println!("Method:     {}", report.method);

    println!("\nCost: {}", result.cost);
    println!(
        "Columns: {} (identities {}, substitutions {}, deletions {}, insertions {})",
        result.len(),
        counts.identities,
        counts.substitutions,
        counts.deletions,
        counts.insertions
    );
    println!("Identity: {:.2}%", counts.identity_fraction() * 100.0);
    println!("Time: {:.6}s", report.elapsed.as_secs_f64());

    if let Some(stats) = report.stats {
        println!("\nStatistics:");
        println!("  Cost sweeps:        {}", stats.sweeps);
        println!("  Base cases:         {}", stats.base_cases);
        println!("  Max depth:          {}", stats.max_depth);
        println!("  Peak row cells:     {}", stats.peak_row_cells);
        println!("  Peak base cells:    {}", stats.peak_base_cells);
    }

    for [top, middle, bottom] in alignment_blocks(result, width) {
        println!();
        println!("{top}");
        println!("{middle}");
        println!("{bottom}");
    }
}

fn print_json(report: &Report<'_>) -> anyhow::Result<()> {
    let result = report.result;
    let mut output = serde_json::json!({
        "sequence_a": {
            "name": report.seq_a.name,
            "length": report.seq_a.len(),
            "md5": report.seq_a.md5(),
        },
        "sequence_b": {
            "name": report.seq_b.name,
            "length": report.seq_b.len(),
            "md5": report.seq_b.md5(),
        },
        "costs": report.costs_name,
        "method": report.method,
        "cost": result.cost,
        "aligned_a": result.aligned_a_str(),
        "aligned_b": result.aligned_b_str(),
        "counts": result.counts(),
        "identity": result.counts().identity_fraction(),
        "elapsed_seconds": report.elapsed.as_secs_f64(),
    });

    if let Some(stats) = report.stats {
        output["stats"] = serde_json::to_value(stats)?;
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(report: &Report<'_>) {
    let result = report.result;
    println!("name_a\tname_b\tmethod\tcost\tcolumns\tidentity\taligned_a\taligned_b");
    println!(
        "{}\t{}\t{}\t{}\t{}\t{:.4}\t{}\t{}",
        report.seq_a.name,
        report.seq_b.name,
        report.method,
        result.cost,
        result.len(),
        result.counts().identity_fraction(),
        result.aligned_a_str(),
        result.aligned_b_str(),
    );
}
