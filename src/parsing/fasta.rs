//! Parser for FASTA files using noodles.
//!
//! Every record of the file contributes its sequence, in file order, to one
//! concatenated sequence named after the first record.
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::debug;

use crate::core::sequence::Sequence;
use crate::parsing::{ParseError, ParseOptions};
use crate::utils::validation::MAX_SEQUENCE_LENGTH;

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    // Check for uncompressed FASTA
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Parse a FASTA file into one sequence.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, `ParseError::Empty` if no records are found, or
/// `ParseError::TooLong` if the concatenated sequence exceeds the limit.
pub fn parse_fasta_file(path: &Path, options: ParseOptions) -> Result<Sequence, ParseError> {
    let file = std::fs::File::open(path)?;
    let label = path.display().to_string();

    if is_gzipped(path) {
        // bgzip is a series of gzip members, so a multi-member decoder reads both.
        let reader = BufReader::new(MultiGzDecoder::new(file));
        parse_fasta_reader(&mut fasta::io::Reader::new(reader), &label, options)
    } else {
        let reader = BufReader::new(file);
        parse_fasta_reader(&mut fasta::io::Reader::new(reader), &label, options)
    }
}

/// Parse from a noodles FASTA reader
fn parse_fasta_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
    label: &str,
    options: ParseOptions,
) -> Result<Sequence, ParseError> {
    let mut name: Option<String> = None;
    let mut symbols = Vec::new();
    let mut records = 0usize;

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let sequence = record.sequence().as_ref();
        if symbols.len() + sequence.len() > MAX_SEQUENCE_LENGTH {
            return Err(ParseError::TooLong(MAX_SEQUENCE_LENGTH));
        }

        if name.is_none() {
            name = Some(String::from_utf8_lossy(record.name()).to_string());
        }
        symbols.extend_from_slice(sequence);
        records += 1;
    }

    let Some(name) = name else {
        return Err(ParseError::Empty(label.to_string()));
    };
    if records > 1 {
        debug!(records, symbols = symbols.len(), "concatenated FASTA records from {label}");
    }

    options.apply(&mut symbols);
    Ok(Sequence::new(name, symbols))
}
