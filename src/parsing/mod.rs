//! Readers that turn sequence files into [`Sequence`] values.
//!
//! This module provides parsers for:
//!
//! - **FASTA files** (`.fa`, `.fasta`, `.fna`, optionally gzip/bgzip
//!   compressed): all records are concatenated in file order
//! - **Raw text** (any other file, or `-` for stdin): every non-whitespace
//!   character is a symbol; lines starting with `>` are skipped
//!
//! ## Example
//!
//! ```rust,no_run
//! use hirschberg_align::parsing::{parse_sequence_file, ParseOptions};
//! use std::path::Path;
//!
//! let seq = parse_sequence_file(Path::new("query.fa"), ParseOptions::default()).unwrap();
//! println!("{}: {} symbols", seq.name, seq.len());
//! ```

pub mod fasta;
pub mod text;

use std::path::Path;

use thiserror::Error;

use crate::core::sequence::Sequence;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("No sequence found in {0}")]
    Empty(String),

    #[error("Sequence too long: more than {0} symbols")]
    TooLong(usize),
}

/// How symbols are post-processed after reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Upper-case every symbol (FASTA files are often soft-masked)
    pub uppercase: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { uppercase: true }
    }
}

impl ParseOptions {
    pub(crate) fn apply(self, symbols: &mut [u8]) {
        if self.uppercase {
            symbols.make_ascii_uppercase();
        }
    }
}

/// Read one sequence from `path`, choosing the parser from the file name.
///
/// `-` reads raw text from stdin.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles`
/// for malformed FASTA, `ParseError::Empty` if no symbols are found, or
/// `ParseError::TooLong` if the sequence exceeds the length limit.
pub fn parse_sequence_file(path: &Path, options: ParseOptions) -> Result<Sequence, ParseError> {
    if path.as_os_str() == "-" {
        let stdin = std::io::stdin();
        return text::parse_text_reader(stdin.lock(), "stdin", options);
    }

    if fasta::is_fasta_file(path) {
        fasta::parse_fasta_file(path, options)
    } else {
        text::parse_text_file(path, options)
    }
}

/// Name used for a sequence that has no record name of its own
pub(crate) fn name_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    // Strip compression and format extensions.
    let mut stem = name.as_str();
    for ext in [".gz", ".bgz", ".fasta", ".fna", ".fa", ".txt", ".seq"] {
        if stem.len() > ext.len() && stem.to_lowercase().ends_with(ext) {
            stem = &stem[..stem.len() - ext.len()];
        }
    }
    stem.to_string()
}
