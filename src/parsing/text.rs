//! Parser for raw sequence text.
//!
//! Every non-whitespace character is a symbol. Lines starting with `>` are
//! treated as FASTA-style headers: the first one names the sequence and all
//! of them are otherwise skipped.

use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::sequence::Sequence;
use crate::parsing::{name_from_path, ParseError, ParseOptions};
use crate::utils::validation::MAX_SEQUENCE_LENGTH;

/// Parse a raw text sequence file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Empty`
/// if it holds no symbols, or `ParseError::TooLong` if it exceeds the limit.
pub fn parse_text_file(path: &Path, options: ParseOptions) -> Result<Sequence, ParseError> {
    let reader = BufReader::new(std::fs::File::open(path)?);
    parse_text_reader(reader, &name_from_path(path), options)
}

/// Parse raw sequence text from any buffered reader.
///
/// `default_name` is used unless a `>` header line names the sequence.
///
/// # Errors
///
/// Returns `ParseError::Io` on read failure, `ParseError::Empty` if no
/// symbols are found, or `ParseError::TooLong` if the limit is exceeded.
pub fn parse_text_reader<R: BufRead>(
    reader: R,
    default_name: &str,
    options: ParseOptions,
) -> Result<Sequence, ParseError> {
    let mut name: Option<String> = None;
    let mut symbols = Vec::new();

    for line in reader.split(b'\n') {
        let line = line?;
        if let Some(header) = line.strip_prefix(b">") {
            if name.is_none() {
                let header = String::from_utf8_lossy(header);
                name = header.split_whitespace().next().map(str::to_string);
            }
            continue;
        }

        symbols.extend(line.iter().copied().filter(|b| !b.is_ascii_whitespace()));
        if symbols.len() > MAX_SEQUENCE_LENGTH {
            return Err(ParseError::TooLong(MAX_SEQUENCE_LENGTH));
        }
    }

    if symbols.is_empty() {
        return Err(ParseError::Empty(default_name.to_string()));
    }

    options.apply(&mut symbols);
    Ok(Sequence::new(
        name.unwrap_or_else(|| default_name.to_string()),
        symbols,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_strips_whitespace_and_line_endings() {
        let input = Cursor::new(b"AC GT\r\n\n  tt\n".to_vec());
        let seq = parse_text_reader(input, "input", ParseOptions::default()).unwrap();
        assert_eq!(seq.name, "input");
        assert_eq!(seq.symbols, b"ACGTTT");
    }

    #[test]
    fn test_header_lines_name_and_are_skipped() {
        let input = Cursor::new(b">read_1 some text\nACG\n>read_2\nTT\n".to_vec());
        let seq = parse_text_reader(input, "input", ParseOptions::default()).unwrap();
        assert_eq!(seq.name, "read_1");
        assert_eq!(seq.symbols, b"ACGTT");
    }

    #[test]
    fn test_empty_input() {
        let input = Cursor::new(b"\n  \n>only_header\n".to_vec());
        let result = parse_text_reader(input, "input", ParseOptions::default());
        assert!(matches!(result, Err(ParseError::Empty(name)) if name == "input"));
    }

    #[test]
    fn test_too_long() {
        let input = Cursor::new(vec![b'A'; MAX_SEQUENCE_LENGTH + 1]);
        let result = parse_text_reader(input, "input", ParseOptions::default());
        assert!(matches!(result, Err(ParseError::TooLong(_))));
    }
}
