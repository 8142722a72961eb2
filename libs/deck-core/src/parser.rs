//! Parser for the flat card-file format.
//!
//! # Format
//! ```text
//! term:definition:error_count
//! another term:another definition:0
//! ```
//!
//! One card per line, fields split on `:`. Terms or definitions containing
//! `:` are unsupported (the split would be ambiguous) — an inherited
//! limitation of the format.

use crate::error::ParseError;
use crate::types::CardRecord;

/// A line that failed to parse, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub error: ParseError,
}

/// Result of parsing a whole card file.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub records: Vec<CardRecord>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse card-file content, one record per line.
///
/// Malformed lines do not abort the batch: they are collected in
/// [`ParseOutcome::skipped`] with their line numbers, and every well-formed
/// line around them still parses. Blank lines are ignored.
pub fn parse(content: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line, line_no) {
            Ok(record) => outcome.records.push(record),
            Err(error) => outcome.skipped.push(SkippedLine {
                line: line_no,
                error,
            }),
        }
    }

    outcome
}

/// Parse one `term:definition:error_count` line.
pub fn parse_line(line: &str, line_no: usize) -> Result<CardRecord, ParseError> {
    let fields: Vec<&str> = line.split(':').collect();
    if fields.len() != 3 {
        return Err(ParseError::WrongFieldCount {
            line: line_no,
            found: fields.len(),
        });
    }

    let error_count = fields[2]
        .trim()
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidErrorCount {
            line: line_no,
            value: fields[2].to_string(),
        })?;

    Ok(CardRecord::new(fields[0], fields[1], error_count))
}

/// Render records back into file content, one line per record.
pub fn render<'a>(records: impl IntoIterator<Item = &'a CardRecord>) -> String {
    records
        .into_iter()
        .map(|r| format!("{}:{}:{}\n", r.term, r.definition, r.error_count))
        .collect()
}
