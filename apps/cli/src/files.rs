//! File-backed import and export of card records.

use std::fs;
use std::io;
use std::path::Path;

use deck_core::{parser, Deck};

/// What a file import did: records applied and malformed lines skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub loaded: usize,
    pub skipped: usize,
}

/// Read a card file and merge its records into the deck.
///
/// Malformed lines are skipped, counted, and logged; everything parseable
/// around them is still applied. I/O errors (including a missing file) are
/// the caller's to handle.
pub fn import_into(deck: &mut Deck, path: &Path) -> io::Result<ImportSummary> {
    let content = fs::read_to_string(path)?;
    let outcome = parser::parse(&content);

    for skipped in &outcome.skipped {
        tracing::warn!(path = %path.display(), line = skipped.line, error = %skipped.error, "skipping malformed line");
    }

    let skipped = outcome.skipped.len();
    let loaded = deck.import_records(outcome.records);
    tracing::debug!(path = %path.display(), loaded, skipped, "imported card file");

    Ok(ImportSummary { loaded, skipped })
}

/// Write the whole deck to a card file, returning how many cards were saved.
pub fn export_to(deck: &Deck, path: &Path) -> io::Result<usize> {
    let records = deck.export_records();
    fs::write(path, parser::render(&records))?;
    tracing::debug!(path = %path.display(), saved = records.len(), "exported card file");
    Ok(records.len())
}
