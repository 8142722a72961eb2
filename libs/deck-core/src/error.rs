//! Error types for deck-core.

use thiserror::Error;

/// Result type alias using DeckError.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Errors raised by deck operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("the card \"{term}\" already exists")]
    DuplicateTerm { term: String },

    #[error("the definition \"{definition}\" already exists")]
    DuplicateDefinition { definition: String },

    #[error("there is no card \"{term}\"")]
    NotFound { term: String },
}

/// Errors raised while parsing one line of the flat card-file format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 3 ':'-separated fields at line {line}, found {found}")]
    WrongFieldCount { line: usize, found: usize },

    #[error("invalid error count at line {line}: {value}")]
    InvalidErrorCount { line: usize, value: String },
}
