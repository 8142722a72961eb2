//! Core types for the flashcard deck.

use serde::{Deserialize, Serialize};

/// A single flashcard: a term, its definition, and how many times the
/// user has answered it wrong.
///
/// Cards are owned exclusively by a [`Deck`](crate::deck::Deck); callers
/// only ever see `&Card`. The error counter is bumped through the quiz
/// path and zeroed by [`Deck::reset_stats`](crate::deck::Deck::reset_stats),
/// never directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub term: String,
    pub definition: String,
    pub error_count: u32,
}

/// One `(term, definition, error_count)` triple as it appears in the
/// flat-file format. Import and export both speak in records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub term: String,
    pub definition: String,
    pub error_count: u32,
}

impl CardRecord {
    pub fn new(term: impl Into<String>, definition: impl Into<String>, error_count: u32) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            error_count,
        }
    }
}

impl From<&Card> for CardRecord {
    fn from(card: &Card) -> Self {
        Self {
            term: card.term.clone(),
            definition: card.definition.clone(),
            error_count: card.error_count,
        }
    }
}
