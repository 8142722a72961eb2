//! Core flashcard library shared by the study applications.
//!
//! Provides:
//! - The deck: an ordered, uniqueness-constrained card collection
//! - Quiz engine: random sampling and answer grading with cross-reference
//!   ("your answer is correct for a different card") detection
//! - Parser for the flat `term:definition:error_count` file format
//! - Session transcript buffer

pub mod deck;
pub mod error;
pub mod parser;
pub mod quiz;
pub mod session_log;
pub mod types;

pub use deck::Deck;
pub use error::{DeckError, ParseError, Result};
pub use parser::{parse, parse_line, render, ParseOutcome, SkippedLine};
pub use quiz::{grade, QuizOutcome, Sampler};
pub use session_log::SessionLog;
pub use types::{Card, CardRecord};
