//! Quiz engine: random card sampling and answer grading.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::deck::Deck;
use crate::error::{DeckError, Result};

/// Outcome of grading one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizOutcome {
    /// The answer matched the asked card's definition.
    Correct,
    /// The answer matched nothing in the deck.
    Wrong { correct: String },
    /// The answer was wrong for the asked card but is the definition of a
    /// different card.
    MatchesOtherCard { correct: String, matched_term: String },
}

/// Grade `answer` against the card for `term`.
///
/// A wrong answer increments the asked card's error count exactly once;
/// a correct answer never touches it. When the answer is the definition of
/// some other card, the first such card in deck order is reported so the
/// user learns which term their answer actually belongs to.
pub fn grade(deck: &mut Deck, term: &str, answer: &str) -> Result<QuizOutcome> {
    let card = deck.get(term).ok_or_else(|| DeckError::NotFound {
        term: term.to_string(),
    })?;

    if card.definition == answer {
        return Ok(QuizOutcome::Correct);
    }

    let correct = card.definition.clone();
    let matched_term = deck
        .find_by_definition(answer)
        .map(|other| other.term.clone());

    deck.note_error(term)?;

    Ok(match matched_term {
        Some(matched_term) => QuizOutcome::MatchesOtherCard {
            correct,
            matched_term,
        },
        None => QuizOutcome::Wrong { correct },
    })
}

/// Uniform sampler over the current term set, with replacement.
///
/// Repeated terms may come up more than once per session and some terms may
/// never come up; that matches the study loop's behavior. Seed it for
/// reproducible sequences in tests.
#[derive(Debug)]
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Sampler seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Sampler with a fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick one term uniformly at random. `None` on an empty deck.
    pub fn pick(&mut self, deck: &Deck) -> Option<String> {
        if deck.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range(0..deck.len());
        deck.terms().nth(idx).map(str::to_string)
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}
