//! The deck: an ordered, uniqueness-constrained collection of cards.

use crate::error::{DeckError, Result};
use crate::types::{Card, CardRecord};

/// Ordered mapping from term to card.
///
/// Invariants: no two cards share a term, and no two cards share a
/// definition (the latter is enforced on [`add`](Deck::add) only — see
/// [`update`](Deck::update)). Insertion order is preserved, so iteration,
/// export, and the hardest-cards listing are deterministic.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new card with a zero error count.
    ///
    /// Fails with [`DeckError::DuplicateTerm`] if the term is taken and
    /// [`DeckError::DuplicateDefinition`] if any existing card already has
    /// that definition. On failure the deck is left unchanged.
    pub fn add(&mut self, term: impl Into<String>, definition: impl Into<String>) -> Result<()> {
        let term = term.into();
        let definition = definition.into();

        if self.position(&term).is_some() {
            return Err(DeckError::DuplicateTerm { term });
        }
        if self.find_by_definition(&definition).is_some() {
            return Err(DeckError::DuplicateDefinition { definition });
        }

        self.cards.push(Card {
            term,
            definition,
            error_count: 0,
        });
        Ok(())
    }

    /// Remove the card for `term`, preserving the relative order of the
    /// remaining cards.
    pub fn remove(&mut self, term: &str) -> Result<()> {
        let idx = self.position(term).ok_or_else(|| DeckError::NotFound {
            term: term.to_string(),
        })?;
        self.cards.remove(idx);
        Ok(())
    }

    /// Replace the definition of an existing card in place.
    ///
    /// Unlike [`add`](Deck::add), this does NOT check definition
    /// uniqueness: two cards may end up with the same definition after an
    /// update. The asymmetry is intentional and pinned by tests. The error
    /// count is left untouched.
    pub fn update(&mut self, term: &str, new_definition: impl Into<String>) -> Result<()> {
        let idx = self.position(term).ok_or_else(|| DeckError::NotFound {
            term: term.to_string(),
        })?;
        self.cards[idx].definition = new_definition.into();
        Ok(())
    }

    /// Look up a card by term.
    pub fn get(&self, term: &str) -> Option<&Card> {
        self.position(term).map(|idx| &self.cards[idx])
    }

    /// First card (in deck order) whose definition equals `definition`.
    pub fn find_by_definition(&self, definition: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.definition == definition)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in insertion order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Terms in insertion order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().map(|c| c.term.as_str())
    }

    /// All cards sharing the deck-wide maximum error count, provided that
    /// maximum is positive. Empty if the deck is empty or error-free.
    pub fn hardest(&self) -> Vec<&Card> {
        let max = self.cards.iter().map(|c| c.error_count).max().unwrap_or(0);
        if max == 0 {
            return Vec::new();
        }
        self.cards.iter().filter(|c| c.error_count == max).collect()
    }

    /// Zero every card's error count.
    pub fn reset_stats(&mut self) {
        for card in &mut self.cards {
            card.error_count = 0;
        }
    }

    /// Merge a batch of records into the deck.
    ///
    /// A record with a new term is inserted as-is, error count included; a
    /// record whose term already exists replaces that card's definition and
    /// leaves its error count alone. Neither path checks definition
    /// uniqueness. Returns the number of records applied. Not atomic: the
    /// caller may feed records one batch at a time and earlier records stay
    /// applied regardless of what follows.
    pub fn import_records(&mut self, records: impl IntoIterator<Item = CardRecord>) -> usize {
        let mut applied = 0;
        for record in records {
            match self.position(&record.term) {
                Some(idx) => self.cards[idx].definition = record.definition,
                None => self.cards.push(Card {
                    term: record.term,
                    definition: record.definition,
                    error_count: record.error_count,
                }),
            }
            applied += 1;
        }
        applied
    }

    /// Snapshot the deck as records, in deck order.
    pub fn export_records(&self) -> Vec<CardRecord> {
        self.cards.iter().map(CardRecord::from).collect()
    }

    /// Bump the error count of the card for `term`. Quiz path only.
    pub(crate) fn note_error(&mut self, term: &str) -> Result<()> {
        let idx = self.position(term).ok_or_else(|| DeckError::NotFound {
            term: term.to_string(),
        })?;
        self.cards[idx].error_count += 1;
        Ok(())
    }

    fn position(&self, term: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.term == term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_deck() -> Deck {
        let mut deck = Deck::new();
        deck.add("cat", "a feline").unwrap();
        deck.add("dog", "a canine").unwrap();
        deck
    }

    #[test]
    fn add_then_lookup() {
        let mut deck = Deck::new();
        deck.add("cat", "a feline").unwrap();
        let card = deck.get("cat").unwrap();
        assert_eq!(card.definition, "a feline");
        assert_eq!(card.error_count, 0);
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn reject_duplicate_term() {
        let mut deck = sample_deck();
        let err = deck.add("cat", "something else").unwrap_err();
        assert_eq!(
            err,
            DeckError::DuplicateTerm {
                term: "cat".to_string()
            }
        );
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.get("cat").unwrap().definition, "a feline");
    }

    #[test]
    fn reject_duplicate_definition() {
        let mut deck = sample_deck();
        let err = deck.add("kitten", "a feline").unwrap_err();
        assert_eq!(
            err,
            DeckError::DuplicateDefinition {
                definition: "a feline".to_string()
            }
        );
        assert_eq!(deck.len(), 2);
        assert!(deck.get("kitten").is_none());
    }

    #[test]
    fn remove_absent_term() {
        let mut deck = sample_deck();
        let err = deck.remove("bird").unwrap_err();
        assert_eq!(
            err,
            DeckError::NotFound {
                term: "bird".to_string()
            }
        );
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn remove_keeps_order() {
        let mut deck = sample_deck();
        deck.add("bird", "an avian").unwrap();
        deck.remove("dog").unwrap();
        let terms: Vec<_> = deck.terms().collect();
        assert_eq!(terms, vec!["cat", "bird"]);
        assert!(deck.get("dog").is_none());
    }

    #[test]
    fn update_allows_duplicate_definition() {
        // add enforces definition uniqueness, update deliberately does not.
        let mut deck = sample_deck();
        deck.update("cat", "a canine").unwrap();
        assert_eq!(deck.get("cat").unwrap().definition, "a canine");
        assert_eq!(deck.get("dog").unwrap().definition, "a canine");
    }

    #[test]
    fn update_absent_term() {
        let mut deck = sample_deck();
        let err = deck.update("bird", "an avian").unwrap_err();
        assert_eq!(
            err,
            DeckError::NotFound {
                term: "bird".to_string()
            }
        );
    }

    #[test]
    fn update_keeps_error_count() {
        let mut deck = sample_deck();
        deck.note_error("cat").unwrap();
        deck.update("cat", "a small feline").unwrap();
        assert_eq!(deck.get("cat").unwrap().error_count, 1);
    }

    #[test]
    fn hardest_empty_without_errors() {
        let deck = sample_deck();
        assert!(deck.hardest().is_empty());
        assert!(Deck::new().hardest().is_empty());
    }

    #[test]
    fn hardest_returns_all_at_max_in_order() {
        let mut deck = sample_deck();
        deck.add("bird", "an avian").unwrap();
        deck.note_error("dog").unwrap();
        deck.note_error("dog").unwrap();
        deck.note_error("cat").unwrap();
        deck.note_error("cat").unwrap();
        deck.note_error("bird").unwrap();

        let hardest: Vec<_> = deck.hardest().iter().map(|c| c.term.as_str()).collect();
        assert_eq!(hardest, vec!["cat", "dog"]);
    }

    #[test]
    fn reset_stats_clears_hardest() {
        let mut deck = sample_deck();
        deck.note_error("cat").unwrap();
        deck.reset_stats();
        assert!(deck.hardest().is_empty());
        assert_eq!(deck.get("cat").unwrap().error_count, 0);
    }

    #[test]
    fn import_adds_new_and_updates_existing() {
        let mut deck = sample_deck();
        deck.note_error("cat").unwrap();

        let applied = deck.import_records(vec![
            CardRecord::new("cat", "a purring feline", 7),
            CardRecord::new("bird", "an avian", 2),
        ]);
        assert_eq!(applied, 2);
        assert_eq!(deck.len(), 3);

        // existing term: definition replaced, error count untouched
        let cat = deck.get("cat").unwrap();
        assert_eq!(cat.definition, "a purring feline");
        assert_eq!(cat.error_count, 1);

        // new term: record taken whole
        let bird = deck.get("bird").unwrap();
        assert_eq!(bird.error_count, 2);
    }

    #[test]
    fn export_import_round_trip() {
        let mut deck = sample_deck();
        deck.note_error("dog").unwrap();

        let mut fresh = Deck::new();
        fresh.import_records(deck.export_records());
        assert_eq!(fresh.export_records(), deck.export_records());
    }
}
