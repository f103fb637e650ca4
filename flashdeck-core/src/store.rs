use crate::{deckfile, Card, CoreError, Verdict};
use std::fs;
use std::path::Path;

/// Insertion-ordered card collection. Small decks are the expected case, so
/// lookups are linear scans rather than an index.
#[derive(Debug, Default)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.cards.iter().any(|c| c.term == term)
    }

    pub fn definition(&self, term: &str) -> Option<&str> {
        self.find(term).map(|c| c.definition.as_str())
    }

    /// Inserts a new card with a zero mistake count. Both the term and the
    /// definition must be unique across the store.
    pub fn add(&mut self, term: &str, definition: &str) -> Result<(), CoreError> {
        if self.contains_term(term) {
            return Err(CoreError::DuplicateTerm(term.to_string()));
        }
        if self.cards.iter().any(|c| c.definition == definition) {
            return Err(CoreError::DuplicateDefinition(definition.to_string()));
        }
        self.cards.push(Card::new(term, definition));
        Ok(())
    }

    pub fn remove(&mut self, term: &str) -> Result<(), CoreError> {
        let pos = self
            .cards
            .iter()
            .position(|c| c.term == term)
            .ok_or_else(|| CoreError::UnknownTerm(term.to_string()))?;
        self.cards.remove(pos);
        Ok(())
    }

    /// Quiz ordering: cycles through the deck in insertion order, wrapping
    /// around past the end. Errors on an empty deck rather than mod by zero.
    pub fn term_at(&self, i: usize) -> Result<&str, CoreError> {
        if self.cards.is_empty() {
            return Err(CoreError::EmptyDeck);
        }
        Ok(self.cards[i % self.cards.len()].term.as_str())
    }

    /// Grades one answer for `term`. A wrong answer bumps the card's mistake
    /// count and reports the first card (in insertion order) whose definition
    /// the answer would have been correct for, if there is one.
    pub fn answer(&mut self, term: &str, answer: &str) -> Result<Verdict, CoreError> {
        let pos = self
            .cards
            .iter()
            .position(|c| c.term == term)
            .ok_or_else(|| CoreError::UnknownTerm(term.to_string()))?;
        if self.cards[pos].definition == answer {
            return Ok(Verdict::Correct);
        }
        self.cards[pos].mistakes += 1;
        let cross_match = self
            .cards
            .iter()
            .find(|c| c.definition == answer)
            .map(|c| c.term.clone());
        Ok(Verdict::Wrong {
            correct: self.cards[pos].definition.clone(),
            cross_match,
        })
    }

    /// Raw upsert used by import: an existing term keeps its insertion
    /// position but takes the new definition and mistake count; a new term is
    /// appended. Duplicate-definition checks do not apply here.
    pub fn upsert(&mut self, card: Card) {
        match self.cards.iter_mut().find(|c| c.term == card.term) {
            Some(existing) => {
                existing.definition = card.definition;
                existing.mistakes = card.mistakes;
            }
            None => self.cards.push(card),
        }
    }

    /// Loads a deck file into the store. The file is parsed in full before
    /// any card is touched, so a malformed file leaves the store unchanged.
    /// Returns the number of cards in the file.
    pub fn import_file(&mut self, path: &Path) -> Result<usize, CoreError> {
        if !path.exists() {
            return Err(CoreError::FileNotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        let cards = deckfile::parse(&text)?;
        let count = cards.len();
        for card in cards {
            self.upsert(card);
        }
        Ok(count)
    }

    /// Writes the whole store to `path` in the deck file format, overwriting
    /// anything already there. Returns the number of cards written.
    pub fn export_file(&self, path: &Path) -> Result<usize, CoreError> {
        fs::write(path, deckfile::serialize(&self.cards))?;
        Ok(self.cards.len())
    }

    /// The terms with the highest mistake count, in insertion order, paired
    /// with that count. `None` when no card has been missed yet.
    pub fn hardest(&self) -> Option<(Vec<&str>, u32)> {
        let max = self.cards.iter().map(|c| c.mistakes).max().unwrap_or(0);
        if max == 0 {
            return None;
        }
        let terms = self
            .cards
            .iter()
            .filter(|c| c.mistakes == max)
            .map(|c| c.term.as_str())
            .collect();
        Some((terms, max))
    }

    pub fn reset_stats(&mut self) {
        for card in &mut self.cards {
            card.mistakes = 0;
        }
    }

    fn find(&self, term: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.term == term)
    }
}
