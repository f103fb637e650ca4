/// A single flashcard. The term is the unique key within a store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub term: String,
    pub definition: String,
    pub mistakes: u32,
}

impl Card {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes: 0,
        }
    }
}

/// Outcome of grading one quiz answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong {
        /// The definition that was expected.
        correct: String,
        /// First term in insertion order whose definition equals the typed
        /// answer, when the answer fits a different card.
        cross_match: Option<String>,
    },
}
