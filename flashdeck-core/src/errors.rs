use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("the card \"{0}\" already exists")]
    DuplicateTerm(String),
    #[error("the definition \"{0}\" already exists")]
    DuplicateDefinition(String),
    #[error("no such card: \"{0}\"")]
    UnknownTerm(String),
    #[error("the deck is empty")]
    EmptyDeck,
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("truncated card entry at line {0}")]
    TruncatedEntry(usize),
    #[error("invalid mistake count at line {0}")]
    InvalidMistakeCount(usize),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
