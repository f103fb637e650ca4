use crate::{Card, CoreError};

/// Parses the line-triplet deck format: term, definition, mistake count,
/// repeating. Carriage returns are stripped first; an empty file is an empty
/// deck. Errors carry the 1-based line number of the offending entry.
pub fn parse(text: &str) -> Result<Vec<Card>, CoreError> {
    let text = text.replace('\r', "");
    let lines: Vec<&str> = text.lines().collect();

    let mut cards = Vec::with_capacity(lines.len() / 3);
    let chunks = lines.chunks_exact(3);
    let remainder = chunks.remainder();
    for (i, chunk) in chunks.enumerate() {
        let count_line = 3 * i + 3;
        let mistakes: u32 = chunk[2]
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidMistakeCount(count_line))?;
        cards.push(Card {
            term: chunk[0].to_string(),
            definition: chunk[1].to_string(),
            mistakes,
        });
    }
    if !remainder.is_empty() {
        return Err(CoreError::TruncatedEntry(lines.len() - remainder.len() + 1));
    }
    Ok(cards)
}

/// Serializes cards back into the line-triplet format, one `\n` after every
/// field, in the order given.
pub fn serialize(cards: &[Card]) -> String {
    let mut out = String::new();
    for card in cards {
        out.push_str(&card.term);
        out.push('\n');
        out.push_str(&card.definition);
        out.push('\n');
        out.push_str(&card.mistakes.to_string());
        out.push('\n');
    }
    out
}
