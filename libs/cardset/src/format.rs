//! Delimited text format for card files.
//!
//! # Format
//! ```text
//! TERM:DEFINITION:MISTAKES
//! German:Deutsche:0
//! I am:Ich bin:3
//! ```
//!
//! The first line is a header. Fields are separated by `:` with no escaping,
//! so a term or definition containing `:` cannot be stored.

use crate::collection::CardCollection;
use crate::error::{FlashcardError, Result};
use crate::types::{Card, CardRow};

/// Header written on export and skipped on import.
pub const HEADER: &str = "TERM:DEFINITION:MISTAKES";

const SEPARATOR: char = ':';

/// Parse one data row. `line` is the 1-based line number used in errors.
///
/// A row with only two fields gets a mistake count of zero.
pub fn parse_row(text: &str, line: usize) -> Result<CardRow> {
    let fields: Vec<&str> = text.split(SEPARATOR).collect();

    let (term, definition, mistakes) = match fields.as_slice() {
        [term, definition] => (*term, *definition, 0),
        [term, definition, mistakes] => {
            let mistakes = mistakes
                .trim()
                .parse::<u32>()
                .map_err(|_| FlashcardError::MalformedRow {
                    line,
                    reason: format!("invalid mistake count \"{}\"", mistakes),
                })?;
            (*term, *definition, mistakes)
        }
        _ => {
            return Err(FlashcardError::MalformedRow {
                line,
                reason: format!("expected 2 or 3 fields, found {}", fields.len()),
            })
        }
    };

    Ok(CardRow {
        term: term.to_string(),
        definition: definition.to_string(),
        mistakes,
        line_number: line,
    })
}

/// Format a card as a data row.
pub fn format_row(card: &Card) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        card.term(),
        card.definition(),
        card.mistakes(),
        sep = SEPARATOR
    )
}

/// Data rows for every card, in collection order, without the header.
pub fn export_rows(deck: &CardCollection) -> Vec<String> {
    deck.iter().map(format_row).collect()
}

/// Full file contents: header, then one newline-terminated row per card.
pub fn render(deck: &CardCollection) -> String {
    let mut output = String::with_capacity(HEADER.len() + 1 + deck.len() * 16);
    output.push_str(HEADER);
    output.push('\n');
    for row in export_rows(deck) {
        output.push_str(&row);
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_three_fields() {
        let row = parse_row("I am:Ich bin:3", 2).unwrap();
        assert_eq!(row.term, "I am");
        assert_eq!(row.definition, "Ich bin");
        assert_eq!(row.mistakes, 3);
        assert_eq!(row.line_number, 2);
    }

    #[test]
    fn parse_two_fields_defaults_mistakes() {
        let row = parse_row("German:Deutsche", 2).unwrap();
        assert_eq!(row.mistakes, 0);
    }

    #[test]
    fn parse_keeps_surrounding_spaces_in_text() {
        let row = parse_row(" a : b : 1 ", 2).unwrap();
        assert_eq!(row.term, " a ");
        assert_eq!(row.definition, " b ");
        assert_eq!(row.mistakes, 1);
    }

    #[test]
    fn reject_extra_separator() {
        let result = parse_row("time:12:30:0", 4);
        assert!(matches!(
            result,
            Err(FlashcardError::MalformedRow { line: 4, .. })
        ));
    }

    #[test]
    fn reject_single_field() {
        let result = parse_row("lonely", 2);
        assert!(matches!(result, Err(FlashcardError::MalformedRow { .. })));
    }

    #[test]
    fn reject_bad_mistake_count() {
        assert!(parse_row("a:b:many", 2).is_err());
        assert!(parse_row("a:b:-1", 2).is_err());
        assert!(parse_row("a:b:", 2).is_err());
    }

    #[test]
    fn render_writes_header_and_rows() {
        let mut deck = CardCollection::new();
        deck.add("German", "Deutsche", 0).unwrap();
        deck.add("I am", "Ich bin", 3).unwrap();
        assert_eq!(
            render(&deck),
            "TERM:DEFINITION:MISTAKES\nGerman:Deutsche:0\nI am:Ich bin:3\n"
        );
    }

    #[test]
    fn render_empty_collection() {
        assert_eq!(render(&CardCollection::new()), "TERM:DEFINITION:MISTAKES\n");
    }
}
