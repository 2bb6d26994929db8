//! Reconciles imported rows with an existing collection.
//!
//! Rows are applied in input order:
//! - same term, different definition: the old card is replaced (its mistakes are lost),
//!   unless another card already owns the new definition
//! - same term, same definition: nothing changes, the row still counts
//! - definition already used by another term: the row is skipped and not counted
//! - otherwise the row is added

use crate::collection::CardCollection;
use crate::error::FlashcardError;
use crate::format::parse_row;
use crate::matching::eq_ignore_case;
use crate::types::CardRow;

/// What happened to a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeAction {
    Inserted,
    Updated,
    Unchanged,
    Skipped,
}

impl MergeAction {
    /// Whether the row counts towards the number of imported cards.
    pub fn is_counted(self) -> bool {
        !matches!(self, Self::Skipped)
    }
}

/// Result of importing raw lines.
#[derive(Debug)]
pub struct ImportReport {
    /// Rows accounted for, including unchanged duplicates.
    pub imported: usize,
    /// The error that stopped the import, if any. Rows before it stay merged.
    pub error: Option<FlashcardError>,
}

/// Apply one row to the collection.
pub fn merge_row(deck: &mut CardCollection, row: &CardRow) -> MergeAction {
    let existing_definition = deck
        .find_by_term(&row.term)
        .map(|card| card.definition().to_string());

    let action = match existing_definition {
        Some(definition) if eq_ignore_case(&definition, &row.definition) => MergeAction::Unchanged,
        // The new definition belongs to some other card; keep the old one.
        Some(_) if deck.find_by_definition(&row.definition).is_some() => MergeAction::Skipped,
        Some(_) => match deck
            .remove(&row.term)
            .and_then(|_| deck.add(&row.term, &row.definition, row.mistakes))
        {
            Ok(()) => MergeAction::Updated,
            Err(_) => MergeAction::Skipped,
        },
        None if deck.find_by_definition(&row.definition).is_some() => MergeAction::Skipped,
        None => match deck.add(&row.term, &row.definition, row.mistakes) {
            Ok(()) => MergeAction::Inserted,
            Err(_) => MergeAction::Skipped,
        },
    };

    tracing::debug!(term = %row.term, line = row.line_number, ?action, "row merged");
    action
}

/// Apply rows in order and return how many were counted.
pub fn merge_rows<'a, I>(deck: &mut CardCollection, rows: I) -> usize
where
    I: IntoIterator<Item = &'a CardRow>,
{
    rows.into_iter()
        .filter(|row| merge_row(deck, row).is_counted())
        .count()
}

/// Import the raw lines of a card file.
///
/// The first line is the header and is not checked. Blank lines are ignored.
/// The import stops at the first read error or malformed row.
pub fn import_lines<I, E>(deck: &mut CardCollection, lines: I) -> ImportReport
where
    I: IntoIterator<Item = Result<String, E>>,
    E: Into<FlashcardError>,
{
    let mut imported = 0;

    for (idx, line) in lines.into_iter().enumerate() {
        let line_num = idx + 1;
        let text = match line {
            Ok(text) => text,
            Err(e) => {
                return ImportReport {
                    imported,
                    error: Some(e.into()),
                }
            }
        };
        if line_num == 1 || text.trim().is_empty() {
            continue;
        }

        let row = match parse_row(text.trim_end_matches('\r'), line_num) {
            Ok(row) => row,
            Err(e) => {
                tracing::debug!(line = line_num, error = %e, "import stopped");
                return ImportReport {
                    imported,
                    error: Some(e),
                };
            }
        };
        if merge_row(deck, &row).is_counted() {
            imported += 1;
        }
    }

    ImportReport {
        imported,
        error: None,
    }
}
