//! Core flashcard library for the trainer.
//!
//! Provides:
//! - Card collection with case-insensitive unique terms and definitions
//! - Quiz sessions that never repeat a card before the whole deck was asked
//! - Import merging (update, skip or insert per row)
//! - The `TERM:DEFINITION:MISTAKES` text format
//! - Hardest-card statistics
//!
//! Nothing here reads or writes files or the console; callers hand in lines
//! and render the returned values.

pub mod collection;
pub mod error;
pub mod format;
pub mod matching;
pub mod merge;
pub mod quiz;
pub mod stats;
pub mod types;

pub use collection::CardCollection;
pub use error::{FlashcardError, Result};
pub use format::{export_rows, parse_row, render, HEADER};
pub use merge::{import_lines, merge_row, merge_rows, ImportReport, MergeAction};
pub use quiz::QuizSession;
pub use stats::{hardest_cards, HardestCards};
pub use types::{Card, CardRow, QuizState, Verdict};
