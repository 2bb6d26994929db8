//! Error types for cardset.

use thiserror::Error;

/// Result type alias using FlashcardError.
pub type Result<T> = std::result::Result<T, FlashcardError>;

/// Errors reported by collection, quiz and import operations.
#[derive(Debug, Error)]
pub enum FlashcardError {
    #[error("the card \"{0}\" already exists")]
    DuplicateTerm(String),

    #[error("the definition \"{0}\" already exists")]
    DuplicateDefinition(String),

    #[error("there is no such card: \"{0}\"")]
    NotFound(String),

    #[error("the collection is empty")]
    EmptyCollection,

    #[error("no question is waiting for an answer")]
    NoPendingQuestion,

    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("file unavailable: {0}")]
    FileUnavailable(#[from] std::io::Error),
}
