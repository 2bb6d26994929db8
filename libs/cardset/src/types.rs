//! Core types for the flashcard trainer.

use serde::{Deserialize, Serialize};

/// A term/definition pair with its mistake counter.
///
/// Term and definition never change once the card exists. The counter is
/// only touched through [`CardCollection`](crate::CardCollection), which
/// keeps the owning collection the single place where a card is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    term: String,
    definition: String,
    mistakes: u32,
}

impl Card {
    /// Create a card.
    pub fn new(term: impl Into<String>, definition: impl Into<String>, mistakes: u32) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Number of wrong answers recorded for this card.
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub(crate) fn record_mistake(&mut self) -> u32 {
        self.mistakes = self.mistakes.saturating_add(1);
        self.mistakes
    }

    pub(crate) fn reset_mistakes(&mut self) {
        self.mistakes = 0;
    }
}

/// One parsed row of the card file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRow {
    pub term: String,
    pub definition: String,
    #[serde(default)]
    pub mistakes: u32,
    pub line_number: usize,
}

/// Outcome of scoring one quiz answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    /// The answer is the definition of another card.
    WrongButValidElsewhere { expected: String, other_term: String },
    WrongNoMatch { expected: String },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Quiz session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizState {
    Active,
    Exhausted,
}
