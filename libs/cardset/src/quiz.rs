//! Quiz sessions that ask every card once before any card repeats.
//!
//! A session keeps a pool of cards still to be asked in the current cycle.
//! Each question is drawn uniformly from the pool and removed from it once
//! answered; when the pool runs dry it is refilled from the source collection.
//! Mistakes are always recorded on the source collection, never on the pool.

use crate::collection::CardCollection;
use crate::error::{FlashcardError, Result};
use crate::matching::{eq_ignore_case, fold_case};
use crate::types::{Card, QuizState, Verdict};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::collections::HashMap;

/// Cards left in the current cycle.
///
/// Dense storage plus a folded-term map so removal is a swap with the last
/// slot followed by a pop.
#[derive(Debug, Clone, Default)]
struct CardPool {
    cards: Vec<Card>,
    slots: HashMap<String, usize>,
}

impl CardPool {
    fn refill(&mut self, source: &CardCollection) {
        self.cards.clear();
        self.slots.clear();
        for card in source {
            self.slots.insert(fold_case(card.term()), self.cards.len());
            self.cards.push(card.clone());
        }
    }

    fn draw<R: Rng>(&self, rng: &mut R) -> Option<&Card> {
        if self.cards.is_empty() {
            return None;
        }
        Some(&self.cards[rng.random_range(0..self.cards.len())])
    }

    fn remove(&mut self, term: &str) -> Option<Card> {
        let slot = self.slots.remove(&fold_case(term))?;
        let card = self.cards.swap_remove(slot);
        if let Some(moved) = self.cards.get(slot) {
            self.slots.insert(fold_case(moved.term()), slot);
        }
        Some(card)
    }

    fn len(&self) -> usize {
        self.cards.len()
    }

    fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// A quiz over a source collection for a fixed number of questions.
///
/// The session does not hold the collection; each call borrows it, so the
/// caller keeps ownership of the deck between questions.
#[derive(Debug)]
pub struct QuizSession<R = ThreadRng> {
    pool: CardPool,
    remaining: usize,
    pending: Option<Card>,
    rng: R,
}

impl QuizSession<ThreadRng> {
    /// Start a quiz of `questions` questions using the thread-local RNG.
    pub fn new(questions: usize) -> Self {
        Self::with_rng(questions, rand::rng())
    }
}

impl<R: Rng> QuizSession<R> {
    pub fn with_rng(questions: usize, rng: R) -> Self {
        Self {
            pool: CardPool::default(),
            remaining: questions,
            pending: None,
            rng,
        }
    }

    pub fn state(&self) -> QuizState {
        if self.remaining == 0 {
            QuizState::Exhausted
        } else {
            QuizState::Active
        }
    }

    /// Questions not yet answered.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Cards still to be asked before the pool is refilled.
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Draw the next question card, or return the one still awaiting an answer.
    ///
    /// Returns `None` once the session is exhausted. Fails with
    /// `EmptyCollection` whenever `source` has no cards, even mid-cycle.
    pub fn next_question(&mut self, source: &CardCollection) -> Result<Option<&Card>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        if source.is_empty() {
            return Err(FlashcardError::EmptyCollection);
        }
        if self.pending.is_none() {
            if self.pool.is_empty() {
                self.pool.refill(source);
                tracing::debug!(cards = self.pool.len(), "quiz pool refilled");
            }
            let card = self
                .pool
                .draw(&mut self.rng)
                .cloned()
                .ok_or(FlashcardError::EmptyCollection)?;
            tracing::debug!(term = card.term(), "question drawn");
            self.pending = Some(card);
        }
        Ok(self.pending.as_ref())
    }

    /// Score an answer to the pending question.
    ///
    /// A wrong answer adds one mistake to the question card in `source`.
    /// The card leaves the pool whatever the outcome.
    pub fn answer(&mut self, source: &mut CardCollection, answer: &str) -> Result<Verdict> {
        let card = self.pending.take().ok_or(FlashcardError::NoPendingQuestion)?;

        let verdict = if eq_ignore_case(answer, card.definition()) {
            Verdict::Correct
        } else {
            let verdict = match source.find_by_definition(answer) {
                Some(other) => Verdict::WrongButValidElsewhere {
                    expected: card.definition().to_string(),
                    other_term: other.term().to_string(),
                },
                None => Verdict::WrongNoMatch {
                    expected: card.definition().to_string(),
                },
            };
            match source.record_mistake(card.term()) {
                Ok(mistakes) => tracing::debug!(term = card.term(), mistakes, "mistake recorded"),
                Err(_) => tracing::debug!(term = card.term(), "question card left the collection"),
            }
            verdict
        };

        self.pool.remove(card.term());
        self.remaining -= 1;
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn deck() -> CardCollection {
        let mut deck = CardCollection::new();
        deck.add("cat", "gato", 0).unwrap();
        deck.add("dog", "perro", 0).unwrap();
        deck.add("house", "casa", 0).unwrap();
        deck
    }

    fn session(questions: usize) -> QuizSession<StdRng> {
        QuizSession::with_rng(questions, StdRng::seed_from_u64(1))
    }

    #[test]
    fn zero_questions_is_exhausted() {
        let mut quiz = session(0);
        assert_eq!(quiz.state(), QuizState::Exhausted);
        assert!(quiz.next_question(&deck()).unwrap().is_none());
    }

    #[test]
    fn empty_collection_fails() {
        let mut quiz = session(3);
        let result = quiz.next_question(&CardCollection::new());
        assert!(matches!(result, Err(FlashcardError::EmptyCollection)));
        assert_eq!(quiz.remaining(), 3);
    }

    #[test]
    fn source_emptied_mid_cycle_fails() {
        let mut deck = deck();
        let mut quiz = session(5);
        let definition = quiz.next_question(&deck).unwrap().unwrap().definition().to_string();
        quiz.answer(&mut deck, &definition).unwrap();
        assert_eq!(quiz.pool_len(), 2);

        for term in ["cat", "dog", "house"] {
            deck.remove(term).unwrap();
        }
        assert!(matches!(
            quiz.next_question(&deck),
            Err(FlashcardError::EmptyCollection)
        ));
        assert_eq!(quiz.remaining(), 4);
    }

    #[test]
    fn answer_without_question() {
        let mut quiz = session(1);
        let result = quiz.answer(&mut deck(), "gato");
        assert!(matches!(result, Err(FlashcardError::NoPendingQuestion)));
    }

    #[test]
    fn pending_question_is_stable() {
        let deck = deck();
        let mut quiz = session(2);
        let first = quiz.next_question(&deck).unwrap().unwrap().term().to_string();
        let again = quiz.next_question(&deck).unwrap().unwrap().term().to_string();
        assert_eq!(first, again);
        assert_eq!(quiz.pool_len(), 3);
    }

    #[test]
    fn correct_answer_ignores_case() {
        let mut deck = deck();
        let mut quiz = session(1);
        let definition = quiz
            .next_question(&deck)
            .unwrap()
            .unwrap()
            .definition()
            .to_uppercase();
        let verdict = quiz.answer(&mut deck, &definition).unwrap();
        assert_eq!(verdict, Verdict::Correct);
        assert!(deck.iter().all(|c| c.mistakes() == 0));
        assert_eq!(quiz.state(), QuizState::Exhausted);
    }

    #[test]
    fn wrong_answer_naming_another_card() {
        let mut deck = deck();
        let mut quiz = session(1);
        let card = quiz.next_question(&deck).unwrap().unwrap().clone();
        let other = deck
            .iter()
            .find(|c| c.term() != card.term())
            .unwrap()
            .clone();

        let verdict = quiz.answer(&mut deck, other.definition()).unwrap();

        assert_eq!(
            verdict,
            Verdict::WrongButValidElsewhere {
                expected: card.definition().to_string(),
                other_term: other.term().to_string(),
            }
        );
        assert_eq!(deck.find_by_term(card.term()).unwrap().mistakes(), 1);
        assert_eq!(deck.find_by_term(other.term()).unwrap().mistakes(), 0);
    }

    #[test]
    fn wrong_answer_without_match() {
        let mut deck = deck();
        let mut quiz = session(1);
        let card = quiz.next_question(&deck).unwrap().unwrap().clone();

        let verdict = quiz.answer(&mut deck, "nada").unwrap();

        assert_eq!(
            verdict,
            Verdict::WrongNoMatch {
                expected: card.definition().to_string()
            }
        );
        let total: u32 = deck.iter().map(Card::mistakes).sum();
        assert_eq!(total, 1);
        assert_eq!(deck.find_by_term(card.term()).unwrap().mistakes(), 1);
    }

    #[test]
    fn pool_removal_keeps_slots_consistent() {
        let mut pool = CardPool::default();
        pool.refill(&deck());
        assert_eq!(pool.remove("CAT").unwrap().term(), "cat");
        assert!(pool.remove("cat").is_none());
        assert_eq!(pool.remove("house").unwrap().term(), "house");
        assert_eq!(pool.remove("dog").unwrap().term(), "dog");
        assert!(pool.is_empty());
    }
}
