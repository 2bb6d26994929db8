//! Ordered card collection with case-insensitive uniqueness on terms and definitions.

use crate::error::{FlashcardError, Result};
use crate::matching::fold_case;
use crate::types::Card;
use rand::Rng;
use std::collections::HashMap;

/// Cards in insertion order, indexed by folded term and folded definition.
///
/// No two cards share a term or a definition, compared case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct CardCollection {
    cards: Vec<Card>,
    by_term: HashMap<String, usize>,
    by_definition: HashMap<String, usize>,
}

impl CardCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card.
    ///
    /// The term is checked before the definition, so a row clashing on both
    /// reports `DuplicateTerm`.
    pub fn add(&mut self, term: &str, definition: &str, mistakes: u32) -> Result<()> {
        let term_key = fold_case(term);
        if self.by_term.contains_key(&term_key) {
            return Err(FlashcardError::DuplicateTerm(term.to_string()));
        }
        let definition_key = fold_case(definition);
        if self.by_definition.contains_key(&definition_key) {
            return Err(FlashcardError::DuplicateDefinition(definition.to_string()));
        }

        let position = self.cards.len();
        self.cards.push(Card::new(term, definition, mistakes));
        self.by_term.insert(term_key, position);
        self.by_definition.insert(definition_key, position);
        Ok(())
    }

    /// Append copies of every card in `other`, stopping at the first clash.
    pub fn extend_from(&mut self, other: &CardCollection) -> Result<()> {
        for card in other.iter() {
            self.add(card.term(), card.definition(), card.mistakes())?;
        }
        Ok(())
    }

    /// Remove the card with this term, keeping the order of the others.
    pub fn remove(&mut self, term: &str) -> Result<Card> {
        let position = self
            .position_of_term(term)
            .ok_or_else(|| FlashcardError::NotFound(term.to_string()))?;
        let card = self.cards.remove(position);
        self.reindex();
        Ok(card)
    }

    pub fn find_by_term(&self, term: &str) -> Option<&Card> {
        self.position_of_term(term).map(|i| &self.cards[i])
    }

    pub fn find_by_definition(&self, definition: &str) -> Option<&Card> {
        self.by_definition
            .get(&fold_case(definition))
            .map(|&i| &self.cards[i])
    }

    /// Independent copy with the same cards, order and counters.
    pub fn duplicate(&self) -> CardCollection {
        self.clone()
    }

    /// Pick a card uniformly at random.
    pub fn random_card<R: Rng>(&self, rng: &mut R) -> Result<&Card> {
        if self.cards.is_empty() {
            return Err(FlashcardError::EmptyCollection);
        }
        Ok(&self.cards[rng.random_range(0..self.cards.len())])
    }

    /// Increment the mistake counter of the card with this term.
    pub fn record_mistake(&mut self, term: &str) -> Result<u32> {
        let position = self
            .position_of_term(term)
            .ok_or_else(|| FlashcardError::NotFound(term.to_string()))?;
        Ok(self.cards[position].record_mistake())
    }

    /// Set every mistake counter back to zero.
    pub fn reset_mistakes(&mut self) {
        for card in &mut self.cards {
            card.reset_mistakes();
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn position_of_term(&self, term: &str) -> Option<usize> {
        self.by_term.get(&fold_case(term)).copied()
    }

    fn reindex(&mut self) {
        self.by_term.clear();
        self.by_definition.clear();
        for (position, card) in self.cards.iter().enumerate() {
            self.by_term.insert(fold_case(card.term()), position);
            self.by_definition.insert(fold_case(card.definition()), position);
        }
    }
}

impl<'a> IntoIterator for &'a CardCollection {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
