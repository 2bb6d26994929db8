//! Mistake statistics over a collection.

use crate::collection::CardCollection;
use crate::types::Card;

/// Cards tied for the highest mistake count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardestCards<'a> {
    /// The highest count seen; zero when no card has mistakes.
    pub mistakes: u32,
    /// Tied cards in collection order. Empty when no card has mistakes.
    pub cards: Vec<&'a Card>,
}

impl HardestCards<'_> {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn terms(&self) -> Vec<&str> {
        self.cards.iter().map(|card| card.term()).collect()
    }
}

/// Find the card or cards answered wrongly most often.
pub fn hardest_cards(deck: &CardCollection) -> HardestCards<'_> {
    let mut result = HardestCards {
        mistakes: 0,
        cards: Vec::new(),
    };

    for card in deck {
        if card.mistakes() > result.mistakes {
            result.mistakes = card.mistakes();
            result.cards.clear();
            result.cards.push(card);
        } else if card.mistakes() != 0 && card.mistakes() == result.mistakes {
            result.cards.push(card);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn deck(cards: &[(&str, &str, u32)]) -> CardCollection {
        let mut deck = CardCollection::new();
        for (term, definition, mistakes) in cards {
            deck.add(term, definition, *mistakes).unwrap();
        }
        deck
    }

    #[test]
    fn single_hardest_card() {
        let deck = deck(&[("cat", "gato", 0), ("dog", "perro", 2)]);
        let hardest = hardest_cards(&deck);
        assert_eq!(hardest.mistakes, 2);
        assert_eq!(hardest.terms(), vec!["dog"]);
    }

    #[test]
    fn empty_after_reset() {
        let mut deck = deck(&[("cat", "gato", 0), ("dog", "perro", 2)]);
        deck.reset_mistakes();
        let hardest = hardest_cards(&deck);
        assert!(hardest.is_empty());
        assert_eq!(hardest.mistakes, 0);
    }

    #[test]
    fn ties_in_collection_order() {
        let deck = deck(&[
            ("a", "1", 3),
            ("b", "2", 1),
            ("c", "3", 3),
            ("d", "4", 0),
            ("e", "5", 3),
        ]);
        let hardest = hardest_cards(&deck);
        assert_eq!(hardest.mistakes, 3);
        assert_eq!(hardest.terms(), vec!["a", "c", "e"]);
    }

    #[test]
    fn higher_count_replaces_ties() {
        let deck = deck(&[("a", "1", 1), ("b", "2", 1), ("c", "3", 5)]);
        assert_eq!(hardest_cards(&deck).terms(), vec!["c"]);
    }

    #[test]
    fn empty_collection() {
        assert!(hardest_cards(&CardCollection::new()).is_empty());
    }
}
