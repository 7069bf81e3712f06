use std::collections::HashSet;
use std::collections::hash_set::{IntoIter, Iter};

use crate::core::card::{Card, all_cards};
use crate::core::error::AdvisorError;

/// Deck struct that can tell quickly if a card is in the deck.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Card storage.
    /// Used to figure out quickly
    /// if this card is in the deck.
    cards: HashSet<Card>,
}

impl Deck {
    /// Create the full 52 card deck.
    ///
    /// ```
    /// use tourney_advisor::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        Self {
            cards: all_cards().into_iter().collect(),
        }
    }

    /// Build the available deck: the full 52 cards minus every card that
    /// is already visible (hole cards plus known board cards). Any card
    /// appearing twice in `used` is reported as a duplicate, so this
    /// doubles as the duplicate-card validation gate.
    ///
    /// # Examples
    ///
    /// ```
    /// use tourney_advisor::core::{Card, Deck};
    ///
    /// let hole = [Card::try_parse("As").unwrap(), Card::try_parse("Ah").unwrap()];
    /// let deck = Deck::available_after(&hole).unwrap();
    /// assert_eq!(50, deck.len());
    /// ```
    pub fn available_after(used: &[Card]) -> Result<Self, AdvisorError> {
        let mut deck = Self::new();
        for card in used {
            if !deck.remove(card) {
                return Err(AdvisorError::DuplicateCard(*card));
            }
        }
        Ok(deck)
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Given a card remove it from the deck if it is present.
    pub fn remove(&mut self, c: &Card) -> bool {
        self.cards.remove(c)
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get an iterator from this deck
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> IntoIter<Card> {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Suit, Value};

    #[test]
    fn test_contains_in() {
        let d = Deck::new();
        assert!(d.contains(&Card::new(Value::Eight, Suit::Heart)));
    }

    #[test]
    fn test_remove() {
        let mut d = Deck::new();
        let c = Card::new(Value::Ace, Suit::Heart);
        assert!(d.contains(&c));
        assert!(d.remove(&c));
        assert!(!d.contains(&c));
        assert!(!d.remove(&c));
    }

    #[test]
    fn test_available_after() {
        let used = [
            Card::new(Value::Ace, Suit::Heart),
            Card::new(Value::Ace, Suit::Spade),
            Card::new(Value::King, Suit::Club),
        ];
        let deck = Deck::available_after(&used).unwrap();
        assert_eq!(49, deck.len());
        for c in &used {
            assert!(!deck.contains(c));
        }
    }

    #[test]
    fn test_available_after_duplicate() {
        let c = Card::new(Value::Queen, Suit::Diamond);
        assert_eq!(
            Err(AdvisorError::DuplicateCard(c)),
            Deck::available_after(&[c, c]).map(|_| ())
        );
    }
}
