use std::ops::{Deref, Index, RangeFrom, RangeFull, RangeTo};

use crate::core::card::{Card, Suit, Value};
use crate::core::error::AdvisorError;

/// A hand of cards: the player's hole cards, optionally extended
/// with community cards for ranking. Order is preserved but carries
/// no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create the default empty hand.
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(7),
        }
    }

    /// Create a hand with the cards specified.
    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// From a string create a hand.
    ///
    /// The string is read two characters at a time as `"rank suit"`
    /// pairs, case-normalized. A repeated card is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tourney_advisor::core::Hand;
    ///
    /// let hand = Hand::new_from_str("AdKd").unwrap();
    /// assert_eq!(2, hand.len());
    /// assert!(Hand::new_from_str("AdAd").is_err());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, AdvisorError> {
        let mut chars = hand_string.chars();
        let mut cards = Vec::with_capacity(hand_string.len() / 2);

        while let Some(vco) = chars.next() {
            let value = Value::from_char(vco).ok_or(AdvisorError::UnexpectedValueChar)?;
            let suit = chars
                .next()
                .and_then(Suit::from_char)
                .ok_or(AdvisorError::UnexpectedSuitChar)?;

            let c = Card::new(value, suit);
            if cards.contains(&c) {
                return Err(AdvisorError::DuplicateCard(c));
            }
            cards.push(c);
        }

        Ok(Self { cards })
    }

    /// Add a card to the hand. No duplicate checking is done here.
    pub fn push(&mut self, c: Card) {
        self.cards.push(c);
    }

    /// Truncate the hand back down to `len` cards. Used to strip
    /// community cards off between simulation trials.
    pub fn truncate(&mut self, len: usize) {
        self.cards.truncate(len)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Deref for Hand {
    type Target = [Card];
    fn deref(&self) -> &[Card] {
        &self.cards
    }
}

impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}
impl Index<RangeTo<usize>> for Hand {
    type Output = [Card];
    fn index(&self, index: RangeTo<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFrom<usize>> for Hand {
    type Output = [Card];
    fn index(&self, index: RangeFrom<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFull> for Hand {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
