use std::collections::HashMap;
use std::fmt;

use crate::core::{AdvisorError, Card, Suit, Value};

/// Enum to represent how the suits of a starting hand correspond to
/// each other. `Suitedness::Suited` means both cards share a suit,
/// `Suitedness::OffSuit` means they don't, and `Suitedness::Any`
/// makes no promises.
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Clone, Copy)]
pub enum Suitedness {
    /// Both cards are the same suit
    Suited,
    /// The cards are different suits
    OffSuit,
    /// No promises about suit.
    Any,
}

/// An unordered pair of distinct hole cards belonging to one player.
///
/// The pair is canonicalized on construction (higher card first) so
/// that equality and hashing treat `(As, Kh)` and `(Kh, As)` as the
/// same hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HoleCards {
    high: Card,
    low: Card,
}

impl HoleCards {
    /// Pair two cards up. The same card twice is rejected.
    pub fn new(a: Card, b: Card) -> Result<Self, AdvisorError> {
        if a == b {
            return Err(AdvisorError::DuplicateCard(a));
        }
        Ok(Self {
            high: a.max(b),
            low: a.min(b),
        })
    }

    /// The higher of the two cards.
    pub fn high(&self) -> Card {
        self.high
    }

    /// The lower of the two cards.
    pub fn low(&self) -> Card {
        self.low
    }

    /// Both cards, high card first.
    pub fn cards(&self) -> [Card; 2] {
        [self.high, self.low]
    }

    pub fn is_pair(&self) -> bool {
        self.high.value == self.low.value
    }

    pub fn is_suited(&self) -> bool {
        self.high.suit == self.low.suit
    }

    /// The canonical lookup key for this starting hand, high rank
    /// first with an `s` suffix for suited non-pairs: `"A-K"`,
    /// `"A-Ks"`, `"T-T"`.
    pub fn lookup_key(&self) -> String {
        let mut key = format!("{}-{}", self.high.value.to_char(), self.low.value.to_char());
        if self.is_suited() && !self.is_pair() {
            key.push('s');
        }
        key
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high, self.low)
    }
}

/// Playability class of a starting hand, as carried by the external
/// starting hand lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandClass {
    /// Playable from any position.
    Any,
    /// Playable from middle or late position.
    MidLate,
    /// Playable from late position only.
    Late,
    /// Not worth opening.
    Unplayable,
}

impl HandClass {
    /// Loosen the class by one step. Used to credit suitedness.
    fn upgraded(self) -> Self {
        match self {
            Self::Any | Self::MidLate => Self::Any,
            Self::Late => Self::MidLate,
            Self::Unplayable => Self::Late,
        }
    }

    /// Classify a starting hand against a read-only lookup table keyed
    /// by [`HoleCards::lookup_key`] style keys without the suited
    /// suffix. Suited non-pairs get bumped up one class. Hands missing
    /// from the table are unplayable.
    pub fn classify(hole: &HoleCards, table: &HashMap<String, HandClass>) -> Self {
        let key = format!(
            "{}-{}",
            hole.high().value.to_char(),
            hole.low().value.to_char()
        );
        match table.get(&key) {
            Some(class) if hole.is_suited() && !hole.is_pair() => class.upgraded(),
            Some(class) => *class,
            None => Self::Unplayable,
        }
    }
}

/// `StartingHand` represents the two card starting hand of texas
/// holdem by value and suitedness only. It can generate all the
/// concrete card combinations it stands for.
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Clone, Copy)]
pub struct StartingHand {
    /// The higher value.
    high: Value,
    /// The lower value.
    low: Value,
    /// Should we only consider starting hands of the same suit?
    suited: Suitedness,
}

impl StartingHand {
    /// Create a starting hand from two values and a suitedness.
    /// The values are reordered so the higher one leads.
    pub fn new(value_one: Value, value_two: Value, suited: Suitedness) -> Self {
        Self {
            high: value_one.max(value_two),
            low: value_one.min(value_two),
            suited,
        }
    }

    pub fn high(&self) -> Value {
        self.high
    }

    pub fn low(&self) -> Value {
        self.low
    }

    /// Is this starting hand a pocket pair?
    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    /// Create a new vector of all suited hands.
    fn create_suited(&self) -> Vec<HoleCards> {
        // Can't have a suited pair. Not unless you're cheating.
        if self.is_pair() {
            return vec![];
        }
        Suit::suits()
            .iter()
            .filter_map(|s| {
                HoleCards::new(Card::new(self.high, *s), Card::new(self.low, *s)).ok()
            })
            .collect()
    }

    /// Append all the off suit hands to the passed in vec and
    /// then return it.
    fn append_offsuit(&self, mut hands: Vec<HoleCards>) -> Vec<HoleCards> {
        let suits = Suit::suits();
        for (i, suit_one) in suits.iter().enumerate() {
            for suit_two in &suits[i + 1..] {
                if let Ok(hole) =
                    HoleCards::new(Card::new(self.high, *suit_one), Card::new(self.low, *suit_two))
                {
                    hands.push(hole);
                }
                // If this isn't a pair then the flipped suits is needed.
                if !self.is_pair() {
                    if let Ok(hole) = HoleCards::new(
                        Card::new(self.high, *suit_two),
                        Card::new(self.low, *suit_one),
                    ) {
                        hands.push(hole);
                    }
                }
            }
        }
        hands
    }

    /// Create a new vector of all the off suit hands.
    fn create_offsuit(&self) -> Vec<HoleCards> {
        // Since the values are the same there is no reason to swap the suits.
        let expected_hands = if self.is_pair() { 6 } else { 12 };
        self.append_offsuit(Vec::with_capacity(expected_hands))
    }

    /// Get all the concrete hole card combinations represented by
    /// this starting hand.
    pub fn combos(&self) -> Vec<HoleCards> {
        match self.suited {
            Suitedness::Suited => self.create_suited(),
            Suitedness::OffSuit => self.create_offsuit(),
            Suitedness::Any => self.append_offsuit(self.create_suited()),
        }
    }

    /// Create every possible unique StartingHand.
    pub fn all() -> Vec<Self> {
        let mut hands = Vec::with_capacity(169);
        let values = Value::values();
        for (i, value_one) in values.iter().enumerate() {
            for value_two in &values[i..] {
                hands.push(Self::new(*value_one, *value_two, Suitedness::Any));
            }
        }
        hands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aces() {
        let sh = StartingHand::new(Value::Ace, Value::Ace, Suitedness::OffSuit);
        assert_eq!(6, sh.combos().len());
    }

    #[test]
    fn test_suited_connector() {
        let sh = StartingHand::new(Value::Ace, Value::King, Suitedness::Suited);
        assert_eq!(4, sh.combos().len());
    }

    #[test]
    fn test_unsuited_connector() {
        let sh = StartingHand::new(Value::Ace, Value::King, Suitedness::OffSuit);
        assert_eq!(12, sh.combos().len());
    }

    #[test]
    fn test_starting_hand_count() {
        let num_to_test: usize = StartingHand::all().iter().map(|h| h.combos().len()).sum();
        assert_eq!(1326, num_to_test);
    }

    #[test]
    fn test_hole_cards_unordered() {
        let a = Card::new(Value::Ace, Suit::Spade);
        let k = Card::new(Value::King, Suit::Heart);
        assert_eq!(HoleCards::new(a, k).unwrap(), HoleCards::new(k, a).unwrap());
    }

    #[test]
    fn test_hole_cards_reject_same_card() {
        let a = Card::new(Value::Ace, Suit::Spade);
        assert_eq!(
            Err(AdvisorError::DuplicateCard(a)),
            HoleCards::new(a, a).map(|_| ())
        );
    }

    #[test]
    fn test_lookup_key() {
        let suited = HoleCards::new(
            Card::new(Value::King, Suit::Spade),
            Card::new(Value::Ace, Suit::Spade),
        )
        .unwrap();
        assert_eq!("A-Ks", suited.lookup_key());

        let pair = HoleCards::new(
            Card::new(Value::Ten, Suit::Spade),
            Card::new(Value::Ten, Suit::Heart),
        )
        .unwrap();
        assert_eq!("T-T", pair.lookup_key());
    }

    #[test]
    fn test_classify_suited_upgrade() {
        let mut table = HashMap::new();
        table.insert("A-K".to_string(), HandClass::MidLate);

        let offsuit = HoleCards::new(
            Card::new(Value::Ace, Suit::Spade),
            Card::new(Value::King, Suit::Heart),
        )
        .unwrap();
        let suited = HoleCards::new(
            Card::new(Value::Ace, Suit::Spade),
            Card::new(Value::King, Suit::Spade),
        )
        .unwrap();

        assert_eq!(HandClass::MidLate, HandClass::classify(&offsuit, &table));
        assert_eq!(HandClass::Any, HandClass::classify(&suited, &table));
    }

    #[test]
    fn test_classify_missing_hand() {
        let table = HashMap::new();
        let hole = HoleCards::new(
            Card::new(Value::Seven, Suit::Spade),
            Card::new(Value::Two, Suit::Heart),
        )
        .unwrap();
        assert_eq!(HandClass::Unplayable, HandClass::classify(&hole, &table));
    }
}
