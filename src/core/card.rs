use std::fmt;
use std::mem;
use std::str::FromStr;

use crate::core::AdvisorError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Take a u8 and convert it to a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use tourney_advisor::core::Value;
    /// assert_eq!(Value::Four, Value::from_u8(Value::Four as u8));
    /// ```
    pub fn from_u8(v: u8) -> Self {
        unsafe { mem::transmute(v.min(12)) }
    }

    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck, or
    /// generating all possible starting hands.
    pub fn values() -> [Self; 13] {
        VALUES
    }

    /// Given a character parse that char into a value.
    /// Case is ignored as long as the char is in the
    /// valid alphabet of `2-9`, `T`, `J`, `Q`, `K`, or `A`.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::Ace),
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'J' => Some(Self::Jack),
            'T' => Some(Self::Ten),
            '9' => Some(Self::Nine),
            '8' => Some(Self::Eight),
            '7' => Some(Self::Seven),
            '6' => Some(Self::Six),
            '5' => Some(Self::Five),
            '4' => Some(Self::Four),
            '3' => Some(Self::Three),
            '2' => Some(Self::Two),
            _ => None,
        }
    }

    /// Convert this value to its canonical upper case char.
    pub fn to_char(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::Ten => 'T',
            Self::Nine => '9',
            Self::Eight => '8',
            Self::Seven => '7',
            Self::Six => '6',
            Self::Five => '5',
            Self::Four => '4',
            Self::Three => '3',
            Self::Two => '2',
        }
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Self; 4] {
        SUITS
    }

    /// Translate a char into a `Suit`. Case is ignored;
    /// the canonical form is lower case.
    pub fn from_char(s: char) -> Option<Self> {
        match s.to_ascii_lowercase() {
            'd' => Some(Self::Diamond),
            's' => Some(Self::Spade),
            'h' => Some(Self::Heart),
            'c' => Some(Self::Club),
            _ => None,
        }
    }

    /// This Suit to its canonical lower case char.
    pub fn to_char(self) -> char {
        match self {
            Self::Diamond => 'd',
            Self::Spade => 's',
            Self::Heart => 'h',
            Self::Club => 'c',
        }
    }
}

/// The core card type. This is a carrier for Suit and Value combined.
///
/// Equality, ordering, and hashing all come from the
/// `(value, suit)` pair and nothing else.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card from a value and a suit.
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Parse a two character string like `"Ah"` into a card.
    /// The rank character is normalized to upper case and the suit
    /// character to lower case, so `"ah"` and `"AH"` parse the same.
    ///
    /// # Examples
    ///
    /// ```
    /// use tourney_advisor::core::{Card, Suit, Value};
    ///
    /// let card = Card::try_parse("Ah").unwrap();
    /// assert_eq!(Card::new(Value::Ace, Suit::Heart), card);
    /// assert!(Card::try_parse("1h").is_err());
    /// assert!(Card::try_parse("Ahh").is_err());
    /// ```
    pub fn try_parse(card_str: &str) -> Result<Self, AdvisorError> {
        let mut chars = card_str.chars();
        let value = chars
            .next()
            .ok_or(AdvisorError::TooFewChars)
            .and_then(|c| Value::from_char(c).ok_or(AdvisorError::UnexpectedValueChar))?;
        let suit = chars
            .next()
            .ok_or(AdvisorError::TooFewChars)
            .and_then(|c| Suit::from_char(c).ok_or(AdvisorError::UnexpectedSuitChar))?;
        if chars.next().is_some() {
            return Err(AdvisorError::UnparsedCharsRemaining);
        }
        Ok(Self { value, suit })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

/// Every card in the deck, in a fixed value-major order.
/// The order is stable so tests that iterate cards are reproducible.
pub fn all_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for v in &Value::values() {
        for s in &Suit::suits() {
            cards.push(Card::new(*v, *s));
        }
    }
    cards
}
