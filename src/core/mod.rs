//! The core module. Everything in here is agnostic to tournament
//! strategy: cards, decks, hands, and the five card ranking that
//! the equity estimator is built on.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit along with the full deck order.
pub use self::card::{Card, Suit, Value, all_cards};

/// Code related to cards in hands.
mod hand;
pub use self::hand::Hand;

/// We want to be able to iterate over five card combinations.
mod card_iter;
pub use self::card_iter::CardIter;

/// Deck is the normal 52 card deck.
mod deck;
pub use self::deck::Deck;

/// Flattened deck that can be indexed into and shuffled.
mod flat_deck;
pub use self::flat_deck::FlatDeck;

/// 5 card hand ranking code.
mod rank;
pub use self::rank::{Rank, Rankable};

/// The errors that can be encountered.
mod error;
pub use self::error::AdvisorError;
