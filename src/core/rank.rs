use crate::core::card::{Card, Value};
use crate::core::card_iter::CardIter;
use crate::core::hand::Hand;

/// All the different possible hand ranks.
/// For each hand rank the u32 corresponds to
/// the strength of the hand in comparison to others
/// of the same rank.
///
/// The derived ordering compares the category first and the
/// tiebreak payload second, so a tiebreak can never promote a hand
/// across a category boundary.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Rank {
    /// The lowest rank.
    /// No matches
    HighCard(u32),
    /// One Card matches another.
    OnePair(u32),
    /// Two different pair of matching cards.
    TwoPair(u32),
    /// Three of the same value.
    ThreeOfAKind(u32),
    /// Five cards in a sequence
    Straight(u32),
    /// Five cards of the same suit
    Flush(u32),
    /// Three of one value and two of another value
    FullHouse(u32),
    /// Four of the same value.
    FourOfAKind(u32),
    /// Five cards in a sequence all of the same suit.
    StraightFlush(u32),
}

/// Bit mask for the wheel (Ace, two, three, four, five)
const WHEEL: u32 = 1 << (Value::Ace as u32)
    | 1 << (Value::Two as u32)
    | 1 << (Value::Three as u32)
    | 1 << (Value::Four as u32)
    | 1 << (Value::Five as u32);

/// Given a bitset of hand ranks. This method
/// will determine if there's a straight, and will give the
/// rank. Wheel is the lowest, broadway is the highest value.
///
/// Returns None if the hand ranks represented don't correspond
/// to a straight.
fn rank_straight(value_set: u32) -> Option<u32> {
    // Example of something with a straight:
    //       0000111111100
    //       0001111111000
    //       0011111110000
    //
    // So there are seven cards and all of them are next to each other.
    let left_edge = value_set.trailing_zeros();
    let peeled = value_set >> left_edge;
    if peeled & 0b11111 == 0b11111 {
        // The wheel uses the Ace as a one, so its high card is the five;
        // it must rank below the six high straight and never reaches
        // the Ace high value.
        Some(left_edge + 1)
    } else if value_set == WHEEL {
        Some(0)
    } else {
        None
    }
}

/// Can this turn into a hand rank?
pub trait Rankable {
    /// The cards to rank.
    fn cards(&self) -> &[Card];

    /// Rank the exactly-five-card hand that `cards()` represents.
    /// It doesn't do any caching so it's left up to the user
    /// to understand that duplicate work will be done if this is
    /// called more than once.
    fn rank(&self) -> Rank {
        let cards = self.cards();
        debug_assert_eq!(5, cards.len());

        // Use for flush bitset
        let mut suit_set: u32 = 0;
        // Use for straight/kicker bitset
        let mut value_set: u32 = 0;
        // How many of each value are in the hand.
        let mut value_counts = [0u8; 13];

        for c in cards {
            suit_set |= 1 << (c.suit as u32);
            value_set |= 1 << (c.value as u32);
            value_counts[c.value as usize] += 1;
        }

        // The major deciding factor for hand rank
        // is the number of unique card values.
        let unique_card_count = value_set.count_ones();

        if unique_card_count == 5 {
            // If there are five different cards it can be a straight,
            // a straight flush, a flush, or just a high card.
            let is_flush = suit_set.count_ones() == 1;
            match (rank_straight(value_set), is_flush) {
                (Some(rank), true) => Rank::StraightFlush(rank),
                (Some(rank), false) => Rank::Straight(rank),
                (None, true) => Rank::Flush(value_set),
                (None, false) => Rank::HighCard(value_set),
            }
        } else if unique_card_count == 2 {
            // This can either be full house, or four of a kind.
            match find_value_with_count(&value_counts, 3) {
                Some(three_value) => {
                    let major_rank = 1 << three_value;
                    // Remove the card that we have three of from the minor rank.
                    let minor_rank = value_set ^ major_rank;
                    Rank::FullHouse(major_rank << 13 | minor_rank)
                }
                None => {
                    // Not a full house so it has to be four of a kind.
                    let quad_value = find_value_with_count(&value_counts, 4)
                        .unwrap_or_default();
                    let major_rank = 1 << quad_value;
                    let minor_rank = value_set ^ major_rank;
                    Rank::FourOfAKind(major_rank << 13 | minor_rank)
                }
            }
        } else if unique_card_count == 3 {
            // This can be three of a kind or two pair.
            match find_value_with_count(&value_counts, 3) {
                Some(three_value) => {
                    let major_rank = 1 << three_value;
                    let minor_rank = value_set ^ major_rank;
                    Rank::ThreeOfAKind(major_rank << 13 | minor_rank)
                }
                None => {
                    // The higher pair dominates the payload bitset, then the
                    // lower pair, then the lone kicker.
                    let major_rank: u32 = value_counts
                        .iter()
                        .enumerate()
                        .filter(|(_, count)| **count == 2)
                        .map(|(value, _)| 1u32 << value)
                        .sum();
                    let minor_rank = value_set ^ major_rank;
                    Rank::TwoPair(major_rank << 13 | minor_rank)
                }
            }
        } else {
            // This is unique_card_count == 4 so it's one pair.
            let pair_value = find_value_with_count(&value_counts, 2).unwrap_or_default();
            let major_rank = 1 << pair_value;
            let minor_rank = value_set ^ major_rank;
            Rank::OnePair(major_rank << 13 | minor_rank)
        }
    }

    /// Rank the best five card hand from five to seven cards.
    ///
    /// Every C(n,5) subset is tried and the maximum kept. The search
    /// stops as soon as a straight flush is found since nothing
    /// outranks it.
    fn rank_best_of(&self) -> Rank {
        let cards = self.cards();
        debug_assert!((5..=7).contains(&cards.len()));

        if cards.len() == 5 {
            return self.rank();
        }

        let mut best = Rank::HighCard(0);
        for combo in CardIter::new(cards.to_vec(), 5) {
            let rank = combo[..].rank();
            if rank > best {
                best = rank;
            }
            if matches!(best, Rank::StraightFlush(_)) {
                break;
            }
        }
        best
    }
}

fn find_value_with_count(value_counts: &[u8; 13], count: u8) -> Option<u32> {
    value_counts
        .iter()
        .position(|c| *c == count)
        .map(|value| value as u32)
}

/// Implementation for `Hand`
impl Rankable for Hand {
    fn cards(&self) -> &[Card] {
        self
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> &[Card] {
        self
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> &[Card] {
        self
    }
}
