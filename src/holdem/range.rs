use std::collections::BTreeSet;
use std::iter::Peekable;
use std::str::Chars;

use rand::Rng;

use crate::core::{AdvisorError, Value};
use crate::holdem::starting_hand::{HoleCards, StartingHand, Suitedness};

/// A set of concrete two card starting hands, expanded from range
/// notation like `"22+"`, `"ATs+"`, `"AKo"`, or `"AA,KK"`.
///
/// The expansion is deduplicated and kept in a deterministic order so
/// repeated parses of the same notation always agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandRange {
    combos: Vec<HoleCards>,
}

impl HandRange {
    /// Parse a comma separated range specification.
    ///
    /// Grammar per token, where `R`/`r` are rank characters:
    ///
    /// * `RR`: every suit combination of the pair, 6 combos.
    /// * `RR+`: that pair and every higher pair, up to aces.
    /// * `Rrs`: the 4 suited combos of the two ranks.
    /// * `Rrs+`: suited combos for every low rank from `r` up to
    ///   (excluding) `R`.
    /// * `Rro` / `Rro+`: the offsuit analogues, 12 combos per rank
    ///   pair.
    /// * `Rr` / `Rr+`: the union of the suited and offsuit combos.
    ///
    /// # Examples
    ///
    /// ```
    /// use tourney_advisor::holdem::HandRange;
    ///
    /// assert_eq!(6, HandRange::parse("AA").unwrap().len());
    /// assert_eq!(4, HandRange::parse("AKs").unwrap().len());
    /// assert_eq!(12, HandRange::parse("AKo").unwrap().len());
    /// assert_eq!(30, HandRange::parse("TT+").unwrap().len());
    /// ```
    pub fn parse(range_str: &str) -> Result<Self, AdvisorError> {
        let mut set: BTreeSet<HoleCards> = BTreeSet::new();
        for token in range_str.split(',') {
            let token = token.trim();
            for hand in parse_token(token)? {
                set.extend(hand.combos());
            }
        }
        Ok(Self {
            combos: set.into_iter().collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.combos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }

    pub fn contains(&self, hole: &HoleCards) -> bool {
        self.combos.binary_search(hole).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HoleCards> {
        self.combos.iter()
    }

    /// Draw one hand uniformly at random from the expanded range.
    /// Returns `None` for an empty range.
    ///
    /// This is an opponent-modeling convenience: the draw ignores
    /// which cards are still live, so it is not exact
    /// range-versus-range equity.
    pub fn sample_one<R: Rng>(&self, rng: &mut R) -> Option<HoleCards> {
        if self.combos.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.combos.len());
        Some(self.combos[idx])
    }
}

impl<'a> IntoIterator for &'a HandRange {
    type Item = &'a HoleCards;
    type IntoIter = std::slice::Iter<'a, HoleCards>;

    fn into_iter(self) -> Self::IntoIter {
        self.combos.iter()
    }
}

/// Parse a single range token into the starting hands it covers.
fn parse_token(token: &str) -> Result<Vec<StartingHand>, AdvisorError> {
    let syntax_err = || AdvisorError::InvalidRangeSyntax(token.to_string());

    let mut iter = token.chars().peekable();
    let value_one = next_value(&mut iter).ok_or_else(syntax_err)?;
    let value_two = next_value(&mut iter).ok_or_else(syntax_err)?;

    let mut suited = Suitedness::Any;
    match iter.peek() {
        Some('s') => {
            suited = Suitedness::Suited;
            iter.next();
        }
        Some('o') => {
            suited = Suitedness::OffSuit;
            iter.next();
        }
        _ => {}
    }

    let plus = matches!(iter.peek(), Some('+'));
    if plus {
        iter.next();
    }
    if iter.next().is_some() {
        return Err(syntax_err());
    }

    let is_pair = value_one == value_two;
    // There's no such thing as a suited pair.
    if is_pair && suited == Suitedness::Suited {
        return Err(syntax_err());
    }

    let high = value_one.max(value_two);
    let low = value_one.min(value_two);

    let mut hands = vec![];
    if !plus {
        hands.push(StartingHand::new(high, low, suited));
    } else if is_pair {
        // Every pair from this rank upward, aces included.
        for v in (low as u8)..=(Value::Ace as u8) {
            let value = Value::from_u8(v);
            hands.push(StartingHand::new(value, value, suited));
        }
    } else {
        // Walk the low card up toward (but excluding) the high card.
        for v in (low as u8)..(high as u8) {
            hands.push(StartingHand::new(high, Value::from_u8(v), suited));
        }
    }
    Ok(hands)
}

fn next_value(iter: &mut Peekable<Chars>) -> Option<Value> {
    let value = iter.peek().copied().and_then(Value::from_char)?;
    iter.next();
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_pair_combo_count() {
        assert_eq!(6, HandRange::parse("AA").unwrap().len());
    }

    #[test]
    fn test_suited_combo_count() {
        assert_eq!(4, HandRange::parse("AKs").unwrap().len());
    }

    #[test]
    fn test_offsuit_combo_count() {
        assert_eq!(12, HandRange::parse("AKo").unwrap().len());
    }

    #[test]
    fn test_any_combo_count() {
        // Suited plus offsuit.
        assert_eq!(16, HandRange::parse("AK").unwrap().len());
    }

    #[test]
    fn test_pair_plus() {
        // TT, JJ, QQ, KK, AA at six combos each.
        assert_eq!(30, HandRange::parse("TT+").unwrap().len());
        assert_eq!(6, HandRange::parse("AA+").unwrap().len());
    }

    #[test]
    fn test_suited_plus() {
        // ATs, AJs, AQs, AKs.
        assert_eq!(16, HandRange::parse("ATs+").unwrap().len());
        // AKs+ is just AKs.
        assert_eq!(4, HandRange::parse("AKs+").unwrap().len());
    }

    #[test]
    fn test_offsuit_plus() {
        assert_eq!(48, HandRange::parse("ATo+").unwrap().len());
    }

    #[test]
    fn test_comma_separated_union() {
        let range = HandRange::parse("AA,KK").unwrap();
        assert_eq!(12, range.len());
        // Same thing expressed as a plus range.
        assert_eq!(HandRange::parse("KK+").unwrap(), range);
    }

    #[test]
    fn test_overlap_deduplicates() {
        let range = HandRange::parse("QQ+,KK,AA").unwrap();
        assert_eq!(18, range.len());
    }

    #[test]
    fn test_reversed_ranks_normalize() {
        assert_eq!(
            HandRange::parse("AKs").unwrap(),
            HandRange::parse("KAs").unwrap()
        );
    }

    #[test]
    fn test_invalid_tokens() {
        for bad in ["", "A", "ZZ", "AAs", "AKx", "AKs+junk"] {
            assert!(
                matches!(
                    HandRange::parse(bad),
                    Err(AdvisorError::InvalidRangeSyntax(_))
                ),
                "{bad:?} should fail to parse"
            );
        }
    }

    #[test]
    fn test_sample_one_in_range() {
        let range = HandRange::parse("22+").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let hole = range.sample_one(&mut rng).unwrap();
            assert!(range.contains(&hole));
            assert!(hole.is_pair());
        }
    }

    #[test]
    fn test_sample_one_empty() {
        let range = HandRange { combos: vec![] };
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(None, range.sample_one(&mut rng));
    }

    #[test]
    fn test_deterministic_order() {
        let one = HandRange::parse("TT+,ATs+").unwrap();
        let two = HandRange::parse("ATs+,TT+").unwrap();
        assert_eq!(one, two);
    }
}
