use crate::core::card::Card;

/// Iterator over every `num_cards`-sized combination of a card slice.
///
/// The best-of-seven ranking enumerates all C(7,5) = 21 five card
/// subsets through this; the counts involved are small enough that
/// no pruning is needed.
#[derive(Debug)]
pub struct CardIter {
    /// All the possible cards that can be chosen from.
    possible_cards: Vec<Card>,
    /// Set of current offsets being used to create card sets.
    idx: Vec<usize>,
    /// Size of card sets requested.
    num_cards: usize,
    started: bool,
}

impl CardIter {
    pub fn new(possible_cards: Vec<Card>, num_cards: usize) -> Self {
        Self {
            possible_cards,
            idx: (0..num_cards).collect(),
            num_cards,
            started: false,
        }
    }

    fn advance(&mut self) -> bool {
        let n = self.possible_cards.len();
        // Find the rightmost index that can still move forward.
        for level in (0..self.num_cards).rev() {
            if self.idx[level] < n - (self.num_cards - level) {
                self.idx[level] += 1;
                for next in level + 1..self.num_cards {
                    self.idx[next] = self.idx[next - 1] + 1;
                }
                return true;
            }
        }
        false
    }
}

impl Iterator for CardIter {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.num_cards == 0 || self.num_cards > self.possible_cards.len() {
            return None;
        }
        if self.started && !self.advance() {
            return None;
        }
        self.started = true;
        Some(
            self.idx
                .iter()
                .map(|i| self.possible_cards[*i])
                .collect(),
        )
    }
}
