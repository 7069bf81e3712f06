//! Independent Chip Model equity, bubble pressure, and push/fold
//! thresholds for tournament play.
//!
//! Tournament chips are not cash: the model converts a stack
//! distribution plus a payout ladder into each player's share of the
//! remaining prize pool. The equity here is the proportional model,
//! which keeps the invariant that the per player equities always sum
//! to the whole pool.

use std::collections::HashMap;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::sync::Mutex;

use lru::LruCache;
use tracing::debug;

use crate::core::AdvisorError;

/// How many distinct (stacks, payouts) inputs to keep memoized.
const EQUITY_CACHE_SIZE: usize = 128;

/// A seat at a nine handed table, ordered by when it acts preflop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    Utg,
    UtgPlusOne,
    Mp,
    MpPlusOne,
    Hj,
    Co,
    Btn,
    Sb,
    Bb,
}

impl Seat {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Utg => "utg",
            Self::UtgPlusOne => "utg+1",
            Self::Mp => "mp",
            Self::MpPlusOne => "mp+1",
            Self::Hj => "hj",
            Self::Co => "co",
            Self::Btn => "btn",
            Self::Sb => "sb",
            Self::Bb => "bb",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Seat {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utg" => Ok(Self::Utg),
            "utg+1" => Ok(Self::UtgPlusOne),
            "mp" => Ok(Self::Mp),
            "mp+1" => Ok(Self::MpPlusOne),
            "hj" => Ok(Self::Hj),
            "co" => Ok(Self::Co),
            "btn" => Ok(Self::Btn),
            "sb" => Ok(Self::Sb),
            "bb" => Ok(Self::Bb),
            other => Err(AdvisorError::InvalidTournamentInput(format!(
                "unknown seat {other:?}"
            ))),
        }
    }
}

/// The current blind level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Blinds {
    pub small: u32,
    pub big: u32,
}

/// Minimum hand strengths for shoving and for calling a shove, per
/// seat, on the unit interval.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct PushFoldThresholds {
    pub push: f64,
    pub call: f64,
}

/// ICM equity and pressure calculator.
///
/// Equity results are memoized behind a mutex so one calculator can
/// be shared across threads; computing a table of push/fold
/// thresholds re-evaluates the same stack distribution once per
/// player otherwise.
pub struct IcmCalculator {
    cache: Mutex<LruCache<(Vec<u32>, Vec<u32>), Vec<f64>>>,
}

impl Default for IcmCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl IcmCalculator {
    pub fn new() -> Self {
        let capacity = NonZeroUsize::new(EQUITY_CACHE_SIZE).unwrap();
        Self {
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Each player's share of the remaining prize pool, in payout
    /// units, proportional to their share of the chips in play.
    ///
    /// The returned vector lines up with `stacks` and always sums to
    /// the total of `payouts`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tourney_advisor::icm::IcmCalculator;
    ///
    /// let icm = IcmCalculator::new();
    /// let eq = icm.equity(&[1000, 1000, 1000], &[100, 50, 25]).unwrap();
    /// assert!((eq.iter().sum::<f64>() - 175.0).abs() < 1e-9);
    /// ```
    pub fn equity(&self, stacks: &[u32], payouts: &[u32]) -> Result<Vec<f64>, AdvisorError> {
        validate_stacks(stacks)?;

        let key = (stacks.to_vec(), payouts.to_vec());
        if let Some(hit) = self.cache.lock().unwrap().get(&key) {
            return Ok(hit.clone());
        }

        let pool: f64 = payouts.iter().map(|p| f64::from(*p)).sum();
        let total: f64 = stacks.iter().map(|s| f64::from(*s)).sum();
        let equities: Vec<f64> = stacks
            .iter()
            .map(|s| f64::from(*s) / total * pool)
            .collect();
        debug!(players = stacks.len(), pool, "computed icm equities");

        self.cache.lock().unwrap().put(key, equities.clone());
        Ok(equities)
    }

    /// How much of one player's tournament life is at stake right
    /// now, on the unit interval.
    ///
    /// The pressure compares the equity lost by dropping to half the
    /// current stack against the equity gained by doubling it. A
    /// player whose doubling gains nothing (already holding every
    /// chip) is under maximal pressure.
    pub fn pressure(
        &self,
        stacks: &[u32],
        payouts: &[u32],
        player: usize,
    ) -> Result<f64, AdvisorError> {
        validate_stacks(stacks)?;
        if player >= stacks.len() {
            return Err(AdvisorError::InvalidTournamentInput(format!(
                "player index {player} out of range for {} stacks",
                stacks.len()
            )));
        }

        let current = self.equity(stacks, payouts)?[player];

        let mut halved = stacks.to_vec();
        halved[player] = (stacks[player] / 2).max(1);
        let half = self.equity(&halved, payouts)?[player];

        let mut doubled = stacks.to_vec();
        doubled[player] = stacks[player] * 2;
        let double = self.equity(&doubled, payouts)?[player];

        let risk = current - half;
        let reward = double - current;
        if reward <= 0.0 {
            return Ok(1.0);
        }
        Ok((risk / (risk + reward)).clamp(0.0, 1.0))
    }

    /// Unexploitable-style push/fold thresholds for every seat.
    ///
    /// Starts from a per seat baseline, loosens the push side and
    /// tightens the call side as stacks get shorter, then tightens
    /// both sides by ICM pressure when a payout ladder is supplied.
    /// Thresholds are capped at 0.9 so no seat becomes unplayable.
    pub fn nash_push_fold(
        &self,
        stacks: &[u32],
        seats: &[Seat],
        blinds: Blinds,
        payouts: Option<&[u32]>,
    ) -> Result<HashMap<Seat, PushFoldThresholds>, AdvisorError> {
        validate_stacks(stacks)?;
        if stacks.len() != seats.len() {
            return Err(AdvisorError::InvalidTournamentInput(format!(
                "{} stacks for {} seats",
                stacks.len(),
                seats.len()
            )));
        }
        if blinds.big == 0 {
            return Err(AdvisorError::InvalidTournamentInput(
                "big blind must be positive".to_string(),
            ));
        }

        let mut table = HashMap::with_capacity(seats.len());
        for (idx, (&seat, &stack)) in seats.iter().zip(stacks).enumerate() {
            let (base_push, base_call) = seat_baseline(seat);
            let depth_bb = f64::from(stack) / f64::from(blinds.big);
            let (push_scale, call_scale) = depth_scaling(depth_bb);

            let mut push = base_push * push_scale;
            let mut call = base_call * call_scale;

            if let Some(payouts) = payouts {
                let pressure = self.pressure(stacks, payouts, idx)?;
                let tighten = 1.0 + 0.3 * pressure;
                push *= tighten;
                call *= tighten;
            }

            table.insert(
                seat,
                PushFoldThresholds {
                    push: push.min(0.9),
                    call: call.min(0.9),
                },
            );
        }
        Ok(table)
    }

    #[cfg(test)]
    fn cache_len(&self) -> usize {
        self.cache.lock().unwrap().len()
    }
}

fn validate_stacks(stacks: &[u32]) -> Result<(), AdvisorError> {
    if stacks.is_empty() {
        return Err(AdvisorError::InvalidTournamentInput(
            "at least one stack is required".to_string(),
        ));
    }
    if stacks.iter().any(|s| *s == 0) {
        return Err(AdvisorError::InvalidTournamentInput(
            "stacks must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Baseline (push, call) strengths per seat. Earlier seats need more
/// to shove into a table full of players still to act; the big blind
/// closes the action so it calls wider than it pushes.
fn seat_baseline(seat: Seat) -> (f64, f64) {
    match seat {
        Seat::Utg => (0.70, 0.75),
        Seat::UtgPlusOne => (0.65, 0.75),
        Seat::Mp => (0.60, 0.70),
        Seat::MpPlusOne => (0.58, 0.68),
        Seat::Hj => (0.55, 0.65),
        Seat::Co => (0.52, 0.65),
        Seat::Btn => (0.50, 0.65),
        Seat::Sb => (0.55, 0.70),
        Seat::Bb => (0.60, 0.60),
    }
}

/// Stack depth scaling for (push, call). Short stacks push wider but
/// call tighter; deep stacks do the reverse.
fn depth_scaling(depth_bb: f64) -> (f64, f64) {
    if depth_bb < 5.0 {
        (0.70, 1.10)
    } else if depth_bb < 10.0 {
        (0.80, 1.05)
    } else if depth_bb < 15.0 {
        (0.90, 1.00)
    } else {
        (1.00, 0.95)
    }
}
