use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::core::AdvisorError;

/// The discrete actions the advisor can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Action {
    Fold,
    Call,
    Raise,
    AllIn,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fold => write!(f, "Fold"),
            Self::Call => write!(f, "Call"),
            Self::Raise => write!(f, "Raise"),
            Self::AllIn => write!(f, "All-In"),
        }
    }
}

/// Coarse table position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Early,
    #[default]
    Middle,
    Late,
}

impl FromStr for Position {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "early" => Ok(Self::Early),
            "middle" => Ok(Self::Middle),
            "late" => Ok(Self::Late),
            other => Err(AdvisorError::InvalidTournamentInput(format!(
                "unknown position {other:?}"
            ))),
        }
    }
}

/// Where the tournament currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStage {
    Early,
    #[default]
    Middle,
    Bubble,
    Final,
}

/// One equity threshold, in both calibration scales.
///
/// Calibrated ("direct") strengths live near the top of the unit
/// interval; sampled Monte Carlo strengths for playable hands sit
/// much lower, so every decision row carries a second cutoff for
/// them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ThresholdPair {
    pub direct: f64,
    pub sampled: f64,
}

impl ThresholdPair {
    const fn new(direct: f64, sampled: f64) -> Self {
        Self { direct, sampled }
    }

    /// Does the strength clear this threshold once the tightening
    /// scale is applied?
    fn met(&self, strength: f64, sampled: bool, scale: f64) -> bool {
        strength > self.direct * scale || (sampled && strength > self.sampled * scale)
    }
}

/// Raise/call cutoffs for one position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct PositionRow {
    pub raise: ThresholdPair,
    pub call: ThresholdPair,
}

/// Raise/call cutoffs across the three positions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct PositionTable {
    pub early: PositionRow,
    pub middle: PositionRow,
    pub late: PositionRow,
}

impl PositionTable {
    fn row(&self, position: Position) -> &PositionRow {
        match position {
            Position::Early => &self.early,
            Position::Middle => &self.middle,
            Position::Late => &self.late,
        }
    }
}

/// Short stacks have no raise size left; the row collapses raising
/// into moving all-in, with a looser cutoff from late position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ShortStackRow {
    pub all_in: ThresholdPair,
    pub late_all_in: ThresholdPair,
}

/// Medium stacks raise on strength and flat-call only outside early
/// position, with an extra loose call row for late position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct MediumStackRow {
    pub raise: ThresholdPair,
    pub call_mid_late: ThresholdPair,
    pub call_late: ThresholdPair,
}

/// How much each tournament stage tightens (>1) or loosens (<1)
/// every threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct StageFactors {
    pub early: f64,
    pub middle: f64,
    pub bubble: f64,
    pub final_table: f64,
}

impl StageFactors {
    fn factor(&self, stage: TournamentStage) -> f64 {
        match stage {
            TournamentStage::Early => self.early,
            TournamentStage::Middle => self.middle,
            TournamentStage::Bubble => self.bubble,
            TournamentStage::Final => self.final_table,
        }
    }
}

/// The complete decision table. Every cutoff and bucket boundary the
/// advisor uses lives here so the policy is inspectable and tunable
/// as one artifact.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct AdvisorConfig {
    /// Strength above this bypasses the table entirely.
    pub premium_strength: f64,
    /// At or below this many big blinds a premium hand shoves
    /// instead of raising.
    pub premium_shove_bb: u32,
    /// Strengths below this are treated as sampled Monte Carlo
    /// estimates rather than calibrated constants.
    pub sampled_cutoff: f64,
    /// Upper bound of the short stack bucket, in big blinds.
    pub short_stack_bb: u32,
    /// Upper bound of the medium stack bucket, in big blinds.
    pub medium_stack_bb: u32,
    /// Threshold scaling per tournament stage.
    pub stage_factors: StageFactors,
    /// How strongly ICM pressure tightens thresholds when supplied.
    pub pressure_weight: f64,
    /// Decision rows when no stack depth is known.
    pub unknown_stack: PositionTable,
    /// Decision rows for stacks above the medium bucket.
    pub large_stack: PositionTable,
    pub medium_stack: MediumStackRow,
    pub short_stack: ShortStackRow,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            premium_strength: 0.75,
            premium_shove_bb: 15,
            sampled_cutoff: 0.7,
            short_stack_bb: 10,
            medium_stack_bb: 20,
            stage_factors: StageFactors {
                early: 1.1,
                middle: 1.0,
                bubble: 1.2,
                final_table: 0.9,
            },
            pressure_weight: 0.5,
            unknown_stack: PositionTable {
                early: PositionRow {
                    raise: ThresholdPair::new(0.70, 0.35),
                    call: ThresholdPair::new(0.50, 0.28),
                },
                middle: PositionRow {
                    raise: ThresholdPair::new(0.65, 0.32),
                    call: ThresholdPair::new(0.45, 0.25),
                },
                late: PositionRow {
                    raise: ThresholdPair::new(0.60, 0.30),
                    call: ThresholdPair::new(0.40, 0.22),
                },
            },
            large_stack: PositionTable {
                early: PositionRow {
                    raise: ThresholdPair::new(0.70, 0.35),
                    call: ThresholdPair::new(0.55, 0.30),
                },
                middle: PositionRow {
                    raise: ThresholdPair::new(0.65, 0.32),
                    call: ThresholdPair::new(0.50, 0.27),
                },
                late: PositionRow {
                    raise: ThresholdPair::new(0.60, 0.30),
                    call: ThresholdPair::new(0.45, 0.23),
                },
            },
            medium_stack: MediumStackRow {
                raise: ThresholdPair::new(0.65, 0.32),
                call_mid_late: ThresholdPair::new(0.50, 0.28),
                call_late: ThresholdPair::new(0.40, 0.24),
            },
            short_stack: ShortStackRow {
                all_in: ThresholdPair::new(0.50, 0.30),
                late_all_in: ThresholdPair::new(0.45, 0.25),
            },
        }
    }
}

/// Stateless action recommendation from equity plus table context.
///
/// Each call is one lookup into the configured decision table; no
/// state is carried between calls.
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    config: AdvisorConfig,
}

impl Advisor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AdvisorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Recommend an action for a hand of the given strength.
    ///
    /// `stack_bb` selects the stack-depth bucket when known. The
    /// tournament stage tightens thresholds toward the bubble and
    /// loosens them at the final table; an explicit ICM pressure
    /// value takes precedence over the stage factor.
    ///
    /// # Examples
    ///
    /// ```
    /// use tourney_advisor::holdem::{Action, Advisor, Position, TournamentStage};
    ///
    /// let advisor = Advisor::new();
    /// let action = advisor.recommend(
    ///     0.5,
    ///     Position::Early,
    ///     Some(10),
    ///     TournamentStage::Middle,
    ///     None,
    /// );
    /// assert_eq!(Action::AllIn, action);
    /// ```
    pub fn recommend(
        &self,
        strength: f64,
        position: Position,
        stack_bb: Option<u32>,
        stage: TournamentStage,
        icm_pressure: Option<f64>,
    ) -> Action {
        let cfg = &self.config;

        // Premium hands bypass the table: shove short, raise deep.
        if strength > cfg.premium_strength {
            return match stack_bb {
                Some(bb) if bb <= cfg.premium_shove_bb => Action::AllIn,
                _ => Action::Raise,
            };
        }

        let scale = match icm_pressure {
            Some(p) => 1.0 + cfg.pressure_weight * p.clamp(0.0, 1.0),
            None => cfg.stage_factors.factor(stage),
        };
        let sampled = strength < cfg.sampled_cutoff;
        debug!(strength, ?position, ?stack_bb, scale, "advising action");

        match stack_bb {
            None => Self::from_row(cfg.unknown_stack.row(position), strength, sampled, scale),
            Some(bb) if bb <= cfg.short_stack_bb => {
                let row = &cfg.short_stack;
                if row.all_in.met(strength, sampled, scale) {
                    Action::AllIn
                } else if position == Position::Late
                    && row.late_all_in.met(strength, sampled, scale)
                {
                    Action::AllIn
                } else {
                    Action::Fold
                }
            }
            Some(bb) if bb <= cfg.medium_stack_bb => {
                let row = &cfg.medium_stack;
                if row.raise.met(strength, sampled, scale) {
                    Action::Raise
                } else if position != Position::Early
                    && row.call_mid_late.met(strength, sampled, scale)
                {
                    Action::Call
                } else if position == Position::Late
                    && row.call_late.met(strength, sampled, scale)
                {
                    Action::Call
                } else {
                    Action::Fold
                }
            }
            Some(_) => Self::from_row(cfg.large_stack.row(position), strength, sampled, scale),
        }
    }

    fn from_row(row: &PositionRow, strength: f64, sampled: bool, scale: f64) -> Action {
        if row.raise.met(strength, sampled, scale) {
            Action::Raise
        } else if row.call.met(strength, sampled, scale) {
            Action::Call
        } else {
            Action::Fold
        }
    }
}

/// One line description of a hand strength for advisory text.
pub fn describe_strength(strength: f64) -> &'static str {
    if strength > 0.8 {
        "This is a very strong hand!"
    } else if strength > 0.6 {
        "This is a good hand."
    } else if strength > 0.4 {
        "This is a marginal hand. Consider the pot odds."
    } else {
        "This is a weak hand. Be cautious."
    }
}

/// One line description of a stack depth for advisory text.
pub fn describe_stack(big_blinds: u32) -> String {
    if big_blinds <= 10 {
        format!("With {big_blinds} BB, you're in push/fold territory.")
    } else if big_blinds <= 20 {
        format!("With {big_blinds} BB, be selective with your hands.")
    } else {
        format!("With {big_blinds} BB, you have room to play strategically.")
    }
}
