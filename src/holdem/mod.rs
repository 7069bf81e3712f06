//! Texas holdem specific functionality: starting hand abstractions,
//! range notation, Monte Carlo equity estimation, and the action
//! advisor that sits on top of them.

/// Starting hand abstractions over values and suitedness.
mod starting_hand;
pub use self::starting_hand::{HandClass, HoleCards, StartingHand, Suitedness};

/// Range notation parsing, `"22+"` and friends.
mod range;
pub use self::range::HandRange;

/// Monte Carlo equity estimation.
mod monte_carlo;
pub use self::monte_carlo::{EquitySimulator, SimulatorConfig};

/// Threshold table driven action recommendations.
mod advisor;
pub use self::advisor::{
    Action, Advisor, AdvisorConfig, MediumStackRow, Position, PositionRow, PositionTable,
    ShortStackRow, StageFactors, ThresholdPair, TournamentStage, describe_stack,
    describe_strength,
};
