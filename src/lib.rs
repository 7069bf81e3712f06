//! Poker tournament advisory toolkit.
//!
//! The crate is split into three layers. [`core`] has the card,
//! deck, and hand ranking machinery and knows nothing about
//! strategy. [`holdem`] builds starting hand ranges, Monte Carlo
//! equity estimation, and the threshold based action advisor on top
//! of it. [`icm`] converts tournament stacks and payout ladders into
//! prize pool equity, bubble pressure, and push/fold thresholds.
//!
//! ```
//! use tourney_advisor::holdem::{Action, Advisor, EquitySimulator, Position, TournamentStage};
//!
//! let simulator = EquitySimulator::new();
//! let hole = [
//!     "As".parse().unwrap(),
//!     "Ad".parse().unwrap(),
//! ];
//! let strength = simulator.estimate(&hole, 6, &[], None).unwrap();
//!
//! let advisor = Advisor::new();
//! let action = advisor.recommend(
//!     strength,
//!     Position::Middle,
//!     Some(12),
//!     TournamentStage::Middle,
//!     None,
//! );
//! assert_eq!(Action::AllIn, action);
//! ```

/// Allow all the core poker functionality to be used externally.
/// Everything in core should be agnostic to poker style.
pub mod core;
/// Allow all the holdem specific code to be used externally.
pub mod holdem;
/// Tournament equity modeling.
pub mod icm;
