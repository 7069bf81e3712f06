use thiserror::Error;

use super::Card;

/// Crate-wide error type. Every failure is detected and reported
/// before any simulation work begins; the estimators themselves
/// have no recoverable failure states.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum AdvisorError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card {0} used more than once across hole and board cards")]
    DuplicateCard(Card),
    #[error("Hold'em players get exactly two hole cards")]
    HoleCardCount,
    #[error("The board can hold at most five cards, got {0}")]
    BoardTooLarge(usize),
    #[error("Player count {0} is outside the supported range of 2 to 9")]
    InvalidPlayerCount(usize),
    #[error("Unable to parse hand range token {0:?}")]
    InvalidRangeSyntax(String),
    #[error("Invalid tournament input: {0}")]
    InvalidTournamentInput(String),
}
