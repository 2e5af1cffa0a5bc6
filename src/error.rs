//! Error types for match operations.

use thiserror::Error;

/// Errors that can occur while scoring or recording a throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ThrowError {
    /// The match is finished or abandoned.
    #[error("invalid match state for throwing")]
    InvalidState,
    /// Three throws are already pending for this turn.
    #[error("round already holds three throws")]
    RoundFull,
    /// Triple bullseye does not exist on the board.
    #[error("triple bullseye does not exist")]
    TripleBull,
    /// Segment is not on the board.
    #[error("segment is not on the board")]
    InvalidSegment,
    /// Multiplier is not single, double, or triple.
    #[error("multiplier must be 1, 2, or 3")]
    InvalidMultiplier,
}

/// Errors that can occur while confirming or undoing the pending round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The match is finished or abandoned.
    #[error("invalid match state for this turn action")]
    InvalidState,
}

/// Errors that can occur while editing the turn history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// The match is finished or abandoned.
    #[error("invalid match state for editing history")]
    InvalidState,
    /// Turn index is out of bounds.
    #[error("turn index out of bounds")]
    InvalidIndex,
    /// A turn cannot hold more than three darts.
    #[error("a turn holds at most three darts")]
    TooManyDarts,
    /// Turn refers to a player that is not in the match.
    #[error("turn refers to an unknown player")]
    UnknownPlayer,
    /// An edited dart does not score on the board.
    #[error("invalid dart: {0}")]
    InvalidThrow(#[from] ThrowError),
}

/// Errors that can occur while setting up a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// No players were supplied.
    #[error("a match needs at least one player")]
    NoPlayers,
    /// Target score is not positive.
    #[error("target score must be positive")]
    InvalidTarget,
    /// A selected player id is not in the roster.
    #[error("selected player is not in the roster")]
    UnknownPlayer,
}
