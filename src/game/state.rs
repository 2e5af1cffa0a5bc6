//! Match state types.

/// Match state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchState {
    /// Waiting for the current player's next throw.
    AwaitingThrow,
    /// The current player has thrown three darts and the round can be confirmed.
    RoundComplete,
    /// A player has won. No further changes are accepted.
    Finished,
    /// The match was cancelled. No further changes are accepted.
    Abandoned,
}

impl MatchState {
    /// Returns whether the match no longer accepts changes.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Finished | Self::Abandoned)
    }
}
