//! Committed turn records.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::Score;
use crate::round::MAX_THROWS;
use crate::throw::Throw;

/// A completed turn in the match log.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    /// 1-based position in the log, kept dense.
    pub turn_number: usize,
    /// Index of the player in the match.
    pub player_index: usize,
    /// Player name at the time of the turn.
    pub player_name: String,
    /// Darts recorded for the turn.
    pub darts: Vec<Throw>,
    /// Score applied by the turn (0 for a bust).
    pub turn_score: Score,
    /// Player score before the turn.
    pub score_before: Score,
    /// Player score after the turn.
    pub score_after: Score,
    /// Whether the turn busted.
    pub is_bust: bool,
}

impl Turn {
    /// Returns how many darts this turn charges to the player.
    ///
    /// A bust always consumes a full turn.
    #[must_use]
    pub fn darts_charged(&self) -> u32 {
        if self.is_bust {
            MAX_THROWS as u32
        } else {
            self.darts.len() as u32
        }
    }
}
