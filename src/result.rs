//! Match result types handed to persistence and upload collaborators.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::Score;
use crate::options::GameMode;
use crate::player::Player;
use crate::turn::Turn;

/// Final state of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    /// Roster id of the winner.
    pub winner_id: String,
    /// Index of the winner in `players`.
    pub winner_index: usize,
    /// Scoring mode of the match.
    pub mode: GameMode,
    /// Target score of the match.
    pub target: Score,
    /// Match start in milliseconds.
    pub started_at: u64,
    /// Match end in milliseconds.
    pub finished_at: u64,
    /// Final player snapshots, in seating order.
    pub players: Vec<Player>,
    /// The complete turn log, including the finishing turn.
    pub turns: Vec<Turn>,
}

impl MatchResult {
    /// Returns the winner's final snapshot.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.players.get(self.winner_index)
    }
}

/// Result of recording one throw.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThrowOutcome {
    /// The throw counted and the player keeps throwing.
    Continue,
    /// The round holds three throws; confirm it now or after a delay.
    AutoAdvance,
    /// The turn busted and play has moved to the next player.
    Bust(Turn),
    /// The player won and the match is over.
    Finish(MatchResult),
}

impl ThrowOutcome {
    /// Returns the match result if this throw finished the match.
    #[must_use]
    pub const fn result(&self) -> Option<&MatchResult> {
        match self {
            Self::Finish(result) => Some(result),
            _ => None,
        }
    }

    /// Returns the recorded turn if this throw busted.
    #[must_use]
    pub const fn bust(&self) -> Option<&Turn> {
        match self {
            Self::Bust(turn) => Some(turn),
            _ => None,
        }
    }
}
