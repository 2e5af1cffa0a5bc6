//! Turn log replay.
//!
//! Replay rebuilds every player's score, dart count, and history from a
//! turn log by reapplying each turn's stored `turn_score` in order. It trusts
//! the stored deltas: bust and finish rules are not re-checked, so an edited
//! log that would have busted in live play is accepted as given.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::HistoryError;
use crate::options::MatchOptions;
use crate::player::Player;
use crate::turn::Turn;

/// Output of a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    /// Player states after the last turn.
    pub players: Vec<Player>,
    /// The turn log renumbered with fresh before/after snapshots.
    pub turns: Vec<Turn>,
}

/// Returns `players` reset to the start of a match under `options`.
#[must_use]
pub fn starting_players(options: &MatchOptions, players: &[Player]) -> Vec<Player> {
    let start = options.starting_score();
    players.iter().map(|player| player.reset(start)).collect()
}

/// Replays `turns` on top of `starting`.
///
/// # Errors
///
/// Returns [`HistoryError::UnknownPlayer`] if a turn refers to a player index
/// outside `starting`.
///
/// # Example
///
/// ```
/// use dartrs::{MatchOptions, Player, RosterEntry, replay};
///
/// let options = MatchOptions::default().with_target(301);
/// let start = [Player::from_entry(&RosterEntry::new("a", "Ann"), 301)];
/// let out = replay::replay(&options, &start, &[]).unwrap();
/// assert_eq!(out.players[0].score, 301);
/// ```
pub fn replay(
    options: &MatchOptions,
    starting: &[Player],
    turns: &[Turn],
) -> Result<Replay, HistoryError> {
    let mut players = starting.to_vec();
    let mut annotated = Vec::with_capacity(turns.len());

    for (index, turn) in turns.iter().enumerate() {
        let player = players
            .get_mut(turn.player_index)
            .ok_or(HistoryError::UnknownPlayer)?;

        let score_before = player.score;
        let score_after = options.mode.apply(score_before, turn.turn_score);
        player.record(score_after, turn.darts_charged(), &turn.darts);

        annotated.push(Turn {
            turn_number: index + 1,
            score_before,
            score_after,
            ..turn.clone()
        });
    }

    log::debug!("replayed {} turns for {} players", annotated.len(), players.len());

    Ok(Replay {
        players,
        turns: annotated,
    })
}
