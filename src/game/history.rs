use alloc::vec::Vec;

use crate::error::HistoryError;
use crate::replay;
use crate::round::MAX_THROWS;
use crate::throw::{self, Throw};
use crate::turn::Turn;

use super::Match;

impl Match {
    fn ensure_editable(&self) -> Result<(), HistoryError> {
        if self.state.is_over() {
            return Err(HistoryError::InvalidState);
        }
        Ok(())
    }

    /// Replaces the darts of the turn at `index` and recalculates the match.
    ///
    /// Each dart is scored again from its segment and multiplier, so the
    /// stored values always match the board. The edited turn always counts as a clean, non-bust turn scoring the sum
    /// of `darts`. Every player's score, dart count, and history, and every
    /// turn's before/after snapshot, are then rebuilt by replaying the log.
    /// The replay trusts stored turn scores, so an edit that would have busted
    /// or finished in live play is accepted as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is over, `index` is out of bounds, more
    /// than three darts are supplied, or a dart does not score on the board.
    pub fn edit_turn(&mut self, index: usize, darts: Vec<Throw>) -> Result<(), HistoryError> {
        self.ensure_editable()?;

        if darts.len() > MAX_THROWS {
            return Err(HistoryError::TooManyDarts);
        }

        let mut turns = self.turns.clone();
        let turn = turns.get_mut(index).ok_or(HistoryError::InvalidIndex)?;

        turn.darts = darts
            .into_iter()
            .zip(1..)
            .map(|(dart, sequence)| {
                Throw::score(dart.segment, dart.multiplier, sequence, dart.timestamp)
            })
            .collect::<Result<Vec<_>, _>>()?;
        turn.turn_score = throw::total(&turn.darts);
        turn.is_bust = false;

        log::debug!("editing turn {} to score {}", turn.turn_number, turn.turn_score);
        self.rebuild(&turns)
    }

    /// Removes the turn at `index` and recalculates the match from the start.
    ///
    /// Later turns are renumbered so numbering stays dense. Returns the removed
    /// turn, which can be put back with [`Match::insert_turn`].
    ///
    /// # Errors
    ///
    /// Returns an error if the match is over or `index` is out of bounds.
    pub fn delete_turn(&mut self, index: usize) -> Result<Turn, HistoryError> {
        self.ensure_editable()?;

        if index >= self.turns.len() {
            return Err(HistoryError::InvalidIndex);
        }

        let mut turns = self.turns.clone();
        let removed = turns.remove(index);
        self.rebuild(&turns)?;

        log::debug!("deleted turn {} of {}", removed.turn_number, removed.player_name);
        Ok(removed)
    }

    /// Inserts `turn` at `index` and recalculates the match from the start.
    ///
    /// The turn keeps its player, darts, score, and bust flag; its number and
    /// snapshots are recomputed along with every other turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is over, `index` is past the end of the
    /// log, the turn holds more than three darts, or it refers to a player
    /// that is not in the match.
    pub fn insert_turn(&mut self, index: usize, turn: Turn) -> Result<(), HistoryError> {
        self.ensure_editable()?;

        if index > self.turns.len() {
            return Err(HistoryError::InvalidIndex);
        }

        if turn.darts.len() > MAX_THROWS {
            return Err(HistoryError::TooManyDarts);
        }

        let mut turns = self.turns.clone();
        turns.insert(index, turn);
        self.rebuild(&turns)
    }

    /// Replays `turns` from the starting state and adopts the outcome.
    fn rebuild(&mut self, turns: &[Turn]) -> Result<(), HistoryError> {
        let starting = replay::starting_players(&self.options, &self.players);
        let replayed = replay::replay(&self.options, &starting, turns)?;

        self.players = replayed.players;
        self.turns = replayed.turns;
        Ok(())
    }
}
