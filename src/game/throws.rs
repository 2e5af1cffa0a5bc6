use alloc::vec::Vec;

use crate::error::{ThrowError, TurnError};
use crate::result::{MatchResult, ThrowOutcome};
use crate::rules::{self, Verdict};
use crate::throw::{self, Throw};
use crate::turn::Turn;

use super::{Match, MatchState};

impl Match {
    fn ensure_accepting_throws(&self) -> Result<(), ThrowError> {
        match self.state {
            MatchState::AwaitingThrow => Ok(()),
            MatchState::RoundComplete => Err(ThrowError::RoundFull),
            MatchState::Finished | MatchState::Abandoned => Err(ThrowError::InvalidState),
        }
    }

    /// Records a dart for the current player and applies the game rules.
    ///
    /// On [`ThrowOutcome::AutoAdvance`] the round is full and waits for
    /// [`Match::confirm_round`]; the caller decides whether to confirm at once
    /// or after a pause. A bust or a finish is committed before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is over, three throws are already
    /// pending, or the segment and multiplier do not score (for example a
    /// triple bullseye). Rejected throws leave the match unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::{FixedClock, Match, MatchOptions, RosterEntry, ThrowOutcome};
    ///
    /// let roster = [RosterEntry::new("1", "Ann")];
    /// let mut game = Match::with_clock(MatchOptions::default(), &roster, FixedClock::new(0)).unwrap();
    /// assert_eq!(game.throw_dart(20, 3).unwrap(), ThrowOutcome::Continue);
    /// assert_eq!(game.remaining(), 241);
    /// ```
    pub fn throw_dart(&mut self, segment: u8, multiplier: u8) -> Result<ThrowOutcome, ThrowError> {
        self.ensure_accepting_throws()?;

        let dart = Throw::score(segment, multiplier, self.round.next_sequence(), self.now())?;
        if !self.round.add_throw(dart) {
            return Err(ThrowError::RoundFull);
        }

        let player = &self.players[self.current_player];
        let verdict = rules::evaluate(
            self.options.mode,
            self.options.target,
            player.score,
            self.round.sum(),
            self.round.len(),
        );

        log::debug!("{} threw {} ({:?})", player.name, dart, verdict);

        let outcome = match verdict {
            Verdict::Continue => ThrowOutcome::Continue,
            Verdict::AutoAdvance => {
                self.state = MatchState::RoundComplete;
                ThrowOutcome::AutoAdvance
            }
            Verdict::Bust => {
                // The busting dart is not kept.
                self.round.remove_last();
                ThrowOutcome::Bust(self.bust())
            }
            Verdict::Finish => ThrowOutcome::Finish(self.finish()),
        };

        Ok(outcome)
    }

    /// Commits the pending round as a turn and passes play to the next player.
    ///
    /// An empty round is committed as a turn scoring nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is over.
    pub fn confirm_round(&mut self) -> Result<Turn, TurnError> {
        if self.state.is_over() {
            return Err(TurnError::InvalidState);
        }

        let darts = self.round.take();
        let turn = self.commit(darts, false);
        log::debug!(
            "turn {} confirmed for {}: {} -> {}",
            turn.turn_number,
            turn.player_name,
            turn.score_before,
            turn.score_after
        );
        self.advance();
        Ok(turn)
    }

    /// Removes the most recent pending throw.
    ///
    /// Committed turns are never touched; use the history operations for
    /// those. Returns `None` when the round is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is over.
    pub fn undo_last_dart(&mut self) -> Result<Option<Throw>, TurnError> {
        if self.state.is_over() {
            return Err(TurnError::InvalidState);
        }

        let removed = self.round.remove_last();
        self.state = MatchState::AwaitingThrow;
        Ok(removed)
    }

    fn bust(&mut self) -> Turn {
        let mut darts = self.round.take();
        if darts.is_empty() {
            darts.push(Throw::bust_placeholder(self.now()));
        }

        let turn = self.commit(darts, true);
        log::info!("{} busted on {}", turn.player_name, turn.score_before);
        self.advance();
        turn
    }

    fn finish(&mut self) -> MatchResult {
        let darts = self.round.take();
        let turn = self.commit(darts, false);
        self.state = MatchState::Finished;

        let winner = &self.players[self.current_player];
        log::info!(
            "{} won after {} darts with a score of {}",
            winner.name,
            winner.darts_thrown,
            turn.score_after
        );

        let result = MatchResult {
            winner_id: winner.id.clone(),
            winner_index: self.current_player,
            mode: self.options.mode,
            target: self.options.target,
            started_at: self.started_at,
            finished_at: self.now(),
            players: self.players.clone(),
            turns: self.turns.clone(),
        };
        self.result = Some(result.clone());
        result
    }

    /// Appends a turn for the current player and applies it to their state.
    fn commit(&mut self, darts: Vec<Throw>, is_bust: bool) -> Turn {
        let mode = self.options.mode;
        let player = &mut self.players[self.current_player];

        let turn_score = if is_bust { 0 } else { throw::total(&darts) };
        let score_before = player.score;
        let score_after = mode.apply(score_before, turn_score);

        let turn = Turn {
            turn_number: self.turns.len() + 1,
            player_index: self.current_player,
            player_name: player.name.clone(),
            darts,
            turn_score,
            score_before,
            score_after,
            is_bust,
        };
        player.record(score_after, turn.darts_charged(), &turn.darts);

        self.turns.push(turn.clone());
        turn
    }

    fn advance(&mut self) {
        self.current_player = (self.current_player + 1) % self.players.len();
        self.state = MatchState::AwaitingThrow;
    }
}
