//! Match engine and state management.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::Score;
use crate::checkout;
use crate::clock::Clock;
use crate::error::SetupError;
use crate::options::{GameMode, MatchOptions};
use crate::player::{Player, RosterEntry};
use crate::result::MatchResult;
use crate::round::Round;
use crate::turn::Turn;

mod history;
pub mod state;
mod throws;

pub use state::MatchState;

/// A darts match that tracks scores, the pending round, and the turn log.
///
/// The match owns every player's state for its lifetime. It is changed only
/// through throws, round confirmation, undo, and turn history edits, and it
/// stops accepting changes once a player wins or the match is abandoned.
pub struct Match {
    /// Match options.
    options: MatchOptions,
    /// Current match state.
    state: MatchState,
    /// Players in seating order.
    players: Vec<Player>,
    /// Index of the player at the oche.
    current_player: usize,
    /// Throws of the current player not yet committed.
    round: Round,
    /// Committed turns, oldest first.
    turns: Vec<Turn>,
    /// Match start in milliseconds.
    started_at: u64,
    /// Set once a player wins.
    result: Option<MatchResult>,
    /// Timestamp source.
    clock: Box<dyn Clock + Send>,
}

impl Match {
    /// Creates a match for `roster` using the system clock.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster is empty or the target is not positive.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::{Match, MatchOptions, RosterEntry};
    ///
    /// let roster = [RosterEntry::new("1", "Ann"), RosterEntry::new("2", "Bo")];
    /// let game = Match::new(MatchOptions::default(), &roster).unwrap();
    /// assert_eq!(game.players()[1].score, 301);
    /// ```
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn new(options: MatchOptions, roster: &[RosterEntry]) -> Result<Self, SetupError> {
        Self::with_clock(options, roster, crate::clock::SystemClock)
    }

    /// Creates a match for `roster` reading timestamps from `clock`.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster is empty or the target is not positive.
    pub fn with_clock<C>(
        options: MatchOptions,
        roster: &[RosterEntry],
        clock: C,
    ) -> Result<Self, SetupError>
    where
        C: Clock + Send + 'static,
    {
        if roster.is_empty() {
            return Err(SetupError::NoPlayers);
        }

        if options.target <= 0 {
            return Err(SetupError::InvalidTarget);
        }

        let start = options.starting_score();
        let players = roster
            .iter()
            .map(|entry| Player::from_entry(entry, start))
            .collect();
        let started_at = clock.now_millis();

        log::info!(
            "starting {:?} match to {} with {} players",
            options.mode,
            options.target,
            roster.len()
        );

        Ok(Self {
            options,
            state: MatchState::AwaitingThrow,
            players,
            current_player: 0,
            round: Round::new(),
            turns: Vec::new(),
            started_at,
            result: None,
            clock: Box::new(clock),
        })
    }

    /// Returns the match options.
    #[must_use]
    pub const fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Returns the current match state.
    #[must_use]
    pub const fn state(&self) -> MatchState {
        self.state
    }

    /// Returns whether the match is finished or abandoned.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Returns all players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `index`.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns the index of the player whose turn it is.
    #[must_use]
    pub const fn current_player_index(&self) -> usize {
        self.current_player
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Returns the pending round.
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the committed turn log.
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Returns the match start in milliseconds.
    #[must_use]
    pub const fn started_at(&self) -> u64 {
        self.started_at
    }

    /// Returns the result once a player has won.
    #[must_use]
    pub const fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Returns what the current player still needs, counting pending throws.
    ///
    /// In standard mode this is the score left to check out; in count up mode
    /// it is the distance to the target.
    #[must_use]
    pub fn remaining(&self) -> Score {
        let player = self.current_player();
        match self.options.mode {
            GameMode::Standard => player.score - self.round.sum(),
            GameMode::CountUp => self.options.target - (player.score + self.round.sum()),
        }
    }

    /// Returns a checkout suggestion for the current player.
    ///
    /// Always `None` in count up mode, which has no double-out rule.
    #[must_use]
    pub fn checkout_suggestion(&self) -> Option<String> {
        match self.options.mode {
            GameMode::Standard => checkout::suggest(self.remaining()),
            GameMode::CountUp => None,
        }
    }

    /// Abandons the match, discarding the pending round.
    ///
    /// Abandoning an already finished match has no effect.
    pub fn abandon(&mut self) {
        if self.state == MatchState::Finished {
            return;
        }
        self.round.clear();
        self.state = MatchState::Abandoned;
        log::info!("match abandoned after {} turns", self.turns.len());
    }

    fn now(&self) -> u64 {
        self.clock.now_millis()
    }
}

impl fmt::Debug for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("players", &self.players)
            .field("current_player", &self.current_player)
            .field("round", &self.round)
            .field("turns", &self.turns)
            .field("started_at", &self.started_at)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}
