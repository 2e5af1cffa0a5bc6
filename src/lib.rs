//! A darts scoring engine with optional `no_std` support.
//!
//! The crate provides a [`Match`] type that scores throws for standard
//! (countdown, double-out bust rules) and count up games, keeps an editable
//! turn history that is recalculated by replay, and suggests checkouts.
//!
//! # Example
//!
//! ```
//! use dartrs::{FixedClock, Match, MatchOptions, RosterEntry, ThrowOutcome};
//!
//! let roster = [RosterEntry::new("1", "Ann"), RosterEntry::new("2", "Bo")];
//! let options = MatchOptions::default().with_target(501);
//! let mut game = Match::with_clock(options, &roster, FixedClock::new(0)).unwrap();
//!
//! game.throw_dart(20, 3).unwrap();
//! game.throw_dart(20, 3).unwrap();
//! assert_eq!(game.throw_dart(20, 3).unwrap(), ThrowOutcome::AutoAdvance);
//!
//! let turn = game.confirm_round().unwrap();
//! assert_eq!(turn.score_after, 321);
//! assert_eq!(game.current_player().name, "Bo");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod checkout;
pub mod clock;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod replay;
pub mod result;
pub mod round;
pub mod rules;
pub mod throw;
pub mod turn;

/// Score type used for running totals and turn scores.
///
/// Signed because replaying edited history can take a standard-mode score
/// below zero.
pub type Score = i32;

// Re-export main types
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, FixedClock};
pub use error::{HistoryError, SetupError, ThrowError, TurnError};
pub use game::{Match, MatchState};
pub use options::{GameMode, MatchOptions, STANDARD_TARGETS};
pub use player::{Player, RosterEntry};
pub use replay::Replay;
pub use result::{MatchResult, ThrowOutcome};
pub use round::{MAX_THROWS, Round};
pub use rules::Verdict;
pub use throw::{BULL, Multiplier, Throw};
pub use turn::Turn;
