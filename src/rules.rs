//! Per-throw rule evaluation.

use crate::Score;
use crate::options::GameMode;
use crate::round::MAX_THROWS;

/// What a throw means for the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// Keep throwing.
    Continue,
    /// The round holds three throws and can be confirmed.
    AutoAdvance,
    /// The turn busts and scores nothing.
    Bust,
    /// The player has won.
    Finish,
}

/// Evaluates the pending round of a player currently on `score`.
///
/// `round_sum` and `round_len` describe the round including the newest throw.
/// Standard mode busts below zero or on exactly one, since a one cannot be
/// checked out on a double. Count up finishes on reaching or passing the
/// target.
///
/// # Example
///
/// ```
/// use dartrs::{GameMode, Verdict, rules};
///
/// assert_eq!(rules::evaluate(GameMode::Standard, 301, 40, 40, 2), Verdict::Finish);
/// assert_eq!(rules::evaluate(GameMode::Standard, 301, 40, 39, 1), Verdict::Bust);
/// assert_eq!(rules::evaluate(GameMode::CountUp, 50, 0, 60, 3), Verdict::Finish);
/// ```
#[must_use]
pub const fn evaluate(
    mode: GameMode,
    target: Score,
    score: Score,
    round_sum: Score,
    round_len: usize,
) -> Verdict {
    let projected = mode.apply(score, round_sum);

    match mode {
        GameMode::CountUp if projected >= target => return Verdict::Finish,
        GameMode::Standard if projected < 0 || projected == 1 => return Verdict::Bust,
        GameMode::Standard if projected == 0 => return Verdict::Finish,
        _ => {}
    }

    if round_len >= MAX_THROWS {
        Verdict::AutoAdvance
    } else {
        Verdict::Continue
    }
}
