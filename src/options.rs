//! Match configuration options.

use crate::Score;

/// Conventional starting scores offered by setup screens.
pub const STANDARD_TARGETS: [Score; 4] = [301, 501, 701, 1001];

/// How scores move toward the finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameMode {
    /// Count down from the target to exactly zero, with bust rules.
    #[default]
    Standard,
    /// Count up from zero until the target is reached or passed.
    CountUp,
}

impl GameMode {
    /// Returns the score every player starts a match with.
    #[must_use]
    pub const fn starting_score(self, target: Score) -> Score {
        match self {
            Self::Standard => target,
            Self::CountUp => 0,
        }
    }

    /// Applies a turn's score to a running total.
    #[must_use]
    pub const fn apply(self, score: Score, delta: Score) -> Score {
        match self {
            Self::Standard => score - delta,
            Self::CountUp => score + delta,
        }
    }
}

/// Configuration options for a darts match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use dartrs::{GameMode, MatchOptions};
///
/// let options = MatchOptions::default()
///     .with_mode(GameMode::Standard)
///     .with_target(501);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchOptions {
    /// Scoring mode.
    pub mode: GameMode,
    /// Starting score (standard) or score to reach (count up).
    pub target: Score,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            mode: GameMode::Standard,
            target: 301,
        }
    }
}

impl MatchOptions {
    /// Sets the scoring mode.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::{GameMode, MatchOptions};
    ///
    /// let options = MatchOptions::default().with_mode(GameMode::CountUp);
    /// assert_eq!(options.mode, GameMode::CountUp);
    /// ```
    #[must_use]
    pub const fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the target score.
    ///
    /// Any positive value is accepted; [`STANDARD_TARGETS`] lists the usual ones.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_target(701);
    /// assert_eq!(options.target, 701);
    /// ```
    #[must_use]
    pub const fn with_target(mut self, target: Score) -> Self {
        self.target = target;
        self
    }

    /// Returns the score every player starts with under these options.
    #[must_use]
    pub const fn starting_score(&self) -> Score {
        self.mode.starting_score(self.target)
    }
}
