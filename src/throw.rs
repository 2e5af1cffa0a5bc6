//! Dart throws and board scoring.

use core::fmt;

use crate::Score;
use crate::error::ThrowError;

/// Segment value of the bullseye ring (25 single, 50 double).
pub const BULL: u8 = 25;

/// Highest numbered segment on the board.
pub const MAX_SEGMENT: u8 = 20;

/// Scoring ring a dart landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Multiplier {
    /// Single ring (x1).
    #[default]
    Single,
    /// Double ring (x2).
    Double,
    /// Triple ring (x3).
    Triple,
}

impl Multiplier {
    /// Returns the numeric factor.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }

    /// Returns the multiplier selected after pressing `pressed`.
    ///
    /// Pressing the active multiplier again falls back to [`Multiplier::Single`].
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::Multiplier;
    ///
    /// let selected = Multiplier::Single.toggle(Multiplier::Triple);
    /// assert_eq!(selected, Multiplier::Triple);
    /// assert_eq!(selected.toggle(Multiplier::Triple), Multiplier::Single);
    /// ```
    #[must_use]
    pub fn toggle(self, pressed: Self) -> Self {
        if self == pressed { Self::Single } else { pressed }
    }
}

impl TryFrom<u8> for Multiplier {
    type Error = ThrowError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Single),
            2 => Ok(Self::Double),
            3 => Ok(Self::Triple),
            _ => Err(ThrowError::InvalidMultiplier),
        }
    }
}

/// A single scored dart.
///
/// Throws are immutable once created. A multiplier of `0` marks the bust
/// placeholder recorded for a turn that busted before any dart was kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Throw {
    /// Board segment (0 for a miss, 1 to 20, or 25).
    pub segment: u8,
    /// Multiplier applied to the segment (0 only for the bust placeholder).
    pub multiplier: u8,
    /// `segment * multiplier`.
    pub total_value: u8,
    /// Position within the turn, starting at 1.
    pub sequence: u8,
    /// Creation time in milliseconds.
    pub timestamp: u64,
}

impl Throw {
    /// Scores a dart landing in `segment` with the given `multiplier`.
    ///
    /// # Errors
    ///
    /// Returns [`ThrowError::TripleBull`] for a triple bullseye,
    /// [`ThrowError::InvalidSegment`] for a segment that is not on the board,
    /// and [`ThrowError::InvalidMultiplier`] for a multiplier outside `1..=3`.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::{Throw, ThrowError};
    ///
    /// let dart = Throw::score(20, 3, 1, 0).unwrap();
    /// assert_eq!(dart.total_value, 60);
    /// assert_eq!(Throw::score(25, 3, 1, 0), Err(ThrowError::TripleBull));
    /// ```
    pub fn score(
        segment: u8,
        multiplier: u8,
        sequence: u8,
        timestamp: u64,
    ) -> Result<Self, ThrowError> {
        let factor = Multiplier::try_from(multiplier)?.value();

        if segment > MAX_SEGMENT && segment != BULL {
            return Err(ThrowError::InvalidSegment);
        }

        if segment == BULL && factor == 3 {
            return Err(ThrowError::TripleBull);
        }

        Ok(Self {
            segment,
            multiplier: factor,
            total_value: segment * factor,
            sequence,
            timestamp,
        })
    }

    /// Creates the placeholder recorded for a bust with no kept darts.
    #[must_use]
    pub const fn bust_placeholder(timestamp: u64) -> Self {
        Self {
            segment: 0,
            multiplier: 0,
            total_value: 0,
            sequence: 1,
            timestamp,
        }
    }

    /// Returns whether this is the bust placeholder rather than a real dart.
    #[must_use]
    pub const fn is_bust_placeholder(&self) -> bool {
        self.multiplier == 0
    }
}

impl fmt::Display for Throw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.multiplier {
            0 => f.write_str("BUST"),
            2 => write!(f, "D{}", self.segment),
            3 => write!(f, "T{}", self.segment),
            _ => write!(f, "{}", self.segment),
        }
    }
}

/// Sums the scored value of a slice of throws.
#[must_use]
pub fn total(throws: &[Throw]) -> Score {
    throws.iter().map(|t| Score::from(t.total_value)).sum()
}
