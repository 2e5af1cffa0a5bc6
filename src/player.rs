//! Roster entries and in-match player state.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::Score;
use crate::error::SetupError;
use crate::throw::Throw;

/// A player identity supplied by the roster at match start.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterEntry {
    /// Stable player id.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl RosterEntry {
    /// Creates a roster entry.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Picks the entries for `selected_ids` out of `roster`, in selection order.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::UnknownPlayer`] if an id is not in the roster.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::RosterEntry;
    ///
    /// let roster = [RosterEntry::new("a", "Ann"), RosterEntry::new("b", "Bo")];
    /// let picked = RosterEntry::select(&roster, &["b", "a"]).unwrap();
    /// assert_eq!(picked[0].name, "Bo");
    /// ```
    pub fn select<S: AsRef<str>>(
        roster: &[Self],
        selected_ids: &[S],
    ) -> Result<Vec<Self>, SetupError> {
        selected_ids
            .iter()
            .map(|id| {
                roster
                    .iter()
                    .find(|entry| entry.id == id.as_ref())
                    .cloned()
                    .ok_or(SetupError::UnknownPlayer)
            })
            .collect()
    }
}

/// A player's state within one match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// Roster id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Current score.
    pub score: Score,
    /// Darts charged to this player, three for every bust.
    pub darts_thrown: u32,
    /// Every committed dart, in order.
    pub history: Vec<Throw>,
}

impl Player {
    /// Creates a fresh player from a roster entry.
    #[must_use]
    pub fn from_entry(entry: &RosterEntry, starting_score: Score) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            score: starting_score,
            darts_thrown: 0,
            history: Vec::new(),
        }
    }

    /// Returns a copy with the same identity and reset match statistics.
    #[must_use]
    pub fn reset(&self, starting_score: Score) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            score: starting_score,
            darts_thrown: 0,
            history: Vec::new(),
        }
    }

    /// Charges a committed turn to this player.
    pub(crate) fn record(&mut self, score: Score, darts_charged: u32, darts: &[Throw]) {
        self.score = score;
        self.darts_thrown += darts_charged;
        self.history.extend_from_slice(darts);
    }
}
