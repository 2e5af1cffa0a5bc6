//! The pending round of throws for the player at the oche.

extern crate alloc;

use alloc::vec::Vec;

use crate::Score;
use crate::throw::{self, Throw};

/// Maximum number of throws in one round.
pub const MAX_THROWS: usize = 3;

/// Throws taken by the current player that are not yet committed to history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Round {
    /// Throws in the order they were taken.
    throws: Vec<Throw>,
}

impl Round {
    /// Creates an empty round.
    #[must_use]
    pub const fn new() -> Self {
        Self { throws: Vec::new() }
    }

    /// Appends a throw.
    ///
    /// Returns `false` and leaves the round unchanged when it already holds
    /// [`MAX_THROWS`] throws.
    pub fn add_throw(&mut self, throw: Throw) -> bool {
        if self.is_full() {
            return false;
        }
        self.throws.push(throw);
        true
    }

    /// Removes and returns the most recent throw.
    pub fn remove_last(&mut self) -> Option<Throw> {
        self.throws.pop()
    }

    /// Returns the summed value of the held throws.
    #[must_use]
    pub fn sum(&self) -> Score {
        throw::total(&self.throws)
    }

    /// Returns the held throws.
    #[must_use]
    pub fn throws(&self) -> &[Throw] {
        &self.throws
    }

    /// Returns the sequence number the next throw will carry.
    #[must_use]
    pub fn next_sequence(&self) -> u8 {
        self.throws.len() as u8 + 1
    }

    /// Returns the number of held throws.
    #[must_use]
    pub fn len(&self) -> usize {
        self.throws.len()
    }

    /// Returns whether no throws are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.throws.is_empty()
    }

    /// Returns whether the round holds [`MAX_THROWS`] throws.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.throws.len() >= MAX_THROWS
    }

    /// Empties the round and returns the throws it held.
    pub fn take(&mut self) -> Vec<Throw> {
        core::mem::take(&mut self.throws)
    }

    /// Clears the round.
    pub fn clear(&mut self) {
        self.throws.clear();
    }
}
