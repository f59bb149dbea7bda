//! What a computer player believes it has seen.
//!
//! Each computer seat owns one [`KnowledgeModel`]: a grid of flags keyed by
//! `(owner seat, slot)` saying whether that player has actually observed the
//! card currently sitting there. The grid includes the computer's own seat,
//! since cards start hidden even from their holder.

use serde::{Deserialize, Serialize};

use crate::deck::HAND_SIZE;

/// Largest table the engine seats.
pub const MAX_SEATS: usize = 4;

/// Seen/unseen flags for every seat and slot at the table.
///
/// Queries outside the grid report `false`; updates outside it are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeModel {
    known: [[bool; HAND_SIZE]; MAX_SEATS],
}

impl KnowledgeModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_known(&mut self, owner: usize, slot: usize, known: bool) {
        if let Some(flag) = self.known.get_mut(owner).and_then(|row| row.get_mut(slot)) {
            *flag = known;
        }
    }

    pub fn is_known(&self, owner: usize, slot: usize) -> bool {
        self.known
            .get(owner)
            .and_then(|row| row.get(slot))
            .copied()
            .unwrap_or(false)
    }

    /// Marks a position as unseen, e.g. after the card there was replaced.
    pub fn forget(&mut self, owner: usize, slot: usize) {
        self.set_known(owner, slot, false);
    }

    /// Swaps the flags of two positions so each follows its card after a switch.
    pub fn exchange(&mut self, a: (usize, usize), b: (usize, usize)) {
        let first = self.is_known(a.0, a.1);
        let second = self.is_known(b.0, b.1);
        self.set_known(a.0, a.1, second);
        self.set_known(b.0, b.1, first);
    }

    pub fn known_slots(&self, owner: usize) -> Vec<usize> {
        (0..HAND_SIZE).filter(|&s| self.is_known(owner, s)).collect()
    }

    pub fn unknown_slots(&self, owner: usize) -> Vec<usize> {
        (0..HAND_SIZE).filter(|&s| !self.is_known(owner, s)).collect()
    }
}
