//! Matcher definition
//!
//! Progress is a single counter in `[0, STEPS]`. Zero is idle, `STEPS` is
//! solved and terminal for the round.

use super::events::PressOutcome;
use crate::sequence::Sequence;

/// Matcher states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatchState {
    /// No correct inputs yet
    Idle,
    /// `step` correct inputs so far
    Matching { step: usize },
    /// Whole sequence entered
    Solved,
}

impl MatchState {
    /// Check if this is the terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, MatchState::Solved)
    }
}

/// Compares presses against the secret sequence
#[derive(Debug, Clone)]
pub struct Matcher<const STEPS: usize> {
    sequence: Sequence<STEPS>,
    step: usize,
}

impl<const STEPS: usize> Matcher<STEPS> {
    /// Start matching `sequence` from idle
    pub fn new(sequence: Sequence<STEPS>) -> Self {
        Self { sequence, step: 0 }
    }

    /// Current state
    pub fn state(&self) -> MatchState {
        match self.step {
            0 => MatchState::Idle,
            step if step >= STEPS => MatchState::Solved,
            step => MatchState::Matching { step },
        }
    }

    /// Number of correct inputs so far
    pub fn current_step(&self) -> usize {
        self.step
    }

    /// Check if the round is solved
    pub fn is_solved(&self) -> bool {
        self.step >= STEPS
    }

    /// The sequence being matched
    pub fn sequence(&self) -> &Sequence<STEPS> {
        &self.sequence
    }

    /// Input expected next, or `None` once solved
    pub fn expected(&self) -> Option<u8> {
        self.sequence.get(self.step)
    }

    /// Apply a debounced press on input `channel`
    pub fn press(&mut self, channel: u8) -> PressOutcome {
        let Some(expected) = self.expected() else {
            return PressOutcome::Ignored;
        };

        if channel == expected {
            self.step += 1;
            if self.is_solved() {
                PressOutcome::Solved
            } else {
                PressOutcome::Advanced { step: self.step }
            }
        } else {
            let from = self.step;
            self.step = 0;
            PressOutcome::Reset { from }
        }
    }

    /// Return to idle, keeping the sequence
    pub fn reset(&mut self) {
        self.step = 0;
    }

    /// Start over with a new sequence
    pub fn restart(&mut self, sequence: Sequence<STEPS>) {
        self.sequence = sequence;
        self.step = 0;
    }
}
