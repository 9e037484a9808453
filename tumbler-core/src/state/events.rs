//! Outcomes of a debounced press

/// What a single accepted press did to the matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressOutcome {
    /// Correct input; progress is now `step`
    Advanced { step: usize },
    /// Correct final input; the round is solved
    Solved,
    /// Wrong input; progress dropped from `from` back to zero
    Reset { from: usize },
    /// Press after the round was solved
    Ignored,
}

impl PressOutcome {
    /// Check if this press matched the expected input
    pub fn is_correct(&self) -> bool {
        matches!(self, PressOutcome::Advanced { .. } | PressOutcome::Solved)
    }

    /// Check if this press was a wrong input
    pub fn is_wrong(&self) -> bool {
        matches!(self, PressOutcome::Reset { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(PressOutcome::Advanced { step: 1 }.is_correct());
        assert!(PressOutcome::Solved.is_correct());
        assert!(!PressOutcome::Reset { from: 2 }.is_correct());
        assert!(PressOutcome::Reset { from: 0 }.is_wrong());
        assert!(!PressOutcome::Ignored.is_correct());
        assert!(!PressOutcome::Ignored.is_wrong());
    }
}
