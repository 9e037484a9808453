//! Progress indicator trait

/// Thermometer-style progress output
pub trait ProgressDisplay {
    /// Number of indicators
    fn len(&self) -> usize;

    /// Check if there are no indicators
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Light exactly the first `step` indicators and clear the rest
    ///
    /// Values above [`len`](Self::len) light everything.
    fn show_progress(&mut self, step: usize);
}
