//! Millisecond clock over embassy-time

use embassy_time::Instant;

/// Milliseconds since the clock was created
pub struct EmbassyClock {
    start: Instant,
}

impl EmbassyClock {
    /// Start counting from now
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for EmbassyClock {
    fn default() -> Self {
        Self::new()
    }
}

impl tumbler_hal::Monotonic for EmbassyClock {
    fn now_ms(&self) -> u32 {
        // Truncation wraps after ~49 days; consumers use wrapping arithmetic
        self.start.elapsed().as_millis() as u32
    }
}
