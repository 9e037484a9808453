//! Unlocked celebration
//!
//! A wave over the progress LEDs: light each LED in order, then clear each
//! in order, forever. The caller waits [`WaveAnimation::FRAME_MS`] between
//! frames.

/// One LED change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WaveFrame {
    /// LED index
    pub index: usize,
    /// New LED state
    pub on: bool,
}

/// Endless wave over `len` LEDs
#[derive(Debug, Clone)]
pub struct WaveAnimation {
    len: usize,
    /// Position within one fill-then-clear cycle
    position: usize,
}

impl WaveAnimation {
    /// Delay between frames (ms)
    pub const FRAME_MS: u64 = 100;

    /// Create a wave over `len` LEDs
    pub fn new(len: usize) -> Self {
        Self { len, position: 0 }
    }

    /// Frames in one full cycle
    pub fn cycle_len(&self) -> usize {
        self.len * 2
    }
}

impl Iterator for WaveAnimation {
    type Item = WaveFrame;

    fn next(&mut self) -> Option<WaveFrame> {
        if self.len == 0 {
            return None;
        }

        let frame = if self.position < self.len {
            WaveFrame {
                index: self.position,
                on: true,
            }
        } else {
            WaveFrame {
                index: self.position - self.len,
                on: false,
            }
        };

        self.position = (self.position + 1) % self.cycle_len();
        Some(frame)
    }
}
