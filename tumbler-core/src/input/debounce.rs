//! Time-window debounce filter
//!
//! A raw level change is only accepted once the line has been quiet for the
//! debounce window. In [`DebounceMode::Shared`] one timestamp covers every
//! channel: a raw change on any line restarts the window for all of them.

use crate::config::{DebounceMode, LockConfig};

/// Accepted transition of one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Released -> asserted
    Pressed,
    /// Asserted -> released
    Released,
}

/// Per-line debounce state
///
/// Levels are logical: `true` means asserted (pressed), independent of
/// the electrical polarity of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputChannel {
    /// Most recent raw sample
    raw: bool,
    /// Last level that survived the debounce window
    accepted: bool,
    /// Time of the last raw change on this line (ms)
    last_change_ms: u32,
}

impl InputChannel {
    /// Debounced level
    pub fn is_asserted(&self) -> bool {
        self.accepted
    }
}

/// Debounce filter over `N` input lines
#[derive(Debug, Clone)]
pub struct Debouncer<const N: usize> {
    channels: [InputChannel; N],
    mode: DebounceMode,
    delay_ms: u32,
    /// Last raw change on any line (ms)
    last_change_ms: u32,
}

impl<const N: usize> Debouncer<N> {
    /// Create a debouncer with every line released
    pub fn new(config: &LockConfig) -> Self {
        Self {
            channels: [InputChannel::default(); N],
            mode: config.debounce_mode,
            delay_ms: config.debounce_ms,
            last_change_ms: 0,
        }
    }

    /// Feed one sample of every line taken at `now_ms`
    ///
    /// Returns the accepted edge, if any, for each line in index order.
    pub fn update(&mut self, now_ms: u32, raw: &[bool; N]) -> [Option<Edge>; N] {
        for (channel, &level) in self.channels.iter_mut().zip(raw.iter()) {
            if level != channel.raw {
                channel.raw = level;
                channel.last_change_ms = now_ms;
                self.last_change_ms = now_ms;
            }
        }

        let mut edges = [None; N];
        for (channel, edge) in self.channels.iter_mut().zip(edges.iter_mut()) {
            let since = match self.mode {
                DebounceMode::Shared => self.last_change_ms,
                DebounceMode::PerChannel => channel.last_change_ms,
            };

            if now_ms.wrapping_sub(since) < self.delay_ms || channel.raw == channel.accepted {
                continue;
            }

            channel.accepted = channel.raw;
            *edge = Some(if channel.accepted {
                Edge::Pressed
            } else {
                Edge::Released
            });
        }

        edges
    }

    /// State of one line
    pub fn channel(&self, index: usize) -> Option<&InputChannel> {
        self.channels.get(index)
    }

    /// Debounce timing mode
    pub fn mode(&self) -> DebounceMode {
        self.mode
    }
}
