//! Configuration type definitions

use super::ConfigError;

/// Default debounce window (ms)
pub const DEFAULT_DEBOUNCE_MS: u32 = 50;

/// Maximum number of input lines
///
/// Coverage checks use a `u32` bitmask, so this must stay at or below 32.
pub const MAX_INPUTS: usize = 16;

/// Maximum sequence length
pub const MAX_STEPS: usize = 32;

/// How the debounce window is timed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceMode {
    /// One last-change timestamp gates every channel.
    ///
    /// A bounce on any line restarts the window for all lines, so a noisy
    /// button delays acceptance of a clean press elsewhere.
    #[default]
    Shared,
    /// Each channel has its own last-change timestamp
    PerChannel,
}

/// Runtime tunables for the lock controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LockConfig {
    /// Time a raw level must stay put before it is accepted (ms)
    pub debounce_ms: u32,
    /// Shared or per-channel debounce timing
    pub debounce_mode: DebounceMode,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            debounce_mode: DebounceMode::Shared,
        }
    }
}

impl LockConfig {
    /// Check the tunables
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounce);
        }
        Ok(())
    }
}

/// Check that a sequence of `steps` can cover `inputs` distinct inputs
///
/// Rejects configurations where the coverage requirement could never be
/// met, so sequence generation cannot spin forever.
pub fn check_dimensions(steps: usize, inputs: usize) -> Result<(), ConfigError> {
    if inputs == 0 {
        return Err(ConfigError::NoInputs);
    }
    if inputs > MAX_INPUTS {
        return Err(ConfigError::TooManyInputs { inputs });
    }
    if steps > MAX_STEPS {
        return Err(ConfigError::TooManySteps { steps });
    }
    if steps < inputs {
        return Err(ConfigError::StepsBelowInputs { steps, inputs });
    }
    Ok(())
}
