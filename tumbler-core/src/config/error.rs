//! Configuration errors

use core::fmt;

/// Reasons a lock configuration is refused at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// At least one input line is required
    NoInputs,
    /// More inputs than the controller can track
    TooManyInputs { inputs: usize },
    /// Longer sequence than the controller supports
    TooManySteps { steps: usize },
    /// Every input must appear in the sequence, which needs `steps >= inputs`
    StepsBelowInputs { steps: usize, inputs: usize },
    /// Sequence was generated for a different number of inputs
    InputCountMismatch { expected: usize, actual: usize },
    /// Progress display has a different number of indicators than steps
    DisplayLengthMismatch { expected: usize, actual: usize },
    /// A step refers to an input that does not exist
    StepOutOfRange { index: usize, value: u8 },
    /// An input never appears in the sequence
    MissingInput { input: u8 },
    /// Debounce delay must be non-zero
    ZeroDebounce,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoInputs => write!(f, "no inputs configured"),
            ConfigError::TooManyInputs { inputs } => {
                write!(f, "{} inputs configured, at most {} supported", inputs, super::MAX_INPUTS)
            }
            ConfigError::TooManySteps { steps } => {
                write!(f, "{} steps configured, at most {} supported", steps, super::MAX_STEPS)
            }
            ConfigError::StepsBelowInputs { steps, inputs } => write!(
                f,
                "{} steps cannot cover {} inputs; need at least one step per input",
                steps, inputs
            ),
            ConfigError::InputCountMismatch { expected, actual } => write!(
                f,
                "sequence built for {} inputs, controller has {}",
                actual, expected
            ),
            ConfigError::DisplayLengthMismatch { expected, actual } => write!(
                f,
                "progress display has {} indicators, sequence has {} steps",
                actual, expected
            ),
            ConfigError::StepOutOfRange { index, value } => {
                write!(f, "step {} uses input {} which does not exist", index, value)
            }
            ConfigError::MissingInput { input } => {
                write!(f, "input {} never appears in the sequence", input)
            }
            ConfigError::ZeroDebounce => write!(f, "debounce delay must be non-zero"),
        }
    }
}
