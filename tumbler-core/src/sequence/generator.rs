//! Rejection-sampling sequence generator

use rand::Rng;
use rand_core::RngCore;

use crate::config::{check_dimensions, ConfigError};

/// Secret input sequence for one round
///
/// Each step is an input index in `[0, input_count)` and every index in that
/// range appears at least once. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sequence<const STEPS: usize> {
    steps: [u8; STEPS],
    input_count: u8,
}

impl<const STEPS: usize> Sequence<STEPS> {
    /// Build a sequence from explicit steps
    ///
    /// Fails if a step is out of range or an input is never used.
    pub fn from_steps(steps: [u8; STEPS], input_count: u8) -> Result<Self, ConfigError> {
        check_dimensions(STEPS, input_count as usize)?;

        if let Some((index, &value)) = steps
            .iter()
            .enumerate()
            .find(|&(_, &value)| value >= input_count)
        {
            return Err(ConfigError::StepOutOfRange { index, value });
        }

        if let Some(input) = first_missing_input(&steps, input_count) {
            return Err(ConfigError::MissingInput { input });
        }

        Ok(Self { steps, input_count })
    }

    /// Input expected at `step`, or `None` past the end
    pub fn get(&self, step: usize) -> Option<u8> {
        self.steps.get(step).copied()
    }

    /// All steps in order
    pub fn steps(&self) -> &[u8; STEPS] {
        &self.steps
    }

    /// Number of inputs the sequence was built for
    pub fn input_count(&self) -> u8 {
        self.input_count
    }

    /// Sequence length
    pub fn len(&self) -> usize {
        STEPS
    }

    /// True for a zero-length sequence
    pub fn is_empty(&self) -> bool {
        STEPS == 0
    }
}

/// Result of a successful draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Generated<const STEPS: usize> {
    /// The accepted sequence
    pub sequence: Sequence<STEPS>,
    /// Candidate draws discarded for missing an input
    pub rejected: u32,
}

/// Draw a random sequence of `STEPS` steps over `input_count` inputs
///
/// Candidates are drawn uniformly and discarded whole until one uses every
/// input. Configurations that can never satisfy that are refused up front.
pub fn generate<const STEPS: usize, R>(
    input_count: u8,
    rng: &mut R,
) -> Result<Generated<STEPS>, ConfigError>
where
    R: RngCore,
{
    check_dimensions(STEPS, input_count as usize)?;

    let mut rejected: u32 = 0;
    loop {
        let mut steps = [0u8; STEPS];
        for step in steps.iter_mut() {
            *step = rng.gen_range(0..input_count);
        }

        if first_missing_input(&steps, input_count).is_none() {
            return Ok(Generated {
                sequence: Sequence { steps, input_count },
                rejected,
            });
        }

        rejected = rejected.saturating_add(1);
    }
}

/// Lowest input index that does not occur in `steps`
fn first_missing_input(steps: &[u8], input_count: u8) -> Option<u8> {
    let seen = steps
        .iter()
        .filter(|&&value| value < input_count)
        .fold(0u32, |mask, &value| mask | (1 << value));

    (0..input_count).find(|&input| seen & (1 << input) == 0)
}
