//! Momentary button inputs
//!
//! Buttons are usually wired between the pin and ground with the internal
//! pull-up enabled, so a pressed button reads LOW.

use tumbler_core::traits::InputBank;
use tumbler_hal::InputPin;

/// Electrical level that means "pressed"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Pressed = LOW (pull-up wiring)
    #[default]
    ActiveLow,
    /// Pressed = HIGH (pull-down wiring)
    ActiveHigh,
}

impl Polarity {
    /// Convert a "pin is high" reading into a logical pressed state
    pub fn is_asserted(&self, high: bool) -> bool {
        match self {
            Polarity::ActiveLow => !high,
            Polarity::ActiveHigh => high,
        }
    }
}

/// Fixed set of buttons sampled in index order
pub struct ButtonBank<P, const N: usize> {
    pins: [P; N],
    polarity: Polarity,
}

impl<P: InputPin, const N: usize> ButtonBank<P, N> {
    /// Create a bank with the given polarity
    pub fn new(pins: [P; N], polarity: Polarity) -> Self {
        Self { pins, polarity }
    }

    /// Create a bank of pull-up buttons (pressed = LOW)
    pub fn active_low(pins: [P; N]) -> Self {
        Self::new(pins, Polarity::ActiveLow)
    }

    /// Get access to the underlying pins
    pub fn pins(&self) -> &[P; N] {
        &self.pins
    }
}

impl<P: InputPin, const N: usize> InputBank<N> for ButtonBank<P, N> {
    fn read_asserted(&mut self) -> [bool; N] {
        let mut levels = [false; N];
        for (level, pin) in levels.iter_mut().zip(self.pins.iter()) {
            *level = self.polarity.is_asserted(pin.is_high());
        }
        levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO input for testing
    struct MockPin {
        high: bool,
    }

    impl InputPin for MockPin {
        fn is_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_active_low_bank() {
        let mut bank = ButtonBank::active_low([
            MockPin { high: true },
            MockPin { high: false },
            MockPin { high: true },
        ]);
        assert_eq!(bank.read_asserted(), [false, true, false]);
    }

    #[test]
    fn test_active_high_bank() {
        let mut bank = ButtonBank::new(
            [MockPin { high: true }, MockPin { high: false }],
            Polarity::ActiveHigh,
        );
        assert_eq!(bank.read_asserted(), [true, false]);
        assert_eq!(bank.pins().len(), 2);
    }
}
