//! LED progress bar
//!
//! One LED per sequence step, lit thermometer-style.

use tumbler_core::traits::ProgressDisplay;
use tumbler_hal::OutputPin;

use crate::animation::WaveFrame;

/// Row of LEDs driven active-high
pub struct LedBar<P, const N: usize> {
    leds: [P; N],
}

impl<P: OutputPin, const N: usize> LedBar<P, N> {
    /// Create a bar with every LED off
    pub fn new(leds: [P; N]) -> Self {
        let mut bar = Self { leds };
        bar.show_progress(0);
        bar
    }

    /// Switch one LED
    pub fn set(&mut self, index: usize, on: bool) {
        if let Some(led) = self.leds.get_mut(index) {
            led.set_state(on);
        }
    }

    /// Switch every LED
    pub fn set_all(&mut self, on: bool) {
        for led in self.leds.iter_mut() {
            led.set_state(on);
        }
    }

    /// Apply one animation frame
    pub fn apply(&mut self, frame: WaveFrame) {
        self.set(frame.index, frame.on);
    }

    /// Check if an LED is lit
    pub fn is_lit(&self, index: usize) -> bool {
        self.leds.get(index).is_some_and(|led| led.is_set_high())
    }

    /// Number of lit LEDs
    pub fn lit_count(&self) -> usize {
        self.leds.iter().filter(|led| led.is_set_high()).count()
    }
}

impl<P: OutputPin, const N: usize> ProgressDisplay for LedBar<P, N> {
    fn len(&self) -> usize {
        N
    }

    fn show_progress(&mut self, step: usize) {
        for (i, led) in self.leds.iter_mut().enumerate() {
            led.set_state(i < step);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO output for testing
    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn bar() -> LedBar<MockPin, 5> {
        LedBar::new([
            MockPin { high: true },
            MockPin { high: true },
            MockPin { high: false },
            MockPin { high: true },
            MockPin { high: true },
        ])
    }

    #[test]
    fn test_starts_dark() {
        let bar = bar();
        assert_eq!(bar.lit_count(), 0);
    }

    #[test]
    fn test_thermometer_for_every_step() {
        let mut bar = bar();
        for k in 0..=5 {
            bar.show_progress(k);
            for i in 0..5 {
                assert_eq!(bar.is_lit(i), i < k, "step {} led {}", k, i);
            }
            assert_eq!(bar.lit_count(), k);
        }

        // Going back down clears the upper LEDs
        bar.show_progress(2);
        assert_eq!(bar.lit_count(), 2);
        assert!(!bar.is_lit(4));
    }

    #[test]
    fn test_overflow_lights_everything() {
        let mut bar = bar();
        bar.show_progress(9);
        assert_eq!(bar.lit_count(), 5);
    }

    #[test]
    fn test_set_and_set_all() {
        let mut bar = bar();
        bar.set(3, true);
        assert!(bar.is_lit(3));
        bar.set(7, true);
        assert_eq!(bar.lit_count(), 1);

        bar.set_all(true);
        assert_eq!(bar.lit_count(), 5);
        bar.set_all(false);
        assert_eq!(bar.lit_count(), 0);
        assert!(!bar.is_lit(10));
    }
}
