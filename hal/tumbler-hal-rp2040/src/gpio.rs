//! GPIO wrappers
//!
//! Newtypes over `embassy_rp::gpio` pins implementing the `tumbler-hal`
//! traits.

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;

/// Digital input with pull resistor configured
pub struct RpInput<'d> {
    input: Input<'d>,
}

impl<'d> RpInput<'d> {
    /// Configure `pin` as an input with the internal pull-up
    ///
    /// Use for buttons wired to ground (pressed = LOW).
    pub fn pull_up(pin: Peri<'d, AnyPin>) -> Self {
        Self {
            input: Input::new(pin, Pull::Up),
        }
    }
}

impl tumbler_hal::InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.input.is_high()
    }
}

/// Push-pull digital output
pub struct RpOutput<'d> {
    output: Output<'d>,
}

impl<'d> RpOutput<'d> {
    /// Configure `pin` as an output starting LOW
    pub fn new_low(pin: Peri<'d, AnyPin>) -> Self {
        Self {
            output: Output::new(pin, Level::Low),
        }
    }

    /// Configure `pin` as an output starting HIGH
    pub fn new_high(pin: Peri<'d, AnyPin>) -> Self {
        Self {
            output: Output::new(pin, Level::High),
        }
    }
}

impl tumbler_hal::OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.output.set_high();
    }

    fn set_low(&mut self) {
        self.output.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.output.is_set_high()
    }
}
