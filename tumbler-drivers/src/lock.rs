//! Relay lock output
//!
//! The lock is held closed while the relay pin is driven. By default the
//! pin is HIGH while secured and LOW once released.

use tumbler_core::traits::LockActuator;
use tumbler_hal::OutputPin;

/// Lock driven through a relay or MOSFET on one GPIO
pub struct RelayLock<P> {
    pin: P,
    /// If true, secured = pin LOW
    inverted: bool,
    /// Current logical state (true = released)
    unlocked: bool,
}

impl<P: OutputPin> RelayLock<P> {
    /// Create a new relay lock, starting secured
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin driving the relay
    /// - `inverted`: If true, the lock is secured while the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut lock = Self {
            pin,
            inverted,
            unlocked: true,
        };
        // Ensure lock starts secured
        lock.secure();
        lock
    }

    /// Create a relay lock that is secured while the pin is HIGH
    pub fn secured_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Get access to the underlying pin
    pub fn pin(&self) -> &P {
        &self.pin
    }

    fn drive(&mut self, secured: bool) {
        // Normal: secured=true, inverted=false → high
        // Inverted: secured=true, inverted=true → low
        self.pin.set_state(secured != self.inverted);
        self.unlocked = !secured;
    }
}

impl<P: OutputPin> LockActuator for RelayLock<P> {
    fn secure(&mut self) {
        self.drive(true);
    }

    fn unlock(&mut self) {
        self.drive(false);
    }

    fn is_unlocked(&self) -> bool {
        self.unlocked
    }
}
