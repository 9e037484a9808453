//! RP2040-specific HAL for the lock firmware
//!
//! This crate provides RP2040 implementations of the shared `tumbler-hal`
//! traits:
//!
//! - GPIO input/output wrappers over `embassy-rp` pins
//! - Millisecond clock over `embassy-time`
//! - Pin taking by number for build-time pin configuration

#![no_std]

pub mod clock;
pub mod gpio;
pub mod pins;

pub use clock::EmbassyClock;
pub use gpio::{RpInput, RpOutput};

// Re-export shared traits from tumbler-hal for convenience
pub use tumbler_hal::{InputPin, Monotonic, OutputPin};
