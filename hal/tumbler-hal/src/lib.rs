//! Tumbler Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the lock controller
//! needs from a chip-specific HAL. Application logic in `tumbler-core` and
//! the drivers in `tumbler-drivers` only ever see these traits, so the same
//! code runs on the RP2040 and in host-side tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (tumbler-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tumbler-drivers / tumbler-core         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tumbler-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ tumbler-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`clock::Monotonic`] - Millisecond time source

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use clock::Monotonic;
pub use gpio::{InputPin, OutputPin};
