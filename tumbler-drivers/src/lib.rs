//! Hardware driver implementations
//!
//! This crate provides GPIO-backed implementations of the traits defined
//! in tumbler-core:
//!
//! - Button bank (active-low momentary inputs)
//! - LED progress bar
//! - Relay lock output
//! - Wave animation for the unlocked celebration

#![no_std]
#![deny(unsafe_code)]

pub mod animation;
pub mod button;
pub mod indicator;
pub mod lock;

pub use animation::{WaveAnimation, WaveFrame};
pub use button::{ButtonBank, Polarity};
pub use indicator::LedBar;
pub use lock::RelayLock;
