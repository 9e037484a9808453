//! Board-agnostic core logic for the sequence lock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Configuration limits and validation
//! - Sequence generation with the input coverage guarantee
//! - Debounce filtering of raw input samples
//! - The sequence matching state machine
//! - The controller that ties them to input, display and lock traits

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod input;
pub mod sequence;
pub mod state;
pub mod traits;

pub use config::{ConfigError, DebounceMode, LockConfig};
pub use controller::{Controller, Press, TickReport};
pub use sequence::{generate, Generated, Sequence};
pub use state::{MatchState, Matcher, PressOutcome};
