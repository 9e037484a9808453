//! Configuration types
//!
//! Sequence length and input count are fixed at build time; these types
//! carry the remaining tunables and the checks that reject unusable
//! combinations before the control loop starts.

pub mod error;
pub mod types;

pub use error::ConfigError;
pub use types::*;
