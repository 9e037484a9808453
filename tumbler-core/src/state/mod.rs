//! Sequence matching state machine
//!
//! Tracks how far into the secret sequence the user has got. The machine
//! is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::PressOutcome;
pub use machine::{MatchState, Matcher};
