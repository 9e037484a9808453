//! Input sampling
//!
//! Raw button samples are noisy; the debouncer turns them into clean
//! press and release edges.

pub mod debounce;

pub use debounce::{Debouncer, Edge, InputChannel};
