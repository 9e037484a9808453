//! Sequence generation
//!
//! A round starts by drawing the secret sequence of input indices the user
//! has to reproduce. Every input must be used at least once.

pub mod generator;

pub use generator::{generate, Generated, Sequence};
