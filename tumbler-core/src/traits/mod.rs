//! Hardware abstraction traits
//!
//! These traits define the interface between the matching logic and the
//! hardware it reads from and drives.

pub mod display;
pub mod input;
pub mod lock;

pub use display::ProgressDisplay;
pub use input::InputBank;
pub use lock::LockActuator;
