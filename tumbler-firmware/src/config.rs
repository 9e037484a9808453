//! Build-time lock configuration
//!
//! Constants and pin assignments generated by build.rs from lock.toml.

use tumbler_core::LockConfig;

include!(concat!(env!("OUT_DIR"), "/lock_config.rs"));

/// Runtime tunables derived from lock.toml
pub fn lock_config() -> LockConfig {
    LockConfig {
        debounce_ms: DEBOUNCE_MS,
        debounce_mode: DEBOUNCE_MODE,
    }
}
