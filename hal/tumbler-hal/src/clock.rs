//! Monotonic time source
//!
//! The controller only needs a non-decreasing millisecond counter. The
//! counter is allowed to wrap; consumers compare timestamps with
//! `wrapping_sub`.

/// Millisecond time source
pub trait Monotonic {
    /// Milliseconds since an arbitrary fixed origin (wraps at `u32::MAX`)
    fn now_ms(&self) -> u32;
}
