//! Input bank trait

/// A fixed set of `N` momentary inputs sampled together
///
/// Implementations translate electrical levels to logical ones, so an
/// active-low button reports `true` while its line is low.
pub trait InputBank<const N: usize> {
    /// Sample every line, `true` meaning asserted (pressed)
    fn read_asserted(&mut self) -> [bool; N];
}
