//! Lock actuator trait

/// Output that holds the lock closed until the sequence is solved
pub trait LockActuator {
    /// Hold the lock closed
    fn secure(&mut self);

    /// Release the lock
    ///
    /// Called once when the round is solved; the lock stays released until
    /// [`secure`](Self::secure) is called by a new round.
    fn unlock(&mut self);

    /// Check if the lock is currently released
    fn is_unlocked(&self) -> bool;
}
