/// Occupancy information for a bounded ring.
///
/// Only `len` and `capacity` are required; the remaining queries derive from
/// them.
pub trait RingInfo {
    /// Returns the number of strings currently held.
    fn len(&self) -> usize;

    /// Returns the fixed number of slots.
    fn capacity(&self) -> usize;

    /// Returns `true` if the ring holds no strings.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if a push would be rejected.
    ///
    /// A zero-capacity ring is both empty and full.
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Returns the number of free slots.
    fn remaining(&self) -> usize {
        self.capacity() - self.len()
    }
}
