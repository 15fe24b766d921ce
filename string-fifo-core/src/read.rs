//! Read accessors for `StringFifo`.
//!
//! None of these move strings out or advance the read index.

use crate::iter::Iter;
use crate::ring::StringFifo;

impl StringFifo {
    /// Peek at the oldest string, the one [`pull`](Self::pull) returns next.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.get(0)
    }

    /// Peek at the newest string.
    #[inline]
    #[must_use]
    pub fn peek_back(&self) -> Option<&str> {
        self.len().checked_sub(1).and_then(|last| self.get(last))
    }

    /// Get a string by position (0 = oldest).
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        if index >= self.len() {
            return None;
        }
        self.slots[self.slot_index(index)].as_deref()
    }

    /// Iterate oldest to newest.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }
}
