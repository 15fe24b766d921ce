//! Builder for configuring a `StringFifo`.

use crate::{
    error::Result,
    ring::{StringFifo, checked_capacity},
};

/// Builder for constructing a [`StringFifo`].
///
/// Created via [`StringFifo::builder()`]. Without a capacity the FIFO is
/// built with capacity 0.
///
/// ```
/// use string_fifo_core::{FifoError, StringFifo};
///
/// let fifo = StringFifo::builder().capacity(4).build().unwrap();
/// assert_eq!(fifo.remaining(), 4);
///
/// let err = StringFifo::builder().signed_capacity(-1).build().unwrap_err();
/// assert!(matches!(err, FifoError::InvalidCapacity { requested: -1 }));
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct StringFifoBuilder {
    capacity: Capacity,
    scrub_on_release: bool,
}

#[derive(Debug, Clone, Copy)]
enum Capacity {
    Unsigned(usize),
    Signed(i64),
}

impl Default for Capacity {
    fn default() -> Self {
        Self::Unsigned(0)
    }
}

impl StringFifoBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Set the number of slots.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Capacity::Unsigned(capacity);
        self
    }

    /// Set the number of slots from a signed value, checked in [`build`](Self::build).
    pub fn signed_capacity(mut self, capacity: i64) -> Self {
        self.capacity = Capacity::Signed(capacity);
        self
    }

    /// Zero strings before the FIFO releases them on `clear` or drop.
    ///
    /// Off by default. Strings handed out by `pull` belong to the caller and
    /// are never scrubbed.
    pub fn scrub_on_release(mut self, scrub: bool) -> Self {
        self.scrub_on_release = scrub;
        self
    }

    /// Build the [`StringFifo`].
    ///
    /// # Errors
    /// Returns [`FifoError::InvalidCapacity`](crate::FifoError::InvalidCapacity)
    /// for a negative signed capacity and
    /// [`FifoError::AllocationFailed`](crate::FifoError::AllocationFailed)
    /// if the slots cannot be reserved.
    pub fn build(self) -> Result<StringFifo> {
        let capacity = match self.capacity {
            Capacity::Unsigned(capacity) => capacity,
            Capacity::Signed(requested) => checked_capacity(requested)?,
        };
        StringFifo::allocate(capacity, self.scrub_on_release)
    }
}
