//! Bounded FIFO of owned strings.

use alloc::{boxed::Box, string::String, vec::Vec};
use core::{cmp::Ordering, fmt, mem};

use snafu::ResultExt;
use tracing::{debug, trace, warn};
use zeroize::Zeroize;

use crate::{
    builder::StringFifoBuilder,
    error::{AllocationFailedSnafu, InvalidCapacitySnafu, Result},
    sink::Sink,
    traits::RingInfo,
};

/// Fixed-capacity FIFO that owns a copy of every string pushed into it.
///
/// `produce` and `consume` meet both when the ring is empty and when it is
/// completely full, so the `empty` flag decides which one it is.
pub struct StringFifo {
    pub(crate) slots: Box<[Option<String>]>,
    /// Next slot to write.
    pub(crate) produce: usize,
    /// Next slot to read.
    pub(crate) consume: usize,
    pub(crate) empty: bool,
    scrub_on_release: bool,
}

impl StringFifo {
    /// Create a FIFO holding up to `capacity` strings.
    ///
    /// A capacity of 0 is legal: the FIFO is permanently empty and full.
    ///
    /// # Errors
    /// Returns [`FifoError::AllocationFailed`](crate::FifoError::AllocationFailed)
    /// if the slot array cannot be reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::allocate(capacity, false)
    }

    /// Create a FIFO from a signed capacity.
    ///
    /// # Errors
    /// Returns [`FifoError::InvalidCapacity`](crate::FifoError::InvalidCapacity)
    /// for a negative capacity, before anything is allocated.
    pub fn try_from_signed(capacity: i64) -> Result<Self> {
        Self::with_capacity(checked_capacity(capacity)?)
    }

    /// Start configuring a FIFO.
    ///
    /// ```
    /// use string_fifo_core::StringFifo;
    ///
    /// let fifo = StringFifo::builder()
    ///     .capacity(8)
    ///     .scrub_on_release(true)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(fifo.capacity(), 8);
    /// ```
    #[must_use]
    pub fn builder() -> StringFifoBuilder {
        StringFifoBuilder::new()
    }

    pub(crate) fn allocate(capacity: usize, scrub_on_release: bool) -> Result<Self> {
        let mut slots: Vec<Option<String>> = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .inspect_err(|_| warn!(capacity, "slot array allocation failed"))
            .context(AllocationFailedSnafu {
                what: "slot array",
                bytes: capacity.saturating_mul(mem::size_of::<Option<String>>()),
            })?;
        slots.resize_with(capacity, || None);

        debug!(capacity, scrub_on_release, "string fifo created");
        Ok(Self {
            slots: slots.into_boxed_slice(),
            produce: 0,
            consume: 0,
            empty: true,
            scrub_on_release,
        })
    }

    /// Number of slots, fixed at construction.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of strings currently held.
    ///
    /// Derived from the indices and the empty flag; the slots are not scanned.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match self.produce.cmp(&self.consume) {
            Ordering::Greater => self.produce - self.consume,
            Ordering::Less => self.capacity() - self.consume + self.produce,
            Ordering::Equal if self.empty => 0,
            Ordering::Equal => self.capacity(),
        }
    }

    /// True if no strings are held.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// True if the next push will be rejected.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    /// Free slots available to [`push`](Self::push).
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len()
    }

    /// Whether strings released by the FIFO itself are zeroed first.
    #[inline]
    #[must_use]
    pub fn scrubs_on_release(&self) -> bool {
        self.scrub_on_release
    }

    /// Push a copy of `value`.
    ///
    /// Returns the free space measured *before* the push. `Ok(0)` means the
    /// FIFO was full: nothing was stored and nothing was allocated. Unread
    /// strings are never overwritten.
    ///
    /// # Errors
    /// Returns [`FifoError::AllocationFailed`](crate::FifoError::AllocationFailed)
    /// if the copy cannot be allocated. The FIFO is left unchanged.
    pub fn push(&mut self, value: &str) -> Result<usize> {
        let free = self.remaining();
        if free == 0 {
            trace!(capacity = self.capacity(), "push rejected: fifo full");
            return Ok(0);
        }

        // Copy first so a failed allocation never leaves a half-written slot.
        let copy = owned_copy(value)?;

        self.slots[self.produce] = Some(copy);
        self.produce = self.advance(self.produce);
        self.empty = false;
        Ok(free)
    }

    /// Remove and return the oldest string.
    ///
    /// Returns `None` if the FIFO is empty. The returned string belongs to the
    /// caller and outlives the FIFO.
    #[must_use]
    pub fn pull(&mut self) -> Option<String> {
        if self.empty {
            return None;
        }

        let line = self.slots[self.consume].take();
        debug_assert!(line.is_some(), "occupied slot {} was vacant", self.consume);
        self.consume = self.advance(self.consume);
        if self.consume == self.produce {
            self.empty = true;
        }
        line
    }

    /// Pull every string into `sink`, oldest first. Returns the count sent.
    ///
    /// The sink is flushed once the FIFO is empty.
    ///
    /// # Errors
    /// Stops at the first sink error. The string that failed was already
    /// handed to the sink; strings not yet pulled stay in the FIFO.
    pub fn dump_into<S: Sink>(&mut self, mut sink: S) -> core::result::Result<usize, S::Error> {
        let mut count = 0;
        while let Some(line) = self.pull() {
            sink.send(line)?;
            count += 1;
        }
        sink.flush()?;
        trace!(count, "fifo dumped");
        Ok(count)
    }

    /// Remove every string, oldest first, as an iterator.
    ///
    /// Strings not consumed before the iterator is dropped stay in the FIFO.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_> {
        Drain { fifo: self }
    }

    /// Release every held string and reset the indices.
    ///
    /// Only the occupied range is touched. Strings are zeroed first when the
    /// scrub policy is on.
    pub fn clear(&mut self) {
        let released = self.release_occupied();
        self.produce = 0;
        self.consume = 0;
        self.empty = true;
        if released > 0 {
            debug!(released, "string fifo cleared");
        }
    }

    fn release_occupied(&mut self) -> usize {
        let len = self.len();
        for offset in 0..len {
            let idx = self.slot_index(offset);
            if let Some(mut line) = self.slots[idx].take() {
                if self.scrub_on_release {
                    line.zeroize();
                }
            }
        }
        len
    }

    /// Physical slot of the `offset`-th oldest string. Requires `capacity > 0`.
    #[inline]
    pub(crate) fn slot_index(&self, offset: usize) -> usize {
        (self.consume + offset) % self.capacity()
    }

    #[inline]
    fn advance(&self, idx: usize) -> usize {
        (idx + 1) % self.capacity()
    }
}

pub(crate) fn checked_capacity(requested: i64) -> Result<usize> {
    usize::try_from(requested).map_err(|_| InvalidCapacitySnafu { requested }.build())
}

fn owned_copy(value: &str) -> Result<String> {
    let mut copy = String::new();
    copy.try_reserve_exact(value.len())
        .inspect_err(|_| warn!(bytes = value.len(), "string copy allocation failed"))
        .context(AllocationFailedSnafu {
            what: "string copy",
            bytes: value.len(),
        })?;
    copy.push_str(value);
    Ok(copy)
}

/// Draining iterator over a [`StringFifo`].
pub struct Drain<'a> {
    fifo: &'a mut StringFifo,
}

impl Iterator for Drain<'_> {
    type Item = String;

    #[inline]
    fn next(&mut self) -> Option<String> {
        self.fifo.pull()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.fifo.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for Drain<'_> {}

impl Drop for StringFifo {
    fn drop(&mut self) {
        if self.scrub_on_release {
            self.release_occupied();
        }
    }
}

impl fmt::Debug for StringFifo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringFifo")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .field("scrub_on_release", &self.scrub_on_release)
            .finish_non_exhaustive()
    }
}

impl RingInfo for StringFifo {
    #[inline]
    fn len(&self) -> usize {
        StringFifo::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        StringFifo::capacity(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        StringFifo::is_empty(self)
    }
}
