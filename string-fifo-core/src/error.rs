//! Error types for the string FIFO.

use alloc::collections::TryReserveError;

use snafu::Snafu;

/// Error raised while constructing or pushing into a [`StringFifo`](crate::StringFifo).
///
/// A full buffer on push and an empty buffer on pull are not errors; they are
/// reported through ordinary return values.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum FifoError {
    /// Requested capacity is negative or does not fit the address space.
    #[snafu(display("invalid capacity {requested}: must be between 0 and usize::MAX"))]
    InvalidCapacity {
        /// Capacity as requested by the caller.
        requested: i64,
    },

    /// Backing storage could not be reserved.
    #[snafu(display("failed to allocate {bytes} bytes for {what}"))]
    AllocationFailed {
        /// What was being allocated.
        what: &'static str,
        /// Bytes requested.
        bytes: usize,
        /// Allocator error.
        source: TryReserveError,
    },
}

/// Result type for FIFO operations.
pub type Result<T> = core::result::Result<T, FifoError>;
