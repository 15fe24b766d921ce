//! A bounded FIFO of owned strings that rejects pushes when full.

#![cfg_attr(not(feature = "std"), no_std)]

pub use string_fifo_core::*;

/// Prelude for convenient imports.
pub mod prelude {
    #[cfg(feature = "std")]
    pub use crate::WriteSink;
    pub use crate::{
        CollectSink, DropSink, FifoError, FnSink, RingInfo, Sink, StringFifo, StringFifoBuilder,
    };
}
