//! Core implementation for `string_fifo`.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(all(test, not(feature = "std")))]
extern crate std;

mod builder;
mod error;
mod iter;
mod read;
mod ring;
mod sink;
mod traits;

#[cfg(test)]
mod tests;

pub use builder::StringFifoBuilder;
pub use error::{FifoError, Result};
pub use iter::Iter;
pub use ring::{Drain, StringFifo};
#[cfg(feature = "std")]
pub use sink::WriteSink;
pub use sink::{CollectSink, DropSink, FnSink, Sink};
pub use traits::RingInfo;
