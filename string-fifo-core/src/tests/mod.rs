mod model;
#[cfg(feature = "std")]
mod sink;

use crate::StringFifo;

fn fifo(capacity: usize) -> StringFifo {
    StringFifo::with_capacity(capacity).unwrap()
}
