//! Push, pull and dump a few FIFOs to stdout.
//!
//! Rejected pushes and allocation failures are logged through `tracing`.
//!
//! Run with: RUST_LOG=trace cargo run -p string-fifo-core --example dump

use std::{error::Error, io};

use string_fifo_core::{StringFifo, WriteSink};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut out = WriteSink::new(io::stdout());

    let mut fifo = StringFifo::with_capacity(4)?;
    for line in ["elem1", "elem2", "elem3", "elem4"] {
        fifo.push(line)?;
    }
    fifo.dump_into(&mut out)?;

    fifo.push("A")?;
    fifo.dump_into(&mut out)?;

    // Fills slots 1..=3 then wraps into 0; "U" finds no room.
    for line in ["X", "Y", "Z", "T", "U"] {
        if fifo.push(line)? == 0 {
            eprintln!("no room for {line:?}");
        }
    }
    fifo.dump_into(&mut out)?;

    let mut fifo = StringFifo::builder()
        .capacity(2)
        .scrub_on_release(true)
        .build()?;
    fifo.push("elem1")?;
    fifo.push("elem2")?;
    if let Some(first) = fifo.pull() {
        println!("pulled {first}");
    }
    println!("{} left, {} free", fifo.len(), fifo.remaining());

    if let Err(err) = StringFifo::try_from_signed(-1) {
        eprintln!("error: {err}");
    }
    Ok(())
}
