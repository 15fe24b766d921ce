//! Sinks that receive strings drained from a FIFO.

use alloc::{string::String, vec::Vec};
use core::convert::Infallible;

/// Consumes strings one at a time.
pub trait Sink {
    /// The error type returned by fallible sinks.
    type Error;

    /// Consume a string. Ownership passes to the sink.
    ///
    /// # Errors
    /// Returns an error if the string could not be consumed.
    fn send(&mut self, line: String) -> Result<(), Self::Error>;

    /// Flush buffered output.
    ///
    /// # Errors
    /// Returns an error if the flush fails.
    #[inline]
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    type Error = S::Error;

    #[inline]
    fn send(&mut self, line: String) -> Result<(), Self::Error> {
        (**self).send(line)
    }

    #[inline]
    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}

/// Releases every string it receives.
#[derive(Debug, Clone, Copy, Default)]
pub struct DropSink;

impl Sink for DropSink {
    type Error = Infallible;

    #[inline]
    fn send(&mut self, _line: String) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Collects strings into a Vec.
#[derive(Debug, Clone, Default)]
pub struct CollectSink {
    lines: Vec<String>,
}

impl CollectSink {
    /// Create an empty collecting sink.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Collected strings, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Take collected strings, leaving the sink empty.
    pub fn take(&mut self) -> Vec<String> {
        core::mem::take(&mut self.lines)
    }

    /// Consume the sink and return what it collected.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Sink for CollectSink {
    type Error = Infallible;

    #[inline]
    fn send(&mut self, line: String) -> Result<(), Self::Error> {
        self.lines.push(line);
        Ok(())
    }
}

/// Calls a closure for each string.
#[derive(Debug)]
pub struct FnSink<F>(pub F);

impl<F: FnMut(String)> Sink for FnSink<F> {
    type Error = Infallible;

    #[inline]
    fn send(&mut self, line: String) -> Result<(), Self::Error> {
        (self.0)(line);
        Ok(())
    }
}

#[cfg(feature = "std")]
pub use self::write::WriteSink;

#[cfg(feature = "std")]
mod write {
    use alloc::string::String;
    use std::io::{self, Write};

    use super::Sink;

    /// Writes each string on its own line to an [`io::Write`].
    ///
    /// `WriteSink::new(std::io::stdout())` is the console dump.
    #[derive(Debug)]
    pub struct WriteSink<W> {
        writer: W,
    }

    impl<W: Write> WriteSink<W> {
        /// Wrap a writer.
        pub fn new(writer: W) -> Self {
            Self { writer }
        }

        /// Reference to the wrapped writer.
        pub fn get_ref(&self) -> &W {
            &self.writer
        }

        /// Unwrap the writer.
        pub fn into_inner(self) -> W {
            self.writer
        }
    }

    impl<W: Write> Sink for WriteSink<W> {
        type Error = io::Error;

        fn send(&mut self, line: String) -> Result<(), Self::Error> {
            self.writer.write_all(line.as_bytes())?;
            self.writer.write_all(b"\n")
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.writer.flush()
        }
    }
}
