use std::{io, string::String, vec, vec::Vec};

use super::fifo;
use crate::{CollectSink, DropSink, FnSink, Sink, WriteSink};

#[test]
fn drop_sink_accepts_lines() {
    let mut f = fifo(3);
    f.push("a").unwrap();
    f.push("b").unwrap();
    assert_eq!(f.dump_into(DropSink), Ok(2));
    assert!(f.is_empty());
}

#[test]
fn fn_sink_calls_closure_in_order() {
    let mut seen = Vec::new();
    let mut f = fifo(3);
    for v in ["one", "two", "three"] {
        f.push(v).unwrap();
    }
    assert_eq!(f.dump_into(FnSink(|line: String| seen.push(line))), Ok(3));
    assert_eq!(seen, vec!["one", "two", "three"]);
}

#[test]
fn dump_empty_fifo_sends_nothing() {
    let mut f = fifo(2);
    let mut sink = CollectSink::new();
    assert_eq!(f.dump_into(&mut sink), Ok(0));
    assert!(sink.lines().is_empty());
}

#[test]
fn write_sink_emits_one_line_per_string() {
    let mut f = fifo(4);
    f.push("hello").unwrap();
    f.push("world").unwrap();

    let mut sink = WriteSink::new(Vec::new());
    assert_eq!(f.dump_into(&mut sink).unwrap(), 2);
    assert_eq!(sink.into_inner(), b"hello\nworld\n");
}

struct FailAfter {
    accepted: usize,
    limit: usize,
    flushed: bool,
}

impl Sink for FailAfter {
    type Error = io::ErrorKind;

    fn send(&mut self, _line: String) -> Result<(), Self::Error> {
        if self.accepted == self.limit {
            return Err(io::ErrorKind::BrokenPipe);
        }
        self.accepted += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushed = true;
        Ok(())
    }
}

#[test]
fn sink_error_stops_dump_and_keeps_the_rest() {
    let mut f = fifo(4);
    for v in ["a", "b", "c", "d"] {
        f.push(v).unwrap();
    }
    let mut sink = FailAfter {
        accepted: 0,
        limit: 1,
        flushed: false,
    };
    assert_eq!(f.dump_into(&mut sink), Err(io::ErrorKind::BrokenPipe));
    assert_eq!(sink.accepted, 1);
    assert!(!sink.flushed);
    // "a" accepted, "b" handed to the failing sink
    assert_eq!(f.len(), 2);
    assert_eq!(f.peek(), Some("c"));
}

#[test]
fn dump_flushes_sink_once_empty() {
    let mut f = fifo(2);
    f.push("x").unwrap();
    let mut sink = FailAfter {
        accepted: 0,
        limit: usize::MAX,
        flushed: false,
    };
    assert_eq!(f.dump_into(&mut sink), Ok(1));
    assert!(sink.flushed);
}

#[test]
fn collect_sink_take_and_reuse() {
    let mut sink = CollectSink::new();
    let mut f = fifo(2);

    f.push("a").unwrap();
    f.dump_into(&mut sink).unwrap();
    assert_eq!(sink.take(), vec!["a"]);
    assert!(sink.lines().is_empty());

    f.push("b").unwrap();
    f.dump_into(&mut sink).unwrap();
    assert_eq!(sink.lines(), ["b"]);
}
