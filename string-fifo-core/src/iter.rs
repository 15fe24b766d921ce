//! Borrowing iterator for `StringFifo`.

use core::iter::FusedIterator;

use crate::ring::StringFifo;

/// Iterator over held strings, oldest to newest.
pub struct Iter<'a> {
    fifo: &'a StringFifo,
    pos: usize,
    len: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(fifo: &'a StringFifo) -> Self {
        Self {
            fifo,
            pos: 0,
            len: fifo.len(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.len {
            return None;
        }
        let idx = self.fifo.slot_index(self.pos);
        self.pos += 1;
        self.fifo.slots[idx].as_deref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.pos;
        (remaining, Some(remaining))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.len - self.pos {
            self.pos = self.len;
            return None;
        }
        self.pos += n;
        self.next()
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a StringFifo {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}
