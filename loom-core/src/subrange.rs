//! `[start, start + len)` windows over another view's cursor.
//!
//! Chunking and grouping adaptors yield these as their elements. A subrange
//! holds a cursor clone and a length; it never copies source elements.

use crate::cursor::Cursor;
use crate::view::View;

/// A view of `len` consecutive positions beginning at a cursor.
#[derive(Debug, Clone)]
pub struct Subrange<C> {
    start: C,
    len: usize,
}

impl<C: Cursor> Subrange<C> {
    /// Views the `len` positions starting at `start`.
    ///
    /// `len` must not exceed the number of positions left in `start`;
    /// callers obtain it from [`Cursor::advance_bounded`].
    #[inline]
    pub fn new(start: C, len: usize) -> Self {
        Subrange { start, len }
    }

    /// Number of elements, known without traversal.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<C::Item> {
        if self.len == 0 {
            None
        } else {
            self.start.get()
        }
    }
}

impl<C: Cursor> View for Subrange<C> {
    type Item = C::Item;
    type Cursor = Counted<C>;

    #[inline]
    fn begin(&self) -> Counted<C> {
        Counted {
            inner: self.start.clone(),
            remaining: self.len,
        }
    }

    #[inline]
    fn count(&self) -> usize {
        self.len
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A cursor that stops after a fixed number of positions.
#[derive(Debug, Clone)]
pub struct Counted<C> {
    inner: C,
    remaining: usize,
}

impl<C: Cursor> Cursor for Counted<C> {
    type Item = C::Item;

    #[inline]
    fn is_end(&self) -> bool {
        self.remaining == 0 || self.inner.is_end()
    }

    #[inline]
    fn get(&self) -> Option<C::Item> {
        if self.remaining == 0 {
            None
        } else {
            self.inner.get()
        }
    }

    #[inline]
    fn advance(&mut self) {
        if self.remaining > 0 {
            self.inner.advance();
            self.remaining -= 1;
        }
    }

    #[inline]
    fn advance_bounded(&mut self, n: usize) -> usize {
        let moved = self.inner.advance_bounded(n.min(self.remaining));
        self.remaining -= moved;
        moved
    }
}
