//! Cursors: the mutable, per-traversal half of the view protocol.
//!
//! A [`Cursor`] is produced by [`View::begin`](crate::View::begin) and owns
//! every bit of state a traversal needs. It is compared against the stateless
//! [`Sentinel`] returned by [`View::end`](crate::View::end) to detect the end
//! of the sequence; no other termination test is valid, since a cursor may
//! walk a source that is unbounded.
//!
//! Cursors are single-owner and not synchronized. They are `Clone` so that
//! windowing adaptors can hand out `[cur, next)` sub-views without copying
//! source data.

use crate::error::{ViewError, ViewResult};

/// Terminal marker for every view.
///
/// The sentinel carries no state: whether a cursor has finished is a
/// property of the cursor alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sentinel;

/// Iteration state over a view.
pub trait Cursor: Clone {
    /// The element produced on dereference.
    type Item;

    /// Returns `true` once the cursor has moved past the last element.
    fn is_end(&self) -> bool;

    /// Returns the current element, or `None` if the cursor is at its end.
    fn get(&self) -> Option<Self::Item>;

    /// Moves to the next logical position. Does nothing at the end.
    fn advance(&mut self);

    /// Advances by up to `n` positions, stopping early at the end.
    ///
    /// Returns the number of positions actually moved.
    #[inline]
    fn advance_bounded(&mut self, n: usize) -> usize {
        let mut moved = 0;
        while moved < n && !self.is_end() {
            self.advance();
            moved += 1;
        }
        moved
    }

    /// Cursor-equals-sentinel test.
    #[inline]
    fn at_end(&self, _end: &Sentinel) -> bool {
        self.is_end()
    }

    /// Dereferences the cursor.
    ///
    /// # Errors
    /// Returns [`ViewError::IterationPastEnd`] if the cursor is at its end.
    #[inline]
    fn current(&self) -> ViewResult<Self::Item> {
        self.get().ok_or(ViewError::IterationPastEnd)
    }
}

/// Adapts a cursor to [`Iterator`], so views can drive `for` loops and the
/// std iterator toolbox.
#[derive(Debug, Clone)]
pub struct Iter<C> {
    cursor: C,
}

impl<C: Cursor> Iter<C> {
    /// Wraps a cursor.
    #[inline]
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Returns the underlying cursor.
    #[inline]
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.cursor.get()?;
        self.cursor.advance();
        Some(item)
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if self.cursor.advance_bounded(n) < n {
            return None;
        }
        self.next()
    }
}

impl<C: Cursor> core::iter::FusedIterator for Iter<C> {}

/// Object-safe mirror of [`Cursor`], used behind [`BoxedCursor`].
trait DynCursor<T> {
    fn dyn_is_end(&self) -> bool;
    fn dyn_get(&self) -> Option<T>;
    fn dyn_advance(&mut self);
    fn dyn_advance_bounded(&mut self, n: usize) -> usize;
    fn clone_box(&self) -> Box<dyn DynCursor<T>>;
}

impl<C> DynCursor<C::Item> for C
where
    C: Cursor + 'static,
{
    fn dyn_is_end(&self) -> bool {
        self.is_end()
    }

    fn dyn_get(&self) -> Option<C::Item> {
        self.get()
    }

    fn dyn_advance(&mut self) {
        self.advance();
    }

    fn dyn_advance_bounded(&mut self, n: usize) -> usize {
        self.advance_bounded(n)
    }

    fn clone_box(&self) -> Box<dyn DynCursor<C::Item>> {
        Box::new(self.clone())
    }
}

/// A type-erased cursor yielding `T`.
///
/// Costs one indirection per call; used where the concrete cursor type is
/// only known at runtime.
pub struct BoxedCursor<T> {
    inner: Box<dyn DynCursor<T>>,
}

impl<T> BoxedCursor<T> {
    /// Erases the type of `cursor`.
    pub fn new<C>(cursor: C) -> Self
    where
        C: Cursor<Item = T> + 'static,
    {
        Self {
            inner: Box::new(cursor),
        }
    }
}

impl<T> Clone for BoxedCursor<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_box(),
        }
    }
}

impl<T> core::fmt::Debug for BoxedCursor<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BoxedCursor")
            .field("is_end", &self.inner.dyn_is_end())
            .finish()
    }
}

impl<T> Cursor for BoxedCursor<T> {
    type Item = T;

    #[inline]
    fn is_end(&self) -> bool {
        self.inner.dyn_is_end()
    }

    #[inline]
    fn get(&self) -> Option<T> {
        self.inner.dyn_get()
    }

    #[inline]
    fn advance(&mut self) {
        self.inner.dyn_advance();
    }

    #[inline]
    fn advance_bounded(&mut self, n: usize) -> usize {
        self.inner.dyn_advance_bounded(n)
    }
}
