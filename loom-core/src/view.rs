//! Views: the immutable half of the protocol, and adaptor composition.

use std::rc::Rc;

use crate::cursor::{BoxedCursor, Cursor, Iter, Sentinel};

/// A lazy, immutable sequence description.
///
/// A view bundles a source with adaptor parameters and never stores computed
/// results. Cloning a view is O(1); every traversal starts from a fresh
/// [`Cursor`] obtained from [`begin`](View::begin).
pub trait View: Clone {
    /// The element produced by this view's cursors.
    type Item;
    /// The cursor type returned by [`begin`](View::begin).
    type Cursor: Cursor<Item = Self::Item>;

    /// Starts a new traversal.
    fn begin(&self) -> Self::Cursor;

    /// The terminal marker for this view.
    #[inline]
    fn end(&self) -> Sentinel {
        Sentinel
    }

    /// Returns a std iterator over the view's elements.
    #[inline]
    fn iter(&self) -> Iter<Self::Cursor> {
        Iter::new(self.begin())
    }

    /// Counts the elements by walking a full traversal.
    ///
    /// This is O(n) for composed views; never call it on an unbounded view.
    fn count(&self) -> usize {
        let mut cursor = self.begin();
        let end = self.end();
        let mut n = 0;
        while !cursor.at_end(&end) {
            n += cursor.advance_bounded(usize::MAX);
        }
        n
    }

    /// Returns `true` if the view yields no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.begin().at_end(&self.end())
    }

    /// Collects every element.
    fn to_vec(&self) -> Vec<Self::Item> {
        self.iter().collect()
    }

    /// Applies an adaptor to this view. Chains left to right:
    /// `v.pipe(a).pipe(b)` is `b(a(v))`.
    #[inline]
    fn pipe<A>(self, adaptor: A) -> A::Output
    where
        A: Adaptor<Self>,
    {
        adaptor.apply(self)
    }

    /// Erases the concrete type of this view.
    fn boxed(self) -> BoxedView<Self::Item>
    where
        Self: 'static,
        Self::Item: 'static,
    {
        BoxedView::new(self)
    }
}

/// A reusable transformation from one view into another.
///
/// Adaptors are built once (validating their parameters) and applied with
/// [`View::pipe`].
pub trait Adaptor<V: View> {
    /// What applying the adaptor produces, usually a new view.
    type Output;

    /// Wraps `view`.
    fn apply(self, view: V) -> Self::Output;
}

/// Object-safe mirror of [`View`], used behind [`BoxedView`].
trait DynView<T> {
    fn begin_boxed(&self) -> BoxedCursor<T>;
}

impl<V> DynView<V::Item> for V
where
    V: View + 'static,
    V::Item: 'static,
{
    fn begin_boxed(&self) -> BoxedCursor<V::Item> {
        BoxedCursor::new(self.begin())
    }
}

/// A type-erased, reference-counted view yielding `T`.
pub struct BoxedView<T> {
    inner: Rc<dyn DynView<T>>,
}

impl<T: 'static> BoxedView<T> {
    /// Erases the type of `view`.
    pub fn new<V>(view: V) -> Self
    where
        V: View<Item = T> + 'static,
    {
        Self {
            inner: Rc::new(view),
        }
    }
}

impl<T> Clone for BoxedView<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> core::fmt::Debug for BoxedView<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BoxedView").finish_non_exhaustive()
    }
}

impl<T> View for BoxedView<T> {
    type Item = T;
    type Cursor = BoxedCursor<T>;

    #[inline]
    fn begin(&self) -> BoxedCursor<T> {
        self.inner.begin_boxed()
    }
}
