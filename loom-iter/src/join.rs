//! Flattening a view of views.

use loom_core::{Adaptor, Cursor, View};

/// The elements of every inner view, in order.
///
/// Empty inner views contribute nothing; runs of them are skipped in one go
/// so the cursor never rests on an exhausted inner view.
#[derive(Debug, Clone)]
pub struct Join<V> {
    base: V,
}

impl<V> Join<V>
where
    V: View,
    V::Item: View,
{
    /// Flattens `base`.
    #[inline]
    pub fn new(base: V) -> Self {
        Join { base }
    }
}

impl<V> View for Join<V>
where
    V: View,
    V::Item: View,
{
    type Item = <V::Item as View>::Item;
    type Cursor = JoinCursor<V::Cursor, <V::Item as View>::Cursor>;

    #[inline]
    fn begin(&self) -> Self::Cursor {
        let mut cursor = JoinCursor {
            outer: self.base.begin(),
            inner: None,
        };
        cursor.settle();
        cursor
    }
}

/// Cursor over a [`Join`] view.
///
/// `outer` points one past the inner view currently being walked.
#[derive(Debug, Clone)]
pub struct JoinCursor<O, I> {
    outer: O,
    inner: Option<I>,
}

impl<O, I> JoinCursor<O, I>
where
    O: Cursor,
    O::Item: View<Cursor = I>,
    I: Cursor,
{
    /// Moves onto the next non-empty inner view, or clears `inner` when the
    /// outer view is exhausted.
    fn settle(&mut self) {
        while self.inner.as_ref().map_or(true, Cursor::is_end) {
            match self.outer.get() {
                Some(view) => {
                    self.inner = Some(view.begin());
                    self.outer.advance();
                }
                None => {
                    self.inner = None;
                    return;
                }
            }
        }
    }
}

impl<O, I> Cursor for JoinCursor<O, I>
where
    O: Cursor,
    O::Item: View<Cursor = I>,
    I: Cursor,
{
    type Item = I::Item;

    #[inline]
    fn is_end(&self) -> bool {
        self.inner.is_none()
    }

    #[inline]
    fn get(&self) -> Option<I::Item> {
        self.inner.as_ref().and_then(Cursor::get)
    }

    #[inline]
    fn advance(&mut self) {
        if let Some(inner) = self.inner.as_mut() {
            inner.advance();
            self.settle();
        }
    }
}

/// Adaptor produced by [`join`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JoinAdaptor;

impl<V> Adaptor<V> for JoinAdaptor
where
    V: View,
    V::Item: View,
{
    type Output = Join<V>;

    #[inline]
    fn apply(self, view: V) -> Join<V> {
        Join::new(view)
    }
}

/// Flattens a view of views.
#[inline]
pub fn join() -> JoinAdaptor {
    JoinAdaptor
}
