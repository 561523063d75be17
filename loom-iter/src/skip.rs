//! Dropping a leading prefix.

use loom_core::{Adaptor, Cursor, View};

/// A view without its first `count` elements.
///
/// The prefix is skipped with a bounded advance each time a traversal
/// begins, so skipping past the end yields an empty view.
#[derive(Debug, Clone)]
pub struct Skip<V> {
    base: V,
    count: usize,
}

impl<V: View> Skip<V> {
    /// Drops the first `count` elements of `base`.
    #[inline]
    pub fn new(base: V, count: usize) -> Self {
        Skip { base, count }
    }
}

impl<V: View> View for Skip<V> {
    type Item = V::Item;
    type Cursor = V::Cursor;

    #[inline]
    fn begin(&self) -> V::Cursor {
        let mut cursor = self.base.begin();
        cursor.advance_bounded(self.count);
        cursor
    }
}

/// Adaptor produced by [`skip`].
#[derive(Debug, Clone, Copy)]
pub struct SkipAdaptor {
    count: usize,
}

impl<V: View> Adaptor<V> for SkipAdaptor {
    type Output = Skip<V>;

    #[inline]
    fn apply(self, view: V) -> Skip<V> {
        Skip::new(view, self.count)
    }
}

/// Drops the first `count` elements.
#[inline]
pub fn skip(count: usize) -> SkipAdaptor {
    SkipAdaptor { count }
}
