//! Fixed-size, non-overlapping windows.

use loom_core::{Adaptor, Cursor, Precondition, Subrange, View, ViewResult};

/// View over consecutive `size`-element windows of another view.
///
/// Every window holds exactly `size` elements except the last, which holds
/// whatever is left. Over an unbounded source, chunking never ends.
///
/// # Examples
/// ```
/// use loom_core::{Slice, View};
/// use loom_iter::chunk;
///
/// let data = [1, 2, 3, 4, 5, 6, 7];
/// let chunks: Vec<Vec<_>> = Slice::new(&data)
///     .pipe(chunk(3).unwrap())
///     .iter()
///     .map(|window| window.to_vec())
///     .collect();
/// assert_eq!(chunks, vec![vec![&1, &2, &3], vec![&4, &5, &6], vec![&7]]);
/// ```
#[derive(Debug, Clone)]
pub struct Chunk<V> {
    base: V,
    size: usize,
}

impl<V: View> Chunk<V> {
    /// Chunks `base` into windows of `size` elements.
    ///
    /// # Errors
    /// Returns [`Precondition::ZeroChunkSize`] if `size` is 0.
    pub fn new(base: V, size: usize) -> ViewResult<Self> {
        if size == 0 {
            return Err(Precondition::ZeroChunkSize.into());
        }
        Ok(Chunk { base, size })
    }

    /// The window size.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }
}

impl<V: View> View for Chunk<V> {
    type Item = Subrange<V::Cursor>;
    type Cursor = ChunkCursor<V::Cursor>;

    #[inline]
    fn begin(&self) -> ChunkCursor<V::Cursor> {
        let cur = self.base.begin();
        let mut next = cur.clone();
        let len = next.advance_bounded(self.size);
        ChunkCursor {
            cur,
            next,
            len,
            size: self.size,
        }
    }
}

/// Cursor over a [`Chunk`] view: the current window is `[cur, next)`.
#[derive(Debug, Clone)]
pub struct ChunkCursor<C> {
    cur: C,
    next: C,
    len: usize,
    size: usize,
}

impl<C: Cursor> Cursor for ChunkCursor<C> {
    type Item = Subrange<C>;

    #[inline]
    fn is_end(&self) -> bool {
        self.cur.is_end()
    }

    #[inline]
    fn get(&self) -> Option<Subrange<C>> {
        if self.cur.is_end() {
            None
        } else {
            Some(Subrange::new(self.cur.clone(), self.len))
        }
    }

    #[inline]
    fn advance(&mut self) {
        if self.cur.is_end() {
            return;
        }
        self.cur = self.next.clone();
        self.len = self.next.advance_bounded(self.size);
    }
}

/// Adaptor produced by [`chunk`].
#[derive(Debug, Clone, Copy)]
pub struct ChunkAdaptor {
    size: usize,
}

impl<V: View> Adaptor<V> for ChunkAdaptor {
    type Output = Chunk<V>;

    #[inline]
    fn apply(self, view: V) -> Chunk<V> {
        Chunk {
            base: view,
            size: self.size,
        }
    }
}

/// Splits a view into windows of `size` elements.
///
/// # Errors
/// Returns [`Precondition::ZeroChunkSize`] if `size` is 0.
pub fn chunk(size: usize) -> ViewResult<ChunkAdaptor> {
    if size == 0 {
        return Err(Precondition::ZeroChunkSize.into());
    }
    Ok(ChunkAdaptor { size })
}
