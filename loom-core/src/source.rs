//! Source views: the leaves every adaptor chain starts from.
//!
//! - [`Slice`] borrows a slice and yields references
//! - [`Shared`] owns its elements behind an `Rc`, so copies stay O(1)
//! - [`Iota`] counts upward from a start value, bounded or not
//! - [`Repeat`] yields one value a fixed number of times
//! - [`Empty`] yields nothing

use std::marker::PhantomData;
use std::rc::Rc;

use crate::cursor::Cursor;
use crate::view::View;

/// A borrowed slice viewed as a sequence of references.
#[derive(Debug)]
pub struct Slice<'a, T> {
    slice: &'a [T],
}

impl<'a, T> Slice<'a, T> {
    /// Views `slice`.
    #[inline]
    pub fn new(slice: &'a [T]) -> Self {
        Slice { slice }
    }
}

impl<T> Clone for Slice<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<'_, T> {}

impl<'a, T> View for Slice<'a, T> {
    type Item = &'a T;
    type Cursor = SliceCursor<'a, T>;

    #[inline]
    fn begin(&self) -> SliceCursor<'a, T> {
        SliceCursor {
            slice: self.slice,
            pos: 0,
        }
    }

    #[inline]
    fn count(&self) -> usize {
        self.slice.len()
    }
}

/// Cursor over a [`Slice`].
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<T> Clone for SliceCursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn is_end(&self) -> bool {
        self.pos >= self.slice.len()
    }

    #[inline]
    fn get(&self) -> Option<&'a T> {
        self.slice.get(self.pos)
    }

    #[inline]
    fn advance(&mut self) {
        if self.pos < self.slice.len() {
            self.pos += 1;
        }
    }

    #[inline]
    fn advance_bounded(&mut self, n: usize) -> usize {
        let moved = n.min(self.slice.len() - self.pos);
        self.pos += moved;
        moved
    }
}

/// Owned elements behind a reference count.
///
/// Cursors hold their own `Rc` handle, so a cursor stays valid even if the
/// view that produced it is dropped.
#[derive(Debug)]
pub struct Shared<T> {
    items: Rc<[T]>,
}

impl<T> Shared<T> {
    /// Takes ownership of `items`.
    pub fn new(items: Vec<T>) -> Self {
        Shared {
            items: items.into(),
        }
    }
}

impl<T> From<Vec<T>> for Shared<T> {
    fn from(items: Vec<T>) -> Self {
        Shared::new(items)
    }
}

impl<T> Clone for Shared<T> {
    #[inline]
    fn clone(&self) -> Self {
        Shared {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T: Clone> View for Shared<T> {
    type Item = T;
    type Cursor = SharedCursor<T>;

    #[inline]
    fn begin(&self) -> SharedCursor<T> {
        SharedCursor {
            items: Rc::clone(&self.items),
            pos: 0,
        }
    }

    #[inline]
    fn count(&self) -> usize {
        self.items.len()
    }
}

/// Cursor over a [`Shared`] view.
#[derive(Debug)]
pub struct SharedCursor<T> {
    items: Rc<[T]>,
    pos: usize,
}

impl<T> Clone for SharedCursor<T> {
    #[inline]
    fn clone(&self) -> Self {
        SharedCursor {
            items: Rc::clone(&self.items),
            pos: self.pos,
        }
    }
}

impl<T: Clone> Cursor for SharedCursor<T> {
    type Item = T;

    #[inline]
    fn is_end(&self) -> bool {
        self.pos >= self.items.len()
    }

    #[inline]
    fn get(&self) -> Option<T> {
        self.items.get(self.pos).cloned()
    }

    #[inline]
    fn advance(&mut self) {
        if self.pos < self.items.len() {
            self.pos += 1;
        }
    }

    #[inline]
    fn advance_bounded(&mut self, n: usize) -> usize {
        let moved = n.min(self.items.len() - self.pos);
        self.pos += moved;
        moved
    }
}

/// Types with a successor, the element types [`Iota`] can count over.
pub trait Step: Clone + PartialOrd {
    /// The next value in sequence, or `None` if `self` is the largest value
    /// of the type.
    #[must_use]
    fn successor(&self) -> Option<Self>;
}

macro_rules! impl_step {
    ($($t:ty),* $(,)?) => {
        $(
            impl Step for $t {
                #[inline]
                fn successor(&self) -> Option<Self> {
                    self.checked_add(1)
                }
            }
        )*
    };
}

impl_step!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// An increasing sequence `start, start.successor(), ...`, either unbounded
/// or stopping before `end`.
///
/// An unbounded sequence still ends after the largest value of its type.
#[derive(Debug, Clone)]
pub struct Iota<T> {
    start: T,
    end: Option<T>,
}

impl<T: Step> Iota<T> {
    /// Bounds the sequence to values strictly less than `end`.
    #[must_use]
    pub fn until(self, end: T) -> Self {
        Iota {
            start: self.start,
            end: Some(end),
        }
    }
}

/// An unbounded sequence starting at `start`.
#[inline]
pub fn iota<T: Step>(start: T) -> Iota<T> {
    Iota { start, end: None }
}

/// The half-open sequence `[start, end)`.
#[inline]
pub fn iota_between<T: Step>(start: T, end: T) -> Iota<T> {
    iota(start).until(end)
}

impl<T: Step> View for Iota<T> {
    type Item = T;
    type Cursor = IotaCursor<T>;

    #[inline]
    fn begin(&self) -> IotaCursor<T> {
        IotaCursor {
            value: Some(self.start.clone()),
            end: self.end.clone(),
        }
    }
}

/// Cursor over an [`Iota`].
#[derive(Debug, Clone)]
pub struct IotaCursor<T> {
    value: Option<T>,
    end: Option<T>,
}

impl<T: Step> Cursor for IotaCursor<T> {
    type Item = T;

    #[inline]
    fn is_end(&self) -> bool {
        match (&self.value, &self.end) {
            (None, _) => true,
            (Some(value), Some(end)) => value >= end,
            (Some(_), None) => false,
        }
    }

    #[inline]
    fn get(&self) -> Option<T> {
        if self.is_end() {
            return None;
        }
        self.value.clone()
    }

    #[inline]
    fn advance(&mut self) {
        if !self.is_end() {
            self.value = self.value.as_ref().and_then(Step::successor);
        }
    }
}

/// A value yielded a fixed number of times.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
    times: usize,
}

/// Yields `value` exactly `times` times.
#[inline]
pub fn repeat_n<T: Clone>(value: T, times: usize) -> Repeat<T> {
    Repeat { value, times }
}

/// Yields `value` once.
#[inline]
pub fn single<T: Clone>(value: T) -> Repeat<T> {
    repeat_n(value, 1)
}

impl<T: Clone> View for Repeat<T> {
    type Item = T;
    type Cursor = RepeatCursor<T>;

    #[inline]
    fn begin(&self) -> RepeatCursor<T> {
        RepeatCursor {
            value: self.value.clone(),
            remaining: self.times,
        }
    }

    #[inline]
    fn count(&self) -> usize {
        self.times
    }
}

/// Cursor over a [`Repeat`].
#[derive(Debug, Clone)]
pub struct RepeatCursor<T> {
    value: T,
    remaining: usize,
}

impl<T: Clone> Cursor for RepeatCursor<T> {
    type Item = T;

    #[inline]
    fn is_end(&self) -> bool {
        self.remaining == 0
    }

    #[inline]
    fn get(&self) -> Option<T> {
        (self.remaining > 0).then(|| self.value.clone())
    }

    #[inline]
    fn advance(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    #[inline]
    fn advance_bounded(&mut self, n: usize) -> usize {
        let moved = n.min(self.remaining);
        self.remaining -= moved;
        moved
    }
}

/// A view with no elements.
#[derive(Debug)]
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

/// Returns an empty view of `T`.
#[inline]
pub fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

impl<T> Clone for Empty<T> {
    #[inline]
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> View for Empty<T> {
    type Item = T;
    type Cursor = Empty<T>;

    #[inline]
    fn begin(&self) -> Empty<T> {
        empty()
    }
}

impl<T> Cursor for Empty<T> {
    type Item = T;

    #[inline]
    fn is_end(&self) -> bool {
        true
    }

    #[inline]
    fn get(&self) -> Option<T> {
        None
    }

    #[inline]
    fn advance(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_view() {
        let data = vec![1, 2, 3];
        let view = Slice::new(&data);
        assert_eq!(view.to_vec(), vec![&1, &2, &3]);
        assert_eq!(view.count(), 3);

        let mut cursor = view.begin();
        assert_eq!(cursor.advance_bounded(10), 3);
        assert!(cursor.is_end());
        assert_eq!(cursor.get(), None);
    }

    #[test]
    fn test_shared_cursor_outlives_view() {
        let cursor = {
            let view = Shared::new(vec![String::from("a"), String::from("b")]);
            let mut cursor = view.begin();
            cursor.advance();
            cursor
        };
        assert_eq!(cursor.get().as_deref(), Some("b"));
    }

    #[test]
    fn test_iota_bounded_and_unbounded() {
        assert_eq!(iota_between(2u8, 6).to_vec(), vec![2, 3, 4, 5]);
        assert!(iota_between(5i32, 5).is_empty());

        let first: Vec<_> = iota(10usize).iter().take(3).collect();
        assert_eq!(first, vec![10, 11, 12]);
    }

    #[test]
    fn test_unbounded_iota_stops_at_type_max() {
        let tail: Vec<u8> = iota(250u8).iter().take(10).collect();
        assert_eq!(tail, vec![250, 251, 252, 253, 254, 255]);
        assert_eq!(iota(i8::MAX).count(), 1);

        let mut cursor = iota(u8::MAX).begin();
        cursor.advance();
        assert!(cursor.is_end());
        assert_eq!(cursor.current(), Err(crate::error::ViewError::IterationPastEnd));
    }

    #[test]
    fn test_repeat_and_single() {
        assert_eq!(repeat_n('x', 3).to_vec(), vec!['x', 'x', 'x']);
        assert_eq!(single(7).to_vec(), vec![7]);
        assert!(repeat_n(0, 0).is_empty());
    }

    #[test]
    fn test_empty() {
        let view = empty::<u32>();
        assert!(view.is_empty());
        assert_eq!(view.count(), 0);
    }

    proptest::proptest! {
        #[test]
        fn prop_bounded_advance_matches_stepwise(len in 0usize..64, n in 0usize..80) {
            let data: Vec<usize> = (0..len).collect();
            let mut fast = Slice::new(&data).begin();
            let mut slow = iota_between(0, len).begin();
            let moved = fast.advance_bounded(n);
            proptest::prop_assert_eq!(moved, n.min(len));
            proptest::prop_assert_eq!(slow.advance_bounded(n), moved);
            proptest::prop_assert_eq!(fast.get().copied(), slow.get());
        }
    }
}
