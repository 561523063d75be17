//! Lazy element-wise mapping.

use loom_core::{Adaptor, Cursor, View};

/// Applies a function to each element as it is pulled.
///
/// The function travels with every cursor, so it must be `Clone`; closures
/// qualify whenever their captures do.
#[derive(Debug, Clone)]
pub struct Transform<V, F> {
    base: V,
    f: F,
}

impl<V, F> Transform<V, F> {
    /// Maps `base` through `f`.
    #[inline]
    pub fn new(base: V, f: F) -> Self {
        Transform { base, f }
    }
}

impl<V, F, B> View for Transform<V, F>
where
    V: View,
    F: Fn(V::Item) -> B + Clone,
{
    type Item = B;
    type Cursor = TransformCursor<V::Cursor, F>;

    #[inline]
    fn begin(&self) -> Self::Cursor {
        TransformCursor {
            inner: self.base.begin(),
            f: self.f.clone(),
        }
    }
}

/// Cursor over a [`Transform`] view.
#[derive(Debug, Clone)]
pub struct TransformCursor<C, F> {
    inner: C,
    f: F,
}

impl<C, F, B> Cursor for TransformCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> B + Clone,
{
    type Item = B;

    #[inline]
    fn is_end(&self) -> bool {
        self.inner.is_end()
    }

    #[inline]
    fn get(&self) -> Option<B> {
        self.inner.get().map(&self.f)
    }

    #[inline]
    fn advance(&mut self) {
        self.inner.advance();
    }

    #[inline]
    fn advance_bounded(&mut self, n: usize) -> usize {
        self.inner.advance_bounded(n)
    }
}

/// Adaptor produced by [`transform`].
#[derive(Debug, Clone, Copy)]
pub struct TransformAdaptor<F> {
    f: F,
}

impl<V, F, B> Adaptor<V> for TransformAdaptor<F>
where
    V: View,
    F: Fn(V::Item) -> B + Clone,
{
    type Output = Transform<V, F>;

    #[inline]
    fn apply(self, view: V) -> Transform<V, F> {
        Transform::new(view, self.f)
    }
}

/// Maps every element through `f`.
#[inline]
pub fn transform<F>(f: F) -> TransformAdaptor<F> {
    TransformAdaptor { f }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loom_core::{iota, iota_between, Slice};

    #[test]
    fn test_transform() {
        let view = iota_between(1, 5).pipe(transform(|n: i32| n * n));
        assert_eq!(view.to_vec(), vec![1, 4, 9, 16]);
    }

    #[test]
    fn test_transform_is_lazy() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let view = iota(0u32).pipe(transform(|n: u32| {
            calls.set(calls.get() + 1);
            n + 1
        }));
        assert_eq!(calls.get(), 0);

        let first: Vec<_> = view.iter().take(2).collect();
        assert_eq!(first, vec![1, 2]);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_transform_over_borrowed_items() {
        let words = ["loom", "view"];
        let lens = Slice::new(&words).pipe(transform(|w: &&str| w.len()));
        assert_eq!(lens.to_vec(), vec![4, 4]);
    }
}
