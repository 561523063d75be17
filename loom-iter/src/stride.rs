//! Fixed-step sub-sampling.

use loom_core::{Adaptor, Cursor, Precondition, View, ViewResult};

/// Every `step`-th element of a view, starting with the first.
///
/// # Examples
/// ```
/// use loom_core::{iota_between, View};
/// use loom_iter::stride;
///
/// let evens = iota_between(0, 10).pipe(stride(2).unwrap());
/// assert_eq!(evens.to_vec(), vec![0, 2, 4, 6, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct Stride<V> {
    base: V,
    step: usize,
}

impl<V: View> Stride<V> {
    /// Samples every `step`-th element of `base`.
    ///
    /// # Errors
    /// Returns [`Precondition::ZeroStride`] if `step` is 0.
    pub fn new(base: V, step: usize) -> ViewResult<Self> {
        if step == 0 {
            return Err(Precondition::ZeroStride.into());
        }
        Ok(Stride { base, step })
    }

    /// Callers guarantee `step > 0`.
    #[inline]
    pub(crate) fn with_step(base: V, step: usize) -> Self {
        debug_assert!(step > 0, "stride step must be non-zero");
        Stride { base, step }
    }

    /// The sampling step.
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }
}

impl<V: View> View for Stride<V> {
    type Item = V::Item;
    type Cursor = StrideCursor<V::Cursor>;

    #[inline]
    fn begin(&self) -> StrideCursor<V::Cursor> {
        StrideCursor {
            pos: self.base.begin(),
            step: self.step,
        }
    }
}

/// Cursor over a [`Stride`] view.
#[derive(Debug, Clone)]
pub struct StrideCursor<C> {
    pos: C,
    step: usize,
}

impl<C: Cursor> Cursor for StrideCursor<C> {
    type Item = C::Item;

    #[inline]
    fn is_end(&self) -> bool {
        self.pos.is_end()
    }

    #[inline]
    fn get(&self) -> Option<C::Item> {
        self.pos.get()
    }

    #[inline]
    fn advance(&mut self) {
        self.pos.advance_bounded(self.step);
    }
}

/// Adaptor produced by [`stride`].
#[derive(Debug, Clone, Copy)]
pub struct StrideAdaptor {
    step: usize,
}

impl<V: View> Adaptor<V> for StrideAdaptor {
    type Output = Stride<V>;

    #[inline]
    fn apply(self, view: V) -> Stride<V> {
        Stride::with_step(view, self.step)
    }
}

/// Keeps every `step`-th element.
///
/// # Errors
/// Returns [`Precondition::ZeroStride`] if `step` is 0.
pub fn stride(step: usize) -> ViewResult<StrideAdaptor> {
    if step == 0 {
        return Err(Precondition::ZeroStride.into());
    }
    Ok(StrideAdaptor { step })
}
