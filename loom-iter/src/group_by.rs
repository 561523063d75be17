//! Predicate-driven run segmentation.

use loom_core::{Adaptor, Cursor, Subrange, View};

/// Maximal runs of elements that satisfy a predicate against the run's
/// first element.
///
/// A candidate joins the current run while `pred(first, candidate)` holds,
/// where `first` is the element that opened the run, not the candidate's
/// immediate predecessor. For a non-transitive predicate this differs from
/// pairwise grouping:
///
/// ```
/// use loom_core::{Shared, View};
/// use loom_iter::group_by;
///
/// let close = |a: &i32, b: &i32| (b - a).abs() <= 1;
/// let runs: Vec<Vec<i32>> = Shared::new(vec![1, 2, 3, 4])
///     .pipe(group_by(close))
///     .iter()
///     .map(|run| run.to_vec())
///     .collect();
/// // 3 is within 1 of 2 but not of 1, so it opens a new run.
/// assert_eq!(runs, vec![vec![1, 2], vec![3, 4]]);
/// ```
#[derive(Debug, Clone)]
pub struct GroupBy<V, P> {
    base: V,
    pred: P,
}

impl<V, P> GroupBy<V, P>
where
    V: View,
    P: Fn(&V::Item, &V::Item) -> bool + Clone,
{
    /// Groups `base` into runs under `pred`.
    #[inline]
    pub fn new(base: V, pred: P) -> Self {
        GroupBy { base, pred }
    }
}

impl<V, P> View for GroupBy<V, P>
where
    V: View,
    P: Fn(&V::Item, &V::Item) -> bool + Clone,
{
    type Item = Subrange<V::Cursor>;
    type Cursor = GroupByCursor<V::Cursor, P>;

    fn begin(&self) -> Self::Cursor {
        let cur = self.base.begin();
        let mut cursor = GroupByCursor {
            next: cur.clone(),
            cur,
            len: 0,
            pred: self.pred.clone(),
        };
        cursor.scan();
        cursor
    }
}

/// Cursor over a [`GroupBy`] view: the current run is `[cur, next)`.
#[derive(Debug, Clone)]
pub struct GroupByCursor<C, P> {
    cur: C,
    next: C,
    len: usize,
    pred: P,
}

impl<C, P> GroupByCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item, &C::Item) -> bool,
{
    /// Recomputes `next` and `len` from `cur`.
    fn scan(&mut self) {
        self.next = self.cur.clone();
        self.len = 0;
        let Some(first) = self.cur.get() else {
            return;
        };
        self.next.advance();
        self.len = 1;
        while let Some(candidate) = self.next.get() {
            if !(self.pred)(&first, &candidate) {
                break;
            }
            self.next.advance();
            self.len += 1;
        }
    }
}

impl<C, P> Cursor for GroupByCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item, &C::Item) -> bool + Clone,
{
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

    fn advance(&mut self) {
        if self.cur.is_end() {
            return;
        }
        self.cur = self.next.clone();
        self.scan();
    }
}

/// Adaptor produced by [`group_by`].
#[derive(Debug, Clone, Copy)]
pub struct GroupByAdaptor<P> {
    pred: P,
}

impl<V, P> Adaptor<V> for GroupByAdaptor<P>
where
    V: View,
    P: Fn(&V::Item, &V::Item) -> bool + Clone,
{
    type Output = GroupBy<V, P>;

    #[inline]
    fn apply(self, view: V) -> GroupBy<V, P> {
        GroupBy::new(view, self.pred)
    }
}

/// Splits a view into runs where `pred(run_first, element)` holds.
#[inline]
pub fn group_by<P>(pred: P) -> GroupByAdaptor<P> {
    GroupByAdaptor { pred }
}
