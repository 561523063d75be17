//! Row/column reinterpretation of a rectangular view of views.
//!
//! Transpose introduces no cursor machinery of its own. Given rows `M` of
//! uniform length, it flattens them with [`Join`], and column `c` is
//! `join(M) | skip(c) | stride(width)`. The columns themselves are produced
//! lazily by mapping column indices `0..width` through that expression.

use loom_core::{Adaptor, Cursor, IotaCursor, Precondition, View, ViewResult};

use crate::join::Join;
use crate::skip::Skip;
use crate::stride::Stride;

/// One column of a transposed view.
pub type Column<V> = Stride<Skip<Join<V>>>;

/// Columns of a rectangular view of rows.
///
/// # Examples
/// ```
/// use loom_core::{Shared, View};
/// use loom_iter::transpose;
///
/// let rows = Shared::new(vec![
///     Shared::new(vec!['a', 'b', 'c']),
///     Shared::new(vec!['d', 'e', 'f']),
/// ]);
/// let columns: Vec<Vec<char>> = rows
///     .pipe(transpose())
///     .unwrap()
///     .iter()
///     .map(|column| column.to_vec())
///     .collect();
/// assert_eq!(columns, vec![vec!['a', 'd'], vec!['b', 'e'], vec!['c', 'f']]);
/// ```
#[derive(Debug, Clone)]
pub struct Transpose<V> {
    flat: Join<V>,
    height: usize,
    width: usize,
}

impl<V> Transpose<V>
where
    V: View,
    V::Item: View,
{
    /// Transposes `rows`, checking that it is a non-empty rectangle.
    ///
    /// Validation walks every row once.
    ///
    /// # Errors
    /// Returns [`Precondition::EmptyMatrix`] if there are no rows and
    /// [`Precondition::RaggedRows`] if any row's length differs from the
    /// first row's.
    pub fn new(rows: V) -> ViewResult<Self> {
        let mut cursor = rows.begin();
        let Some(first) = cursor.get() else {
            tracing::warn!("transpose rejected: no rows");
            return Err(Precondition::EmptyMatrix.into());
        };
        let width = first.count();
        let mut height = 1;
        cursor.advance();

        while let Some(row) = cursor.get() {
            let found = row.count();
            if found != width {
                tracing::warn!(row = height, expected = width, found, "transpose rejected: ragged rows");
                return Err(Precondition::RaggedRows {
                    row: height,
                    expected: width,
                    found,
                }
                .into());
            }
            height += 1;
            cursor.advance();
        }

        tracing::debug!(height, width, "transposing");
        Ok(Transpose {
            flat: Join::new(rows),
            height,
            width,
        })
    }

    /// Number of rows in the input, which is the length of every column.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns produced.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Column `index` as `join(rows) | skip(index) | stride(width)`.
    ///
    /// Returns `None` if `index` is not below [`width`](Self::width).
    pub fn column(&self, index: usize) -> Option<Column<V>> {
        (index < self.width).then(|| {
            Stride::with_step(Skip::new(self.flat.clone(), index), self.width)
        })
    }
}

impl<V> View for Transpose<V>
where
    V: View,
    V::Item: View,
{
    type Item = Column<V>;
    type Cursor = TransposeCursor<V>;

    #[inline]
    fn begin(&self) -> TransposeCursor<V> {
        TransposeCursor {
            index: loom_core::iota_between(0, self.width).begin(),
            columns: self.clone(),
        }
    }

    #[inline]
    fn count(&self) -> usize {
        self.width
    }
}

/// Cursor over a [`Transpose`] view: a column index into `0..width`.
#[derive(Debug, Clone)]
pub struct TransposeCursor<V> {
    index: IotaCursor<usize>,
    columns: Transpose<V>,
}

impl<V> Cursor for TransposeCursor<V>
where
    V: View,
    V::Item: View,
{
    type Item = Column<V>;

    #[inline]
    fn is_end(&self) -> bool {
        self.index.is_end()
    }

    #[inline]
    fn get(&self) -> Option<Column<V>> {
        self.index.get().and_then(|c| self.columns.column(c))
    }

    #[inline]
    fn advance(&mut self) {
        self.index.advance();
    }
}

/// Adaptor produced by [`transpose`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TransposeAdaptor;

impl<V> Adaptor<V> for TransposeAdaptor
where
    V: View,
    V::Item: View,
{
    type Output = ViewResult<Transpose<V>>;

    #[inline]
    fn apply(self, view: V) -> ViewResult<Transpose<V>> {
        Transpose::new(view)
    }
}

/// Turns rows into columns. Applying it validates the input.
#[inline]
pub fn transpose() -> TransposeAdaptor {
    TransposeAdaptor
}
