//! Lazy view adaptors for loom.
//!
//! Every adaptor wraps one view (or, for [`concat`], several) into a new view
//! without touching the source. Adaptors are built first, which is where
//! their parameters are validated, and then applied with
//! [`View::pipe`](loom_core::View::pipe):
//!
//! ```
//! use loom_core::{iota_between, View};
//! use loom_iter::{chunk, transpose};
//!
//! let columns = iota_between(0, 8)
//!     .pipe(chunk(4).unwrap())
//!     .pipe(transpose())
//!     .unwrap();
//! let first: Vec<_> = columns.iter().next().unwrap().to_vec();
//! assert_eq!(first, vec![0, 4]);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod chunk;
pub mod concat;
pub mod group_by;
pub mod join;
pub mod skip;
pub mod stride;
pub mod transform;
pub mod transpose;

pub use chunk::{chunk, Chunk, ChunkAdaptor, ChunkCursor};
pub use concat::{concat, concat_dyn, Concat, DynConcat, DynConcatCursor};
pub use group_by::{group_by, GroupBy, GroupByAdaptor, GroupByCursor};
pub use join::{join, Join, JoinAdaptor, JoinCursor};
pub use skip::{skip, Skip, SkipAdaptor};
pub use stride::{stride, Stride, StrideAdaptor, StrideCursor};
pub use transform::{transform, Transform, TransformAdaptor, TransformCursor};
pub use transpose::{transpose, Column, Transpose, TransposeAdaptor, TransposeCursor};
