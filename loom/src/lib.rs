//! # Loom - Weaving Sequences Lazily
//!
//! Loom describes sequences as immutable views and computes their elements
//! only when a cursor pulls them. Views compose left to right with
//! [`View::pipe`]:
//!
//! ```
//! use loom::prelude::*;
//!
//! let evens_in_pairs: Vec<Vec<u32>> = iota_between(0u32, 12)
//!     .pipe(stride(2).unwrap())
//!     .pipe(chunk(2).unwrap())
//!     .iter()
//!     .map(|pair| pair.to_vec())
//!     .collect();
//! assert_eq!(evens_in_pairs, vec![vec![0, 2], vec![4, 6], vec![8, 10]]);
//! ```
//!
//! ## Crates
//!
//! - `loom-core`: the view/cursor protocol, sources and errors
//! - `loom-iter`: chunk, stride, concat, group_by, join, skip, transform, transpose
//! - `loom-calendar` (feature `calendar`): calendar grids built from the adaptors

#![deny(missing_docs)]
#![warn(clippy::all)]

pub use loom_core::*;
pub use loom_iter::*;

/// Calendar rendering.
#[cfg(feature = "calendar")]
pub use loom_calendar as calendar;

/// Everything needed to build and consume views.
pub mod prelude {
    pub use loom_core::{
        empty, iota, iota_between, repeat_n, single, BoxedView, Cursor, Shared, Slice, View,
        ViewError, ViewResult,
    };
    pub use loom_iter::{
        chunk, concat, concat_dyn, group_by, join, skip, stride, transform, transpose,
    };
}
