//! # Loom Core
//!
//! The view/cursor protocol every loom adaptor implements and consumes.
//!
//! A [`View`] is an immutable, cheaply cloned description of a sequence. A
//! [`Cursor`] is the mutable state of one traversal over it, and the
//! [`Sentinel`] is the single terminal marker all cursors compare against.
//! Nothing is computed until a consumer pulls from a cursor.
//!
//! ```
//! use loom_core::{iota_between, Cursor, View};
//!
//! let view = iota_between(0u32, 3);
//! let mut cursor = view.begin();
//! let mut seen = Vec::new();
//! while !cursor.at_end(&view.end()) {
//!     seen.push(cursor.current().unwrap());
//!     cursor.advance();
//! }
//! assert_eq!(seen, vec![0, 1, 2]);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod cursor;
pub mod error;
pub mod source;
pub mod subrange;
pub mod view;

pub use cursor::{BoxedCursor, Cursor, Iter, Sentinel};
pub use error::{Precondition, ViewError, ViewResult};
pub use source::{
    empty, iota, iota_between, repeat_n, single, Empty, Iota, IotaCursor, Repeat, RepeatCursor,
    Shared, SharedCursor, Slice, SliceCursor, Step,
};
pub use subrange::{Counted, Subrange};
pub use view::{Adaptor, BoxedView, View};
