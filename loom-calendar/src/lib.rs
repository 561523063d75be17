//! Calendar grids rendered through loom view adaptors.
//!
//! A [`Layout`] turns any view of [`Date`]s into text lines. Months are
//! grouped, laid out as fixed-size blocks and printed side by side, with
//! every step being a lazy adaptor from `loom-iter`.
//!
//! ```
//! use loom_calendar::{layout, Layout, LayoutConfig};
//!
//! let calendar = Layout::new(layout::year(2022), &LayoutConfig::default()).unwrap();
//! let text = calendar.render().unwrap();
//! assert_eq!(text.lines().count(), 24);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod date;
pub mod error;
pub mod layout;

pub use config::{LayoutConfig, LayoutConfigBuilder};
pub use date::{days_in_month, is_leap_year, Date};
pub use error::{CalendarError, CalendarResult};
pub use layout::Layout;
