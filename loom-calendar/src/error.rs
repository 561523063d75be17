//! Error types for the calendar layer.

use loom_core::ViewError;
use thiserror::Error;

/// Errors raised while building dates, loading configuration or rendering.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Error)]
pub enum CalendarError {
    /// A year/month/day triple that names no day
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component, 1-based
        month: u8,
        /// Day component, 1-based
        day: u8,
    },
    /// Text that is not a `YYYY-MM-DD` date
    #[error("cannot parse {0:?} as a YYYY-MM-DD date")]
    ParseDate(String),
    /// A configuration value outside its accepted range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A configuration file that is not valid TOML for the layout
    #[error("malformed configuration file: {0}")]
    ConfigFormat(#[from] toml::de::Error),
    /// A view adaptor rejected its input while assembling the layout
    #[error(transparent)]
    View(#[from] ViewError),
    /// The output sink failed
    #[error("failed to write calendar: {0}")]
    Io(#[from] std::io::Error),
}

/// A result type for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
