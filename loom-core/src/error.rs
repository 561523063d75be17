//! Error types for view construction and cursor dereference.

use thiserror::Error;

/// Errors raised by views and adaptors.
///
/// Every variant is surfaced synchronously: parameter problems when an
/// adaptor is built, dereference problems when a finished cursor is read.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// An adaptor was built or applied with arguments it cannot accept
    #[error("precondition violated: {0}")]
    PreconditionViolation(Precondition),
    /// A cursor was dereferenced after reaching its sentinel
    #[error("cursor dereferenced past the end of its view")]
    IterationPastEnd,
}

/// The specific precondition an adaptor rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Precondition {
    /// `chunk(0)`
    ZeroChunkSize,
    /// `stride(0)`
    ZeroStride,
    /// A runtime concatenation was given no sources
    NoSources,
    /// `transpose` applied to a view with no rows
    EmptyMatrix,
    /// `transpose` applied to rows of different lengths
    RaggedRows {
        /// Index of the first offending row
        row: usize,
        /// Length of row 0
        expected: usize,
        /// Length of the offending row
        found: usize,
    },
}

impl core::fmt::Display for Precondition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroChunkSize => write!(f, "chunk size must be non-zero"),
            Self::ZeroStride => write!(f, "stride step must be non-zero"),
            Self::NoSources => write!(f, "concat requires at least one source"),
            Self::EmptyMatrix => write!(f, "transpose requires at least one row"),
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "transpose requires uniform rows: row {row} has {found} elements, expected {expected}"
            ),
        }
    }
}

impl From<Precondition> for ViewError {
    fn from(precondition: Precondition) -> Self {
        Self::PreconditionViolation(precondition)
    }
}

/// A result type for view construction and dereference.
pub type ViewResult<T> = Result<T, ViewError>;
