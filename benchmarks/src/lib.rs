//! Shared fixtures for the loom benchmarks.
//!
//! Each fixture builds its source once so that a benchmark iteration only
//! pays for traversal.

use loom::Shared;

/// Source lengths exercised by the adaptor benchmarks.
pub const SIZES: &[usize] = &[1_000, 10_000, 100_000];

/// `len` consecutive integers starting at 0.
pub fn numbers(len: usize) -> Shared<u64> {
    Shared::new((0..len as u64).collect())
}

/// A `height` x `width` matrix holding `0..height * width` row by row.
pub fn matrix(height: usize, width: usize) -> Shared<Shared<u64>> {
    Shared::new(
        (0..height)
            .map(|r| Shared::new((0..width).map(|c| (r * width + c) as u64).collect()))
            .collect(),
    )
}

/// `len` values forming runs of `run` equal elements.
pub fn runs(len: usize, run: usize) -> Shared<u64> {
    Shared::new((0..len).map(|i| (i / run.max(1)) as u64).collect())
}
