//! Property tests for the adaptors and the calendar.

use loom::calendar::layout::{self, BLOCK_LINES};
use loom::calendar::{Layout, LayoutConfig};
use loom::prelude::*;
use proptest::collection::vec;
use proptest::prelude::*;
use quickcheck::{quickcheck, TestResult};

fn rows_of(height: usize, width: usize) -> Shared<Shared<usize>> {
    Shared::new(
        (0..height)
            .map(|r| Shared::new((0..width).map(|c| r * width + c).collect()))
            .collect(),
    )
}

proptest! {
    /// Chunks cover the source in order, all full except possibly the last.
    #[test]
    fn prop_chunk_partitions_source(data in vec(any::<u32>(), 0..200), size in 1usize..20) {
        let chunks: Vec<Vec<u32>> = Shared::new(data.clone())
            .pipe(chunk(size).unwrap())
            .iter()
            .map(|c| c.to_vec())
            .collect();

        prop_assert_eq!(chunks.len(), data.len().div_ceil(size));
        if let Some((last, full)) = chunks.split_last() {
            prop_assert!(full.iter().all(|c| c.len() == size));
            prop_assert!(!last.is_empty() && last.len() <= size);
        }
        prop_assert_eq!(chunks.concat(), data);
    }

    /// Stride keeps exactly the elements at multiples of the step.
    #[test]
    fn prop_stride_matches_step_by(data in vec(any::<i16>(), 0..200), step in 1usize..30) {
        let strided = Shared::new(data.clone()).pipe(stride(step).unwrap()).to_vec();
        let expected: Vec<i16> = data.iter().copied().step_by(step).collect();
        prop_assert_eq!(strided, expected);
    }

    /// Concatenation preserves order and length, whatever sources are empty.
    #[test]
    fn prop_concat_preserves_all_elements(
        a in vec(any::<u8>(), 0..20),
        b in vec(any::<u8>(), 0..20),
        c in vec(any::<u8>(), 0..20),
    ) {
        let joined = concat((
            Shared::new(a.clone()),
            empty::<u8>(),
            Shared::new(b.clone()),
            Shared::new(c.clone()),
        ));
        let expected: Vec<u8> = [a, b, c].concat();
        prop_assert_eq!(joined.count(), expected.len());
        prop_assert_eq!(joined.to_vec(), expected);
    }

    /// Equality runs are maximal and non-empty, and reassemble the source.
    #[test]
    fn prop_group_by_equality_runs(data in vec(0u8..4, 0..100)) {
        let runs: Vec<Vec<u8>> = Shared::new(data.clone())
            .pipe(group_by(|a: &u8, b: &u8| a == b))
            .iter()
            .map(|r| r.to_vec())
            .collect();

        for run in &runs {
            prop_assert!(!run.is_empty());
            prop_assert!(run.iter().all(|x| *x == run[0]));
        }
        for pair in runs.windows(2) {
            prop_assert_ne!(pair[0][0], pair[1][0]);
        }
        prop_assert_eq!(runs.concat(), data);
    }

    /// Transposing twice gives back the rows.
    #[test]
    fn prop_transpose_twice_is_identity(height in 1usize..8, width in 1usize..8) {
        let rows = rows_of(height, width);
        let once = rows.clone().pipe(transpose()).unwrap();
        prop_assert_eq!(once.count(), width);
        let twice = once.pipe(transpose()).unwrap();

        let original: Vec<Vec<usize>> = rows.iter().map(|r| r.to_vec()).collect();
        let restored: Vec<Vec<usize>> = twice.iter().map(|r| r.to_vec()).collect();
        prop_assert_eq!(restored, original);
    }

    /// Skip drops a prefix and never more than the source holds.
    #[test]
    fn prop_skip_drops_prefix(data in vec(any::<u32>(), 0..50), n in 0usize..60) {
        let rest = Shared::new(data.clone()).pipe(skip(n)).to_vec();
        prop_assert_eq!(rest, data.iter().copied().skip(n).collect::<Vec<_>>());
    }

    /// Every day of the year is printed exactly once, in a fixed-size grid.
    #[test]
    fn prop_calendar_prints_every_day(year in 1800i32..2200, per_row in 1usize..7) {
        let config = LayoutConfig::builder().months_per_row(per_row).build().unwrap();
        let lines = Layout::new(layout::year(year), &config).unwrap().lines().unwrap();

        prop_assert_eq!(lines.len(), 12usize.div_ceil(per_row) * BLOCK_LINES);
        let days = lines
            .iter()
            .flat_map(|l| l.split_whitespace())
            .filter(|token| token.parse::<u8>().is_ok())
            .count();
        let expected = if loom::calendar::is_leap_year(year) { 366 } else { 365 };
        prop_assert_eq!(days, expected);
    }
}

quickcheck! {
    fn qc_concat_dyn_length_is_sum(parts: Vec<Vec<u16>>) -> TestResult {
        if parts.is_empty() {
            return TestResult::discard();
        }
        let expected: usize = parts.iter().map(Vec::len).sum();
        let views = parts.into_iter().map(|p| Shared::new(p).boxed()).collect();
        let joined = concat_dyn(views).unwrap();
        TestResult::from_bool(joined.count() == expected)
    }

    fn qc_stride_count(len: u8, step: u8) -> TestResult {
        if step == 0 {
            return TestResult::discard();
        }
        let view = iota_between(0u32, u32::from(len)).pipe(stride(usize::from(step)).unwrap());
        TestResult::from_bool(view.count() == usize::from(len).div_ceil(usize::from(step)))
    }

    fn qc_join_of_chunks_is_identity(data: Vec<i32>, size: u8) -> TestResult {
        if size == 0 {
            return TestResult::discard();
        }
        let rebuilt = Shared::new(data.clone())
            .pipe(chunk(usize::from(size)).unwrap())
            .pipe(join())
            .to_vec();
        TestResult::from_bool(rebuilt == data)
    }
}
