//! Integration tests for the loom view engine.

#[cfg(test)]
mod property_tests;

/// Pipelines that cross crate boundaries.
#[cfg(test)]
mod integration_tests {
    use loom::prelude::*;
    use loom::{Precondition, SharedCursor, Subrange};

    #[test]
    fn test_chunk_then_join_restores_source() {
        let source = Shared::new((0..23).collect::<Vec<u32>>());
        let rebuilt = source.clone().pipe(chunk(5).unwrap()).pipe(join());
        assert_eq!(rebuilt.to_vec(), source.to_vec());
    }

    #[test]
    fn test_pipeline_reads_left_to_right() {
        // [0, 20) -> every third -> pairs
        let pairs: Vec<Vec<u32>> = iota_between(0u32, 20)
            .pipe(stride(3).unwrap())
            .pipe(chunk(2).unwrap())
            .iter()
            .map(|pair| pair.to_vec())
            .collect();
        assert_eq!(
            pairs,
            vec![vec![0, 3], vec![6, 9], vec![12, 15], vec![18]]
        );
    }

    #[test]
    fn test_views_are_reusable() {
        let view = iota_between(1u32, 8).pipe(chunk(3).unwrap());
        let first: Vec<usize> = view.iter().map(|c| c.count()).collect();
        let second: Vec<usize> = view.iter().map(|c| c.count()).collect();
        assert_eq!(first, vec![3, 3, 1]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_concat_mixes_source_kinds() {
        let joined = concat((
            Shared::new(vec![1u32, 2]),
            empty::<u32>(),
            iota_between(10u32, 13),
            repeat_n(7u8, 2),
        ));
        assert_eq!(joined.to_vec(), vec![1, 2, 10, 11, 12, 7, 7]);
        assert_eq!(joined.count(), 7);
    }

    #[test]
    fn test_concat_dyn_of_adapted_views() {
        let evens = iota_between(0u32, 10).pipe(stride(2).unwrap()).boxed();
        let tail = Shared::new(vec![100u32]).boxed();
        let joined = concat_dyn(vec![evens, empty::<u32>().boxed(), tail]).unwrap();
        assert_eq!(joined.to_vec(), vec![0, 2, 4, 6, 8, 100]);
        assert_eq!(
            concat_dyn::<u32>(Vec::new()).unwrap_err(),
            ViewError::PreconditionViolation(Precondition::NoSources)
        );
    }

    #[test]
    fn test_group_by_then_transform() {
        let runs = Shared::new(vec!['a', 'a', 'b', 'c', 'c', 'c'])
            .pipe(group_by(|a: &char, b: &char| a == b))
            .pipe(transform(|run: Subrange<SharedCursor<char>>| (run.first(), run.len())));
        assert_eq!(
            runs.to_vec(),
            vec![(Some('a'), 2), (Some('b'), 1), (Some('c'), 3)]
        );
    }

    #[test]
    fn test_transpose_of_skipped_rows() {
        let rows = iota_between(0u32, 12)
            .pipe(skip(3))
            .pipe(chunk(3).unwrap());
        let columns: Vec<Vec<u32>> = rows
            .pipe(transpose())
            .unwrap()
            .iter()
            .map(|c| c.to_vec())
            .collect();
        assert_eq!(columns, vec![vec![3, 6, 9], vec![4, 7, 10], vec![5, 8, 11]]);
    }

    #[test]
    fn test_transpose_reports_ragged_input() {
        let rows = iota_between(0u32, 7).pipe(chunk(3).unwrap());
        assert_eq!(
            rows.pipe(transpose()).unwrap_err(),
            ViewError::PreconditionViolation(Precondition::RaggedRows {
                row: 2,
                expected: 3,
                found: 1,
            })
        );
    }

    #[test]
    fn test_dereference_past_end_is_an_error() {
        let view = Shared::new(vec![1u32]);
        let mut cursor = view.begin();
        assert_eq!(cursor.current(), Ok(1));
        cursor.advance();
        assert!(cursor.at_end(&view.end()));
        assert_eq!(cursor.current(), Err(ViewError::IterationPastEnd));
        cursor.advance();
        assert!(cursor.is_end());
    }

    #[test]
    fn test_invalid_parameters_rejected_up_front() {
        assert_eq!(
            chunk(0).unwrap_err(),
            ViewError::PreconditionViolation(Precondition::ZeroChunkSize)
        );
        assert_eq!(
            stride(0).unwrap_err(),
            ViewError::PreconditionViolation(Precondition::ZeroStride)
        );
    }

    #[test]
    fn test_unbounded_source_is_pulled_lazily() {
        let first_chunks: Vec<Vec<u64>> = iota(0u64)
            .pipe(stride(4).unwrap())
            .pipe(chunk(2).unwrap())
            .iter()
            .take(2)
            .map(|c| c.to_vec())
            .collect();
        assert_eq!(first_chunks, vec![vec![0, 4], vec![8, 12]]);
    }

    #[test]
    fn test_slices_borrow_elements() {
        let words = ["lazy", "views", "compose"];
        let picked: Vec<&&str> = Slice::new(&words).pipe(stride(2).unwrap()).to_vec();
        assert_eq!(picked, vec![&"lazy", &"compose"]);
    }
}

/// End-to-end calendar rendering through the facade.
#[cfg(test)]
mod calendar_tests {
    use loom::calendar::layout::{self, BLOCK_LINES, ROW_WIDTH};
    use loom::calendar::{CalendarError, Date, Layout, LayoutConfig};
    use loom::View;

    #[test]
    fn test_year_2022_grid() {
        let calendar = Layout::new(layout::year(2022), &LayoutConfig::default()).unwrap();
        let lines = calendar.lines().unwrap();
        assert_eq!(lines.len(), 3 * BLOCK_LINES);

        // January 1st 2022 is a Saturday: the first week row is indented by
        // six day fields.
        let january_first_week = &lines[2][..ROW_WIDTH];
        assert_eq!(january_first_week, format!("{}  1 ", " ".repeat(18)));
    }

    #[test]
    fn test_february_2022_has_one_blank_row() {
        let config = LayoutConfig::builder().months_per_row(1).build().unwrap();
        let lines = Layout::new(layout::year(2022), &config).unwrap().lines().unwrap();
        let block = &lines[BLOCK_LINES..2 * BLOCK_LINES];
        assert_eq!(block[0].trim(), "February");
        let blank: Vec<&String> = block.iter().filter(|l| l.trim().is_empty()).collect();
        assert_eq!(blank.len(), 1);
    }

    #[test]
    fn test_month_boundary_inside_range() {
        let start: Date = "2022-03-30".parse().unwrap();
        let end: Date = "2022-04-03".parse().unwrap();
        let months = layout::by_month(loom::iota_between(start, end));
        let lengths: Vec<usize> = months.iter().map(|m| m.len()).collect();
        assert_eq!(lengths, vec![2, 2]);
    }

    #[test]
    fn test_bad_config_surfaces_as_calendar_error() {
        let err = LayoutConfig::from_toml_str("months_per_row = 0").unwrap_err();
        assert!(matches!(err, CalendarError::InvalidConfig(_)));
    }
}
