//! The calendar pipeline.
//!
//! A view of dates becomes text in stages, each stage a lazy adaptor:
//!
//! 1. `group_by(same_month)` splits the dates into months.
//! 2. Each month is rendered as a block of [`BLOCK_LINES`] strings: a
//!    centred title, the weekday header, one row per `group_by(same_week)`
//!    run, and blank rows up to [`WEEK_ROWS`]. The block is a `concat` of
//!    those four parts.
//! 3. `chunk(months_per_row)` gathers blocks into bands.
//! 4. Each band is transposed at the sink so that line `i` of the output
//!    holds line `i` of every month in the band, joined by the separator.
//!
//! Nothing is formatted until a sink pulls lines.

use std::fmt;
use std::io::Write;

use loom_core::{iota_between, repeat_n, single, Counted, Cursor, Iota, Repeat, Subrange, View};
use loom_iter::{
    chunk, concat, group_by, transform, transpose, Chunk, Concat, GroupBy, Transform,
};

use crate::config::LayoutConfig;
use crate::date::Date;
use crate::error::CalendarResult;

/// Width of one day field.
pub const DAY_WIDTH: usize = 3;
/// Width of every line of a month block.
pub const ROW_WIDTH: usize = 7 * DAY_WIDTH + 1;
/// Week rows per month block, enough for any month.
pub const WEEK_ROWS: usize = 6;
/// Lines per month block: title, header and week rows.
pub const BLOCK_LINES: usize = WEEK_ROWS + 2;
/// The weekday header line.
pub const HEADER: &str = " Su Mo Tu We Th Fr Sa ";

/// Predicate deciding whether a date stays in the run opened by another.
pub type SameRun = fn(&Date, &Date) -> bool;

/// Formats one week of a month drawn from cursor `C`.
pub type WeekFormatter<C> = fn(Subrange<Counted<C>>) -> String;

/// The formatted week rows of one month.
pub type WeekRows<C> = Transform<GroupBy<Subrange<C>, SameRun>, WeekFormatter<C>>;

/// The [`BLOCK_LINES`] lines of one month.
pub type MonthBlock<C> = Concat<(Repeat<String>, Repeat<String>, WeekRows<C>, Repeat<String>)>;

/// Renders a month drawn from cursor `C` as a block.
pub type MonthRenderer<C> = fn(Subrange<C>) -> MonthBlock<C>;

/// Every month of a date view, rendered as blocks.
pub type MonthBlocks<V> =
    Transform<GroupBy<V, SameRun>, MonthRenderer<<V as View>::Cursor>>;

fn same_month(first: &Date, candidate: &Date) -> bool {
    first.year() == candidate.year() && first.month() == candidate.month()
}

fn same_week(first: &Date, candidate: &Date) -> bool {
    // Weeks start on Sunday, so a run ends when the weekday stops increasing.
    candidate.weekday() > first.weekday()
}

/// Splits dates into runs sharing a year and month.
pub fn by_month<V: View<Item = Date>>(dates: V) -> GroupBy<V, SameRun> {
    dates.pipe(group_by(same_month as SameRun))
}

/// Splits consecutive dates into Sunday-first weeks.
pub fn by_week<V: View<Item = Date>>(dates: V) -> GroupBy<V, SameRun> {
    dates.pipe(group_by(same_week as SameRun))
}

/// Formats a week as a [`ROW_WIDTH`] row.
///
/// The row is indented by the first day's weekday so that every day sits
/// under its header column.
pub fn format_week<C: Cursor<Item = Date>>(week: Subrange<C>) -> String {
    let mut row = String::with_capacity(ROW_WIDTH);
    if let Some(first) = week.first() {
        let indent = usize::from(first.weekday()) * DAY_WIDTH;
        row.push_str(&" ".repeat(indent));
    }
    for day in week.iter() {
        row.push_str(&day.format_day(DAY_WIDTH));
    }
    format!("{row:<width$}", width = ROW_WIDTH)
}

/// Renders one month as a block of exactly [`BLOCK_LINES`] lines.
pub fn month_block<C: Cursor<Item = Date>>(month: Subrange<C>) -> MonthBlock<C> {
    let title = month.first().map(Date::month_name).unwrap_or_default();
    let weeks: WeekRows<C> =
        by_week(month).pipe(transform(format_week::<Counted<C>> as WeekFormatter<C>));
    let padding = WEEK_ROWS.saturating_sub(weeks.count());

    concat((
        single(format!("{title:^width$}", width = ROW_WIDTH)),
        single(HEADER.to_owned()),
        weeks,
        repeat_n(" ".repeat(ROW_WIDTH), padding),
    ))
}

/// Renders every month of `dates` as a block.
pub fn month_blocks<V: View<Item = Date>>(dates: V) -> MonthBlocks<V> {
    by_month(dates).pipe(transform(month_block::<V::Cursor> as MonthRenderer<V::Cursor>))
}

/// Every day of `year`.
pub fn year(year: i32) -> Iota<Date> {
    years(year, 1)
}

/// Every day of `count` consecutive years starting at `first`.
pub fn years(first: i32, count: u16) -> Iota<Date> {
    iota_between(
        Date::first_of_year(first),
        Date::first_of_year(first + i32::from(count)),
    )
}

/// A calendar over a view of dates, ready to be written out.
///
/// # Examples
/// ```
/// use loom_calendar::{layout, Layout, LayoutConfig};
///
/// let config = LayoutConfig::builder().months_per_row(3).build().unwrap();
/// let calendar = Layout::new(layout::year(2022), &config).unwrap();
/// let lines = calendar.lines().unwrap();
/// assert_eq!(lines.len(), 4 * 8);
/// assert!(lines[0].contains("January"));
/// assert!(lines[0].contains("March"));
/// ```
#[derive(Clone)]
pub struct Layout<V: View<Item = Date>> {
    bands: Chunk<MonthBlocks<V>>,
    separator: String,
}

impl<V: View<Item = Date>> Layout<V> {
    /// Assembles the pipeline. No date is read until a sink pulls lines.
    ///
    /// # Errors
    /// Returns [`CalendarError::InvalidConfig`](crate::CalendarError) if the
    /// configuration does not validate.
    pub fn new(dates: V, config: &LayoutConfig) -> CalendarResult<Self> {
        config.validate()?;
        tracing::debug!(
            months_per_row = config.months_per_row,
            separator = ?config.separator,
            "assembling calendar layout"
        );
        let bands = month_blocks(dates).pipe(chunk(config.months_per_row)?);
        Ok(Layout {
            bands,
            separator: config.separator.clone(),
        })
    }

    /// Months per band.
    pub fn months_per_row(&self) -> usize {
        self.bands.size()
    }

    /// Feeds every output line, top to bottom, to `sink`.
    ///
    /// # Errors
    /// Propagates the first error returned by `sink`, and any
    /// [`ViewError`](loom_core::ViewError) raised while transposing a band.
    pub fn for_each_line<F>(&self, mut sink: F) -> CalendarResult<()>
    where
        F: FnMut(String) -> CalendarResult<()>,
    {
        for (index, band) in self.bands.iter().enumerate() {
            let lines = band.pipe(transpose())?;
            tracing::trace!(band = index, months = lines.height(), "rendering band");
            for line in lines.iter() {
                sink(self.join_cells(line))?;
            }
        }
        Ok(())
    }

    /// Collects every output line.
    ///
    /// # Errors
    /// See [`for_each_line`](Self::for_each_line).
    pub fn lines(&self) -> CalendarResult<Vec<String>> {
        let mut lines = Vec::new();
        self.for_each_line(|line| {
            lines.push(line);
            Ok(())
        })?;
        Ok(lines)
    }

    /// The whole calendar as one string, one line per output row.
    ///
    /// # Errors
    /// See [`for_each_line`](Self::for_each_line).
    pub fn render(&self) -> CalendarResult<String> {
        let mut text = String::new();
        self.for_each_line(|line| {
            text.push_str(&line);
            text.push('\n');
            Ok(())
        })?;
        Ok(text)
    }

    /// Writes the calendar to `out`, one line at a time.
    ///
    /// # Errors
    /// Returns [`CalendarError::Io`](crate::CalendarError::Io) if `out` fails.
    pub fn write_to<W: Write>(&self, out: &mut W) -> CalendarResult<()> {
        self.for_each_line(|line| {
            writeln!(out, "{line}")?;
            Ok(())
        })?;
        out.flush()?;
        Ok(())
    }

    // Final stage: one transposed line of month cells becomes a text row.
    fn join_cells<L: View<Item = String>>(&self, cells: L) -> String {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                line.push_str(&self.separator);
            }
            line.push_str(&cell);
        }
        line
    }
}

impl<V: View<Item = Date>> fmt::Debug for Layout<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout")
            .field("months_per_row", &self.bands.size())
            .field("separator", &self.separator)
            .finish_non_exhaustive()
    }
}
