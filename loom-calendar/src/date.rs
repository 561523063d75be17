//! Proleptic Gregorian civil dates.

use core::fmt;
use core::str::FromStr;

use loom_core::Step;

use crate::error::{CalendarError, CalendarResult};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar day.
///
/// Ordering is chronological. Weekdays count from Sunday = 0 to
/// Saturday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    // Field order drives the derived ordering.
    year: i32,
    month: u8,
    day: u8,
}

impl Date {
    /// Builds a date, rejecting days that do not exist.
    ///
    /// # Errors
    /// Returns [`CalendarError::InvalidDate`] for a month outside `1..=12`
    /// or a day outside the month.
    pub fn new(year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Ok(Date { year, month, day })
    }

    /// January 1st of `year`.
    #[must_use]
    pub const fn first_of_year(year: i32) -> Self {
        Date {
            year,
            month: 1,
            day: 1,
        }
    }

    /// The year.
    #[inline]
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// The month, 1-based.
    #[inline]
    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// The day of the month, 1-based.
    #[inline]
    #[must_use]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Day of the week, Sunday = 0 through Saturday = 6.
    #[must_use]
    pub fn weekday(self) -> u8 {
        // Sakamoto's method.
        const OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
        let mut y = i64::from(self.year);
        if self.month < 3 {
            y -= 1;
        }
        let days = y + y.div_euclid(4) - y.div_euclid(100)
            + y.div_euclid(400)
            + OFFSETS[usize::from(self.month - 1)]
            + i64::from(self.day);
        // rem_euclid(7) is always in 0..7
        days.rem_euclid(7) as u8
    }

    /// The following day.
    #[must_use]
    pub fn next_day(self) -> Self {
        if self.day < days_in_month(self.year, self.month) {
            Date {
                day: self.day + 1,
                ..self
            }
        } else if self.month < 12 {
            Date {
                year: self.year,
                month: self.month + 1,
                day: 1,
            }
        } else {
            Date::first_of_year(self.year + 1)
        }
    }

    /// English name of the month.
    #[must_use]
    pub fn month_name(self) -> &'static str {
        MONTH_NAMES[usize::from(self.month - 1)]
    }

    /// The day of the month right-aligned in a field of `width` characters.
    #[must_use]
    pub fn format_day(self, width: usize) -> String {
        format!("{:>width$}", self.day)
    }
}

/// Whether `year` has a February 29th.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`. Returns 0 for a month outside
/// `1..=12`.
#[must_use]
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

impl Step for Date {
    #[inline]
    fn successor(&self) -> Option<Self> {
        if self.year == i32::MAX && self.month == 12 && self.day == 31 {
            return None;
        }
        Some(self.next_day())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = CalendarError;

    fn from_str(s: &str) -> CalendarResult<Self> {
        let malformed = || CalendarError::ParseDate(s.to_owned());
        // A leading '-' belongs to the year.
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s),
        };
        let mut parts = digits.splitn(3, '-');
        let year: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
        let month: u8 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
        let day: u8 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
        Date::new(sign * year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loom_core::{iota_between, View};

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date("2022-01-01").weekday(), 6);
        assert_eq!(date("2022-02-01").weekday(), 2);
        assert_eq!(date("2000-02-29").weekday(), 2);
        assert_eq!(date("1970-01-01").weekday(), 4);
        assert_eq!(date("2024-12-25").weekday(), 3);
    }

    #[test]
    fn test_successor_rolls_over() {
        assert_eq!(date("2022-01-31").next_day(), date("2022-02-01"));
        assert_eq!(date("2022-02-28").next_day(), date("2022-03-01"));
        assert_eq!(date("2024-02-28").next_day(), date("2024-02-29"));
        assert_eq!(date("2022-12-31").next_day(), date("2023-01-01"));
        assert_eq!(date("2022-12-31").successor(), Some(date("2023-01-01")));
        assert_eq!(Date::new(i32::MAX, 12, 31).unwrap().successor(), None);
    }

    #[test]
    fn test_invalid_dates_rejected() {
        assert!(Date::new(2023, 2, 29).is_err());
        assert!(Date::new(2022, 13, 1).is_err());
        assert!(Date::new(2022, 4, 31).is_err());
        assert!(Date::new(2022, 4, 0).is_err());
        assert!(Date::new(1900, 2, 29).is_err());
        assert!(Date::new(2000, 2, 29).is_ok());
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(date("2022-03-09").to_string(), "2022-03-09");
        assert!(matches!(
            "2022/03/09".parse::<Date>(),
            Err(CalendarError::ParseDate(_))
        ));
        assert!(matches!(
            "2022-02-30".parse::<Date>(),
            Err(CalendarError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(date("2021-12-31") < date("2022-01-01"));
        assert!(date("2022-02-01") > date("2022-01-31"));
    }

    #[test]
    fn test_year_as_view() {
        let year = iota_between(Date::first_of_year(2022), Date::first_of_year(2023));
        assert_eq!(year.count(), 365);
        let leap = iota_between(Date::first_of_year(2024), Date::first_of_year(2025));
        assert_eq!(leap.count(), 366);
    }

    #[test]
    fn test_text_fields() {
        let d = date("2022-09-07");
        assert_eq!(d.month_name(), "September");
        assert_eq!(d.format_day(3), "  7");
        assert_eq!(date("2022-09-17").format_day(3), " 17");
    }

    proptest::proptest! {
        #[test]
        fn prop_next_day_advances_weekday(year in -400i32..2800, month in 1u8..=12, day in 1u8..=28) {
            let d = Date::new(year, month, day).unwrap();
            let next = d.next_day();
            proptest::prop_assert!(next > d);
            proptest::prop_assert_eq!(next.weekday(), (d.weekday() + 1) % 7);
        }

        #[test]
        fn prop_display_parses_back(year in 0i32..10000, month in 1u8..=12, day in 1u8..=28) {
            let d = Date::new(year, month, day).unwrap();
            proptest::prop_assert_eq!(d.to_string().parse::<Date>().unwrap(), d);
        }
    }
}
