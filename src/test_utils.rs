//! Shorthands for building dates in unit tests.

use crate::CalendarDate;

/// Builds a date that the test knows to be valid.
pub(crate) fn date(day: u8, month: u8, year: u16) -> CalendarDate {
    CalendarDate::new(day, month, year)
        .unwrap_or_else(|e| panic!("test date {day}/{month}/{year} is invalid: {e}"))
}

/// Parses a `D/M/YYYY` string that the test knows to be valid.
pub(crate) fn parse(text: &str) -> CalendarDate {
    CalendarDate::parse(text).unwrap_or_else(|e| panic!("test date {text:?} did not parse: {e}"))
}
