//! Validated Gregorian calendar dates (1901–2999) and the number of whole
//! days strictly between two of them.

mod consts;
mod difference;
mod types;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use difference::{OrderError, days_between};
pub use types::{Day, Month, Year, days_in_month, days_in_year, is_leap_year};

use derive_more::Display;
use std::str::FromStr;
use tracing::trace;

/// A calendar date in the proleptic Gregorian calendar, restricted to
/// `1/1/1901..=31/12/2999`.
///
/// Values are only produced by [`CalendarDate::new`] or by parsing the
/// `D/M/Y` textual form, so every instance names a real day. Ordering is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}{}{}{}{}", "day.get()", DATE_SEPARATOR, "month.get()", DATE_SEPARATOR, "year.get()")]
pub struct CalendarDate {
    // Field order gives the derived (year, month, day) ordering
    year:  Year,
    month: Month,
    day:   Day,
}

/// A day, month or year that does not form a supported calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InvalidDate {
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for {month}/{year} (must be 1-{max})")]
    InvalidDay { day: u8, month: u8, year: u16, max: u8 },
    #[display(fmt = "Invalid day: {} (must be {}-{})", "_0", MIN_DAY, DECEMBER_DAYS)]
    DayOutOfRange(u8),
}

impl std::error::Error for InvalidDate {}

/// Error produced when text cannot be turned into a [`CalendarDate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Nothing to parse.
    #[error("Empty date string")]
    EmptyInput,

    /// Text does not follow the `D/M/YYYY` grammar.
    #[error("Invalid date format (expected D/M/YYYY): {0:?}")]
    InvalidFormat(String),

    /// Text is well formed but names a day that does not exist.
    #[error(transparent)]
    InvalidDate(#[from] InvalidDate),
}

impl CalendarDate {
    /// 1/1/1901
    pub const MIN_DATE: Self = Self {
        year:  Year::new_const(MIN_YEAR),
        month: Month::new_const(JANUARY),
        day:   Day::new_const(MIN_DAY),
    };

    /// 31/12/2999
    pub const MAX_DATE: Self = Self {
        year:  Year::new_const(MAX_YEAR),
        month: Month::new_const(DECEMBER),
        day:   Day::new_const(DECEMBER_DAYS),
    };

    /// Creates a date, checking the year, then the month, then the day.
    ///
    /// # Errors
    /// Returns the first violated constraint as an [`InvalidDate`].
    pub fn new(day: u8, month: u8, year: u16) -> Result<Self, InvalidDate> {
        let year_typed = Year::new(year)?;
        let month_typed = Month::new(month)?;
        let day_typed = Day::new(day, year, month)?;
        Ok(Self::from_typed(day_typed, month_typed, year_typed))
    }

    /// Assembles a date from components the caller has already validated
    /// together (see [`Day::new`]).
    const fn from_typed(day: Day, month: Month, year: Year) -> Self {
        Self { year, month, day }
    }

    /// Parses the `D/M/YYYY` form: one or two digit day and month, four
    /// digit year, separated by `/` with nothing around them.
    ///
    /// # Errors
    /// Returns `ParseError::EmptyInput` or `ParseError::InvalidFormat` when
    /// the text does not match the grammar, and `ParseError::InvalidDate`
    /// when it matches but names a non-existent or unsupported day.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        text.parse()
    }

    /// The canonical `D/M/Y` text, without zero padding.
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Returns the day of month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the month
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the year
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Splits into `(day, month, year)`.
    pub const fn into_parts(self) -> (u8, u8, u16) {
        (self.day(), self.month(), self.year())
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Length of this date's month.
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year(), self.month())
    }

    /// The following day, or `None` past [`CalendarDate::MAX_DATE`].
    pub fn next_day(self) -> Option<Self> {
        let (day, month, year) = self.into_parts();
        if day < self.days_in_month() {
            Self::new(day + 1, month, year).ok()
        } else if month < DECEMBER {
            Self::new(MIN_DAY, month + 1, year).ok()
        } else {
            Self::new(MIN_DAY, JANUARY, year.checked_add(1)?).ok()
        }
    }

    /// The preceding day, or `None` before [`CalendarDate::MIN_DATE`].
    pub fn previous_day(self) -> Option<Self> {
        let (day, month, year) = self.into_parts();
        if day > MIN_DAY {
            Self::new(day - 1, month, year).ok()
        } else if month > JANUARY {
            Self::new(days_in_month(year, month - 1), month - 1, year).ok()
        } else {
            Self::new(DECEMBER_DAYS, DECEMBER, year.checked_sub(1)?).ok()
        }
    }

    /// Whole days strictly between `self` and `later`.
    ///
    /// # Errors
    /// Returns [`OrderError`] unless `self` is strictly earlier than `later`.
    pub fn days_until(self, later: Self) -> Result<u32, OrderError> {
        days_between(self, later)
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let mut fields = s.split(DATE_SEPARATOR);
        let (Some(day), Some(month), Some(year), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            trace!(input = s, "date text does not have three fields");
            return Err(ParseError::InvalidFormat(s.to_owned()));
        };

        let day = parse_digits::<u8>(day, 1, MAX_DAY_MONTH_DIGITS, s)?;
        let month = parse_digits::<u8>(month, 1, MAX_DAY_MONTH_DIGITS, s)?;
        let year = parse_digits::<u16>(year, YEAR_DIGITS, YEAR_DIGITS, s)?;

        // Range checks belong to the constructor, not the grammar
        Self::new(day, month, year).map_err(ParseError::from)
    }
}

/// Reads a field of `min_width..=max_width` ASCII digits.
fn parse_digits<T: FromStr>(
    field: &str,
    min_width: usize,
    max_width: usize,
    input: &str,
) -> Result<T, ParseError> {
    let well_formed = (min_width..=max_width).contains(&field.len())
        && field.bytes().all(|b| b.is_ascii_digit());
    if !well_formed {
        trace!(input, field, "date field is not {min_width}-{max_width} digits");
        return Err(ParseError::InvalidFormat(input.to_owned()));
    }
    field
        .parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(input.to_owned()))
}

impl TryFrom<(u8, u8, u16)> for CalendarDate {
    type Error = InvalidDate;

    fn try_from((day, month, year): (u8, u8, u16)) -> Result<Self, Self::Error> {
        Self::new(day, month, year)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
