use crate::InvalidDate;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, DECEMBER_DAYS, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1901..=2999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it lies in `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `InvalidDate::InvalidYear` if the value is outside the supported range.
    pub fn new(value: u16) -> Result<Self, InvalidDate> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(InvalidDate::InvalidYear(value));
        }
        let non_zero = NonZeroU16::new(value).ok_or(InvalidDate::InvalidYear(value))?;
        Ok(Self(non_zero))
    }

    /// Compile-time constructor for the range endpoints. Panics during const
    /// evaluation if `value` is out of range.
    pub(crate) const fn new_const(value: u16) -> Self {
        assert!(value >= MIN_YEAR && value <= MAX_YEAR, "year out of range");
        match NonZeroU16::new(value) {
            Some(non_zero) => Self(non_zero),
            None => panic!("year must be non-zero"),
        }
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this year has a 29th of February
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = InvalidDate;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `InvalidDate::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, InvalidDate> {
        let non_zero = NonZeroU8::new(value).ok_or(InvalidDate::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(InvalidDate::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    pub(crate) const fn new_const(value: u8) -> Self {
        assert!(value <= MAX_MONTH, "month out of range");
        match NonZeroU8::new(value) {
            Some(non_zero) => Self(non_zero),
            None => panic!("month must be non-zero"),
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = InvalidDate;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// `year` and `month` must already be validated; see [`days_in_month`].
    ///
    /// # Errors
    /// Returns `InvalidDate::InvalidDay` if the value is 0 or past the end of the month.
    ///
    /// # Panics
    /// Panics if `month` is not in `1..=12`.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, InvalidDate> {
        let max = days_in_month(year, month);
        let invalid = InvalidDate::InvalidDay {
            day: value,
            month,
            year,
            max,
        };

        let non_zero = NonZeroU8::new(value).ok_or(invalid.clone())?;
        if value > max {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    pub(crate) const fn new_const(value: u8) -> Self {
        assert!(value <= DECEMBER_DAYS, "day out of range");
        match NonZeroU8::new(value) {
            Some(non_zero) => Self(non_zero),
            None => panic!("day must be non-zero"),
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = InvalidDate;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // No month context here, so only the widest month length applies
        if !(MIN_DAY..=DECEMBER_DAYS).contains(&value) {
            return Err(InvalidDate::DayOutOfRange(value));
        }
        let non_zero = NonZeroU8::new(value).ok_or(InvalidDate::DayOutOfRange(value))?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`.
///
/// # Panics
/// Panics if `month` is not in `1..=12`. Months reaching this function come
/// from a validated [`Month`], so an out-of-range value is a caller bug.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    assert!(month != 0 && month <= MAX_MONTH, "invalid month");

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Number of days in `year`.
pub const fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}
