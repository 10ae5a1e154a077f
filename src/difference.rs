use tracing::debug;

use crate::{CalendarDate, DECEMBER, days_in_month, days_in_year};

/// `from` was not strictly earlier than `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("End date ({to}) must be later than start date ({from})")]
pub struct OrderError {
    pub from: CalendarDate,
    pub to:   CalendarDate,
}

/// Counts the whole days strictly between `from` and `to`, excluding both
/// endpoints. Adjacent days are 0 apart: 7/11/1972 to 8/11/1972 is 0.
///
/// The count is built from three parts:
/// 1. full years between the two years,
/// 2. full months left over at the end of `from`'s year and the start of
///    `to`'s year (or between the two months when the year is shared),
/// 3. the partial days after `from.day` and before `to.day`.
///
/// Ordering is checked while counting rather than up front.
///
/// # Errors
/// Returns [`OrderError`] if `from` is equal to or later than `to`.
pub fn days_between(from: CalendarDate, to: CalendarDate) -> Result<u32, OrderError> {
    let order_error = || {
        debug!(%from, %to, "rejected day difference: dates out of order");
        OrderError { from, to }
    };

    let (from_day, from_month, from_year) = from.into_parts();
    let (to_day, to_month, to_year) = to.into_parts();

    // Full years
    let mut count: u32 = (from_year + 1..to_year)
        .map(|year| u32::from(days_in_year(year)))
        .sum();

    // Full months
    if from_year < to_year {
        count += month_days(from_year, from_month + 1..=DECEMBER);
        count += month_days(to_year, 1..to_month);
    } else if from_year == to_year {
        count += month_days(from_year, from_month + 1..to_month);
    } else {
        return Err(order_error());
    }

    // Partial months at either end
    if from_year < to_year || from_month < to_month {
        count += u32::from(days_in_month(from_year, from_month) - from_day);
        count += u32::from(to_day - 1);
    } else if from_month == to_month {
        if from_day < to_day {
            count += u32::from(to_day - from_day - 1);
        } else {
            return Err(order_error());
        }
    } else {
        return Err(order_error());
    }

    debug!(%from, %to, days = count, "computed day difference");
    Ok(count)
}

/// Total length of the given months of `year`.
fn month_days(year: u16, months: impl Iterator<Item = u8>) -> u32 {
    months.map(|month| u32::from(days_in_month(year, month))).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, parse};

    fn count(from: &str, to: &str) -> Result<u32, OrderError> {
        days_between(parse(from), parse(to))
    }

    #[test]
    fn test_sample_data() {
        struct TestCase {
            from:     &'static str,
            to:       &'static str,
            expected: u32,
        }

        let cases = [
            TestCase {
                from:     "02/06/1983",
                to:       "22/06/1983",
                expected: 19,
            },
            // 142, not the 173 sometimes quoted for this pair
            TestCase {
                from:     "04/08/1984",
                to:       "25/12/1984",
                expected: 142,
            },
            TestCase {
                from:     "03/08/1983",
                to:       "03/01/1989",
                expected: 1979,
            },
        ];

        for case in &cases {
            assert_eq!(
                count(case.from, case.to),
                Ok(case.expected),
                "{} -> {}",
                case.from,
                case.to
            );
        }
    }

    #[test]
    fn test_each_branch() {
        struct TestCase {
            from:        &'static str,
            to:          &'static str,
            expected:    u32,
            description: &'static str,
        }

        let cases = [
            TestCase {
                from:        "03/06/1950",
                to:          "04/06/1950",
                expected:    0,
                description: "next day",
            },
            TestCase {
                from:        "03/06/1950",
                to:          "05/06/1950",
                expected:    1,
                description: "same month",
            },
            TestCase {
                from:        "30/06/1950",
                to:          "01/07/1950",
                expected:    0,
                description: "adjacent across a month boundary",
            },
            TestCase {
                from:        "03/06/1949",
                to:          "05/07/1950",
                expected:    396,
                description: "a year and a month apart",
            },
            TestCase {
                from:        "31/12/1950",
                to:          "01/01/1951",
                expected:    0,
                description: "adjacent across a year boundary",
            },
            TestCase {
                from:        "31/12/1950",
                to:          "01/01/1952",
                expected:    365,
                description: "spans all of 1951",
            },
            TestCase {
                from:        "03/01/1952",
                to:          "05/10/1952",
                expected:    275,
                description: "ten months within a leap year, including February",
            },
            TestCase {
                from:        "03/06/1951",
                to:          "05/07/1953",
                expected:    762,
                description: "two years apart, including a leap year",
            },
            TestCase {
                from:        "28/02/1984",
                to:          "01/03/1984",
                expected:    1,
                description: "leap day in between",
            },
        ];

        for case in &cases {
            assert_eq!(
                count(case.from, case.to),
                Ok(case.expected),
                "{} -> {} ({})",
                case.from,
                case.to,
                case.description
            );
        }
    }

    #[test]
    fn test_century_without_leap_day() {
        assert_eq!(days_between(date(28, 2, 2100), date(1, 3, 2100)), Ok(0));
        assert_eq!(days_between(date(28, 2, 2000), date(1, 3, 2000)), Ok(1));
    }

    #[test]
    fn test_full_range() {
        // 1902..=2998 plus the partial ends of 1901 and 2999
        let inner_years: u32 = (1902..=2998).map(|y| u32::from(days_in_year(y))).sum();
        assert_eq!(
            days_between(CalendarDate::MIN_DATE, CalendarDate::MAX_DATE),
            Ok(inner_years + 364 + 364)
        );
    }

    #[test]
    fn test_order_rejection() {
        struct TestCase {
            from:        &'static str,
            to:          &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                from:        "22/06/1983",
                to:          "21/06/1983",
                description: "earlier day, same month",
            },
            TestCase {
                from:        "02/06/1983",
                to:          "22/05/1983",
                description: "earlier month, same year",
            },
            TestCase {
                from:        "02/06/1983",
                to:          "22/06/1982",
                description: "earlier year",
            },
            TestCase {
                from:        "22/06/1983",
                to:          "22/06/1983",
                description: "same date",
            },
            TestCase {
                from:        "01/01/1984",
                to:          "31/12/1983",
                description: "previous day across a year boundary",
            },
        ];

        for case in &cases {
            let from = parse(case.from);
            let to = parse(case.to);
            assert_eq!(
                days_between(from, to),
                Err(OrderError { from, to }),
                "{} -> {} ({})",
                case.from,
                case.to,
                case.description
            );
        }
    }

    #[test]
    fn test_order_error_message() {
        let err = count("22/06/1983", "21/06/1983").unwrap_err();
        assert_eq!(
            err.to_string(),
            "End date (21/6/1983) must be later than start date (22/6/1983)"
        );
    }

    #[test]
    fn test_month_days() {
        assert_eq!(month_days(1984, 1..=12), 366);
        assert_eq!(month_days(1985, 1..=12), 365);
        assert_eq!(month_days(1985, 13..=12), 0);
        assert_eq!(month_days(1985, 1..1), 0);
    }
}
