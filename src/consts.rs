/// Earliest supported year (inclusive)
pub const MIN_YEAR: u16 = 1901;

/// Latest supported year (inclusive)
pub const MAX_YEAR: u16 = 2999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in December, the last day of any year
pub const DECEMBER_DAYS: u8 = 31;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Length of a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Length of a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Field separator of the `D/M/Y` textual form
pub const DATE_SEPARATOR: char = '/';

/// Widest day or month field accepted by the parser
pub const MAX_DAY_MONTH_DIGITS: usize = 2;
/// Exact width of the year field accepted by the parser
pub const YEAR_DIGITS: usize = 4;
