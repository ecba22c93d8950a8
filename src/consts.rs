/// Earliest supported year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Latest supported year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Number of months in a year, also the value of December
pub const MAX_MONTH: u8 = 12;

/// Largest month offset `add_months` accepts in either direction.
/// Whole-year spans go through `add_years`.
pub const MAX_MONTH_OFFSET: i32 = 11;

/// First day of any month
pub const MIN_DAY: u8 = 1;

pub const FEBRUARY: u8 = 2;

/// Length of February in a leap year
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days per month for a common year, indexed by month number (index 0 unused)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// ISO 8601 component separator (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';
/// Month-first component separator (`MM/DD/YYYY`)
pub const MONTH_FIRST_SEPARATOR: char = '/';
