use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MIN_DAY,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::{NonZeroU8, NonZeroU16};

/// A calendar year in `1..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        match NonZeroU16::new(value) {
            Some(year) if value <= MAX_YEAR => Ok(Self(year)),
            _ => Err(ParseError::InvalidYear(value)),
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }

    /// Moves the year by `years`, returning `None` when the result leaves
    /// `1..=MAX_YEAR`.
    pub fn checked_add(self, years: i32) -> Option<Self> {
        let shifted = i32::from(self.get()).checked_add(years)?;
        let value = u16::try_from(shifted).ok()?;
        Self::new(value).ok()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.get())
    }
}

/// A month number in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        match NonZeroU8::new(value) {
            Some(month) if value <= MAX_MONTH => Ok(Self(month)),
            _ => Err(ParseError::InvalidMonth(value)),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Moves the month by `months`, wrapping around the year boundary.
    ///
    /// Returns the resulting month together with the number of years the
    /// wrap carried (negative when moving backwards), or `None` if the
    /// offset overflows. December plus twelve is December of the following
    /// year, never month 0.
    pub fn checked_add(self, months: i32) -> Option<(Self, i32)> {
        let per_year = i32::from(MAX_MONTH);
        let zero_based = i32::from(self.get() - 1).checked_add(months)?;
        let carry = zero_based.div_euclid(per_year);
        let month = u8::try_from(zero_based.rem_euclid(per_year) + 1).ok()?;
        Self::new(month).ok().map(|month| (month, carry))
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

/// A day of month. Constructed through [`Day::new`] it is guaranteed to
/// exist in the given year and month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day valid for `year`-`month`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidDay {
            year,
            month,
            day: value,
        };
        let month_typed = Month::new(month).map_err(|_| invalid())?;
        if value > days_in_month(year, month_typed) {
            return Err(invalid());
        }
        NonZeroU8::new(value).map(Self).ok_or_else(invalid)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns this day if it exists in `year`-`month`, otherwise the last
    /// day of that month.
    pub fn clamp_to(self, year: Year, month: Month) -> Self {
        NonZeroU8::new(days_in_month(year.get(), month))
            .map_or(self, |last| Self(self.0.min(last)))
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    // No year/month context here, only the 1..=31 range is checked
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let longest = DAYS_IN_MONTH.iter().copied().max().unwrap_or(MIN_DAY);
        match NonZeroU8::new(value) {
            Some(day) if value <= longest => Ok(Self(day)),
            _ => Err(ParseError::InvalidDay {
                year: 0,
                month: 0,
                day: value,
            }),
        }
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of `month` in `year`, February following the leap-year rule
pub const fn days_in_month(year: u16, month: Month) -> u8 {
    if month.get() == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}
