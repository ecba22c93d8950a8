mod consts;
mod offset;
mod prelude;
mod types;

pub use consts::*;
pub use offset::{OffsetError, add_months, add_years};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;

/// A validated Gregorian calendar date.
///
/// Values are ordered chronologically and always name a day that exists,
/// leap years included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that is out of range,
    /// checking year, then month, then day.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year_typed = Year::new(year)?;
        let month_typed = Month::new(month)?;
        let day_typed = Day::new(day, year, month)?;
        Ok(Self::from_valid(year_typed, month_typed, day_typed))
    }

    /// Creates a date from typed components, checking the day against the month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if `day` does not exist in `year`-`month`.
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Self, ParseError> {
        let day = Day::new(day.get(), year.get(), month.get())?;
        Ok(Self::from_valid(year, month, day))
    }

    /// Assembles a date whose day is already known to fit its month.
    pub(crate) const fn from_valid(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Number of days in this date's month
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year.get(), self.month)
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Shifts by whole years; see [`add_years`].
    ///
    /// # Errors
    /// Returns `OffsetError::YearOutOfRange` if the result leaves the supported years.
    pub fn add_years(self, years: i32) -> Result<Self, OffsetError> {
        add_years(self, years)
    }

    /// Shifts by up to eleven months in either direction; see [`add_months`].
    ///
    /// # Errors
    /// Returns `OffsetError::MonthOutOfRange` for offsets beyond ±11 and
    /// `OffsetError::YearOutOfRange` if the wrap leaves the supported years.
    pub fn add_months(self, months: i32) -> Result<Self, OffsetError> {
        add_months(self, months)
    }

    /// Same day next year, Feb 29 falling back to Feb 28.
    ///
    /// # Errors
    /// Returns `OffsetError::YearOutOfRange` for dates in `MAX_YEAR`.
    pub fn next_year(self) -> Result<Self, OffsetError> {
        add_years(self, 1)
    }

    /// Same day next month, clamped to that month's last day.
    ///
    /// # Errors
    /// Returns `OffsetError::YearOutOfRange` for December of `MAX_YEAR`.
    pub fn next_month(self) -> Result<Self, OffsetError> {
        add_months(self, 1)
    }

    /// Converts to storage columns: (year, month, day)
    pub const fn to_columns(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = ParseError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let iso = trimmed.contains(DATE_SEPARATOR);
        let month_first = trimmed.contains(MONTH_FIRST_SEPARATOR);
        let separator = match (iso, month_first) {
            (true, false) => DATE_SEPARATOR,
            (false, true) => MONTH_FIRST_SEPARATOR,
            (true, true) => {
                return Err(ParseError::InvalidFormat(format!(
                    "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
                )));
            }
            (false, false) => return Err(ParseError::InvalidFormat(trimmed.to_owned())),
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        let [first, second, third] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected 3 components separated by {separator}, found {}",
                parts.len()
            )));
        };

        if separator == DATE_SEPARATOR {
            // YYYY-MM-DD
            Self::new(parse_number(first)?, parse_number(second)?, parse_number(third)?)
        } else {
            // MM/DD/YYYY
            Self::new(parse_number(third)?, parse_number(first)?, parse_number(second)?)
        }
    }
}

fn parse_number<T: FromStr>(s: &str) -> Result<T, ParseError> {
    s.parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
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

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_new_validates_components_in_order() {
        assert!(matches!(
            CalendarDate::new(0, 13, 40),
            Err(ParseError::InvalidYear(0))
        ));
        assert!(matches!(
            CalendarDate::new(2024, 13, 40),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            CalendarDate::new(2023, 2, 29),
            Err(ParseError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            })
        ));
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_from_parts_checks_day_against_month() {
        let year = Year::new(2023).unwrap();
        let day = Day::try_from(31).unwrap();
        assert!(CalendarDate::from_parts(year, Month::new(1).unwrap(), day).is_ok());
        assert!(CalendarDate::from_parts(year, Month::new(4).unwrap(), day).is_err());
    }

    #[test]
    fn test_accessors() {
        let d = date(1991, 8, 15);
        assert_eq!((d.year(), d.month(), d.day()), (1991, 8, 15));
        assert_eq!(d.year_typed(), Year::new(1991).unwrap());
        assert_eq!(d.month_typed(), Month::new(8).unwrap());
        assert_eq!(d.day_typed().get(), 15);
        assert_eq!(d.days_in_month(), 31);
        assert!(!d.is_leap_year());
        assert!(date(2024, 1, 1).is_leap_year());
    }

    #[test]
    fn test_display() {
        assert_eq!(date(1991, 8, 5).to_string(), "1991-08-05");
        assert_eq!(date(7, 1, 1).to_string(), "0007-01-01");
    }

    #[test]
    fn test_parse_iso() {
        assert_eq!("1991-08-15".parse::<CalendarDate>().unwrap(), date(1991, 8, 15));
        assert_eq!(" 2024-02-29 ".parse::<CalendarDate>().unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_parse_month_first() {
        assert_eq!("08/15/1991".parse::<CalendarDate>().unwrap(), date(1991, 8, 15));
        assert_eq!("12 / 31 / 2022".parse::<CalendarDate>().unwrap(), date(2022, 12, 31));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<CalendarDate>(), Err(ParseError::EmptyInput)));
        assert!(matches!(
            "1991".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1991-08".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1991-08/15".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1991-08-XX".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2021-02-29".parse::<CalendarDate>(),
            Err(ParseError::InvalidDay { .. })
        ));
        assert!(matches!(
            "13/01/2021".parse::<CalendarDate>(),
            Err(ParseError::InvalidMonth(13))
        ));

        let err = "2000-01-15-23".parse::<CalendarDate>().unwrap_err();
        assert!(err.to_string().contains("found 4"));
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(date(2021, 12, 31) < date(2022, 1, 1));
        assert!(date(2022, 1, 31) < date(2022, 2, 1));
        assert!(date(2022, 2, 1) < date(2022, 2, 2));
    }

    #[test]
    fn test_columns() {
        let d = date(1991, 8, 15);
        assert_eq!(d.to_columns(), (1991, 8, 15));
        let restored: CalendarDate = d.to_columns().try_into().unwrap();
        assert_eq!(restored, d);
        assert!(CalendarDate::try_from((2022, 4, 31)).is_err());
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(1991, 8, 15);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""1991-08-15""#);
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);
    }

    #[test]
    fn test_serde_validation() {
        assert!(serde_json::from_str::<CalendarDate>(r#""2024-02-30""#).is_err());
        assert!(serde_json::from_str::<CalendarDate>(r#""10000-01-01""#).is_err());
        assert!(serde_json::from_str::<CalendarDate>("20240101").is_err());
        assert!(serde_json::from_str::<CalendarDate>(r#""2024-02-29""#).is_ok());
    }

    #[test]
    fn test_next_year_and_next_month() {
        let leap_day = date(2024, 2, 29);
        assert_eq!(leap_day.next_year().unwrap(), date(2025, 2, 28));
        assert_eq!(date(2022, 10, 1).next_year().unwrap(), date(2023, 10, 1));
        assert_eq!(date(2022, 12, 31).next_year().unwrap(), date(2023, 12, 31));

        assert_eq!(date(2023, 1, 31).next_month().unwrap(), date(2023, 2, 28));
        assert_eq!(date(2022, 12, 31).next_month().unwrap(), date(2023, 1, 31));
    }
}
