//! Month and year arithmetic on [`CalendarDate`].
//!
//! Both operations keep the day of month when it exists in the target month
//! and otherwise clamp it to that month's last day. Clamping is normal
//! behavior and is only reported through a `debug` log record.

use log::debug;

use crate::{CalendarDate, Day, MAX_MONTH_OFFSET, MAX_YEAR, MIN_YEAR, Month, Year};

/// Error type for date offset operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OffsetError {
    /// Month offset outside `-MAX_MONTH_OFFSET..=MAX_MONTH_OFFSET`.
    #[error(
        "Month offset {0} is out of range (must be within -{max}..={max}); use add_years for whole years",
        max = MAX_MONTH_OFFSET
    )]
    MonthOutOfRange(i32),

    /// The shifted year falls outside `MIN_YEAR..=MAX_YEAR`.
    #[error("Shifting year {year} by {years} leaves the supported range {min}-{max}", min = MIN_YEAR, max = MAX_YEAR)]
    YearOutOfRange { year: u16, years: i32 },
}

/// Shifts `date` by `years` whole years.
///
/// Feb 29 moved into a common year becomes Feb 28; every other month and day
/// exists in every year and is kept as is.
///
/// # Errors
/// Returns `OffsetError::YearOutOfRange` if the resulting year is outside
/// `MIN_YEAR..=MAX_YEAR`.
pub fn add_years(date: CalendarDate, years: i32) -> Result<CalendarDate, OffsetError> {
    let year = shift_year(date, years)?;
    Ok(settle(year, date.month_typed(), date.day_typed()))
}

/// Shifts `date` by `months`, which must be within ±`MAX_MONTH_OFFSET`.
///
/// Crossing December or January carries into the neighbouring year. A day
/// past the end of the target month is clamped to its last day, so
/// 2022-03-31 plus one month is 2022-04-30.
///
/// # Errors
/// Returns `OffsetError::MonthOutOfRange` if `months` is 12 or more in
/// absolute value, and `OffsetError::YearOutOfRange` if the carry leaves
/// `MIN_YEAR..=MAX_YEAR`.
pub fn add_months(date: CalendarDate, months: i32) -> Result<CalendarDate, OffsetError> {
    if !(-MAX_MONTH_OFFSET..=MAX_MONTH_OFFSET).contains(&months) {
        return Err(OffsetError::MonthOutOfRange(months));
    }

    let (month, carry) = date
        .month_typed()
        .checked_add(months)
        .ok_or(OffsetError::MonthOutOfRange(months))?;
    let year = shift_year(date, carry)?;
    Ok(settle(year, month, date.day_typed()))
}

fn shift_year(date: CalendarDate, years: i32) -> Result<Year, OffsetError> {
    date.year_typed()
        .checked_add(years)
        .ok_or(OffsetError::YearOutOfRange {
            year: date.year(),
            years,
        })
}

/// Builds the target date, pulling the day back to the end of the month if needed.
fn settle(year: Year, month: Month, day: Day) -> CalendarDate {
    let clamped = day.clamp_to(year, month);
    if clamped != day {
        debug!("Clamped day {day} to {clamped} for {year}-{month}");
    }
    CalendarDate::from_valid(year, month, clamped)
}
