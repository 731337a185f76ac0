//! Proleptic Gregorian rules and best-effort date arithmetic.

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::error::CalendarError;

const GREGORIAN_MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Divisible by 4, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in a Gregorian month, with 29-day February in leap years.
///
/// # Errors
/// Returns `InvalidMonthIndex` if `month` is outside 1-12.
pub fn days_in_gregorian_month(month: i32, year: i32) -> Result<u32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonthIndex { month: i64::from(month) });
    }
    if month == 2 && is_leap_year(year) {
        return Ok(29);
    }
    Ok(GREGORIAN_MONTH_LENGTHS[(month - 1) as usize])
}

/// True iff the parts form a real proleptic Gregorian date.
pub fn is_valid_gregorian_date(day: i32, month: i32, year: i32) -> bool {
    match days_in_gregorian_month(month, year) {
        Ok(len) => day >= 1 && (day as u32) <= len,
        Err(_) => false,
    }
}

/// Weekday of a date, 0 = Sunday.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Resolves possibly out-of-range parts to a real date.
///
/// Month overflow rolls the year (month 13 is January of the next year) and
/// day overflow is a raw offset from the first of the month, so day 32 of
/// January is 1 February and day 0 is the last day of the previous month.
///
/// # Errors
/// Returns `DateOutOfRange` when the result is not representable.
pub fn resolve_gregorian(day: i32, month: i32, year: i32) -> Result<NaiveDate, CalendarError> {
    let out_of_range = || CalendarError::out_of_range(day, month, year);
    let month0 = i64::from(month) - 1;
    let year = i32::try_from(i64::from(year) + month0.div_euclid(12)).map_err(|_| out_of_range())?;
    let month = month0.rem_euclid(12) as u32 + 1;

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
    let delta = TimeDelta::try_days(i64::from(day) - 1).ok_or_else(out_of_range)?;
    first.checked_add_signed(delta).ok_or_else(out_of_range)
}
