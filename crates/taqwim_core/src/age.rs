//! Elapsed time between two dates, counted in both calendars.

use chrono::{Datelike, Months, NaiveDate};
use taqwim_calendar::{days_in_gregorian_month, Calendar, CalendarError};
use taqwim_types::{Age, DateSpan};

/// Age at `reference` of someone born on `birth`.
///
/// Whole months are counted to the last monthly anniversary on or before
/// `reference` (clamped to the end of shorter months), and the remaining
/// days are exact. The Hijri figure uses the engine's month-length table.
///
/// # Errors
/// Returns `BirthAfterReference` if `birth > reference`.
pub fn age_between(calendar: &Calendar, birth: NaiveDate, reference: NaiveDate) -> Result<Age, CalendarError> {
    if birth > reference {
        return Err(CalendarError::BirthAfterReference { birth, reference });
    }
    Ok(Age {
        gregorian: gregorian_span(birth, reference)?,
        hijri: hijri_span(calendar, birth, reference)?,
    })
}

fn split_months(total: i64, days: i64) -> DateSpan {
    DateSpan::new((total / 12) as i32, (total % 12) as i32, days as i32)
}

fn gregorian_span(birth: NaiveDate, reference: NaiveDate) -> Result<DateSpan, CalendarError> {
    let mut total = i64::from(reference.year() - birth.year()) * 12
        + i64::from(reference.month()) - i64::from(birth.month());
    // The anniversary in the reference month falls on its last day when the
    // birth day does not exist there.
    let month_len = days_in_gregorian_month(reference.month() as i32, reference.year())?;
    if reference.day() < birth.day().min(month_len) {
        total -= 1;
    }
    let anniversary = u32::try_from(total)
        .ok()
        .and_then(|months| birth.checked_add_months(Months::new(months)))
        .ok_or_else(|| CalendarError::out_of_range(reference.day(), reference.month(), reference.year()))?;
    Ok(split_months(total, (reference - anniversary).num_days()))
}

fn hijri_span(calendar: &Calendar, birth: NaiveDate, reference: NaiveDate) -> Result<DateSpan, CalendarError> {
    let hb = calendar.hijri_from_naive(birth)?;
    let hr = calendar.hijri_from_naive(reference)?;

    let mut total = i64::from(hr.year - hb.year) * 12 + i64::from(hr.month) - i64::from(hb.month);
    let month_len = calendar.config().months().days_in_month(hr.month as i32)?;
    if hr.day < hb.day.min(month_len) {
        total -= 1;
    }

    let index = i64::from(hb.year) * 12 + i64::from(hb.month) - 1 + total;
    let out_of_range = || CalendarError::out_of_range(hr.day, hr.month, hr.year);
    let year = i32::try_from(index.div_euclid(12)).map_err(|_| out_of_range())?;
    let month = (index.rem_euclid(12) + 1) as i32;
    let len = calendar.config().months().days_in_month(month)?;

    let anniversary = calendar
        .hijri_to_gregorian(hb.day.min(len) as i32, month, year)?
        .to_naive_date()
        .ok_or_else(out_of_range)?;
    Ok(split_months(total, (reference - anniversary).num_days()))
}
