//! Single-date conversion into a [`CalendarDay`] record.

use chrono::NaiveDate;
use taqwim_calendar::{
    gregorian_month_name, hijri_month_name, resolve_gregorian, weekday_index, weekday_name, Calendar,
    CalendarError,
};
use taqwim_types::{CalendarDay, CalendarSystem, GregorianDate, HijriDate, Locale};

/// Attaches localized names to a Hijri/Gregorian pair.
pub(crate) fn day_record(locale: Locale, hijri: HijriDate, gregorian: GregorianDate) -> Result<CalendarDay, CalendarError> {
    Ok(CalendarDay::new(
        hijri,
        gregorian,
        hijri_month_name(hijri.month as i32, locale)?,
        gregorian_month_name(gregorian.month as i32, locale)?,
        weekday_name(i32::from(gregorian.weekday), locale)?,
    ))
}

/// Converts one date from either calendar into a two-calendar record.
///
/// The source side of the record keeps the parts as given; an overflowing
/// day is converted best-effort, so validate first if that matters.
///
/// # Errors
/// Returns `InvalidMonthIndex` if `month` is outside 1-12, or
/// `DateOutOfRange` if the conversion leaves the representable range.
pub fn convert(
    calendar: &Calendar,
    day: i32,
    month: i32,
    year: i32,
    from: CalendarSystem,
) -> Result<CalendarDay, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonthIndex { month: i64::from(month) });
    }
    let day_part = u32::try_from(day).map_err(|_| CalendarError::out_of_range(day, month, year))?;

    let (hijri, gregorian) = match from {
        CalendarSystem::Hijri => {
            let gregorian = calendar.hijri_to_gregorian(day, month, year)?;
            (HijriDate::new(day_part, month as u32, year), gregorian)
        }
        CalendarSystem::Gregorian => {
            let resolved = resolve_gregorian(day, month, year)?;
            let gregorian = GregorianDate::new(day_part, month as u32, year, weekday_index(resolved));
            (calendar.hijri_from_naive(resolved)?, gregorian)
        }
    };
    day_record(calendar.locale(), hijri, gregorian)
}

/// Builds the record for a real Gregorian date.
///
/// # Errors
/// Returns `DateOutOfRange` if the Hijri year cannot be represented.
pub fn describe(calendar: &Calendar, date: NaiveDate) -> Result<CalendarDay, CalendarError> {
    let hijri = calendar.hijri_from_naive(date)?;
    day_record(calendar.locale(), hijri, GregorianDate::from(date))
}
