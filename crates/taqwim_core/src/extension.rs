//! Extension trait for `NaiveDate`.

use chrono::NaiveDate;
use taqwim_calendar::{Calendar, CalendarError};
use taqwim_types::{Age, CalendarDay, HijriDate};

use crate::age::age_between;
use crate::convert::describe;

/// Extends `NaiveDate` with Hijri conversion using the default engine
/// (or an explicit one through the `_with` variants).
pub trait HijriDateExt {
    /// Hijri date under the default table and epoch.
    fn to_hijri(&self) -> Result<HijriDate, CalendarError>;

    /// Hijri date under a specific engine.
    fn to_hijri_with(&self, calendar: &Calendar) -> Result<HijriDate, CalendarError>;

    /// Two-calendar record with names in the default (Arabic) locale.
    fn calendar_day(&self) -> Result<CalendarDay, CalendarError>;

    /// Age at `reference` of someone born on this date.
    fn age_on(&self, reference: NaiveDate) -> Result<Age, CalendarError>;
}

impl HijriDateExt for NaiveDate {
    fn to_hijri(&self) -> Result<HijriDate, CalendarError> {
        Calendar::default().hijri_from_naive(*self)
    }

    fn to_hijri_with(&self, calendar: &Calendar) -> Result<HijriDate, CalendarError> {
        calendar.hijri_from_naive(*self)
    }

    fn calendar_day(&self) -> Result<CalendarDay, CalendarError> {
        describe(&Calendar::default(), *self)
    }

    fn age_on(&self, reference: NaiveDate) -> Result<Age, CalendarError> {
        age_between(&Calendar::default(), *self, reference)
    }
}
