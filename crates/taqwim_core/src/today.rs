use chrono::NaiveDate;
use taqwim_calendar::{Calendar, CalendarError};
use taqwim_types::CalendarDay;

use crate::convert::describe;

/// Source of the current Gregorian date.
pub trait Clock: std::fmt::Debug + Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Today's date in both calendars, from the system clock.
pub fn today(calendar: &Calendar) -> Result<CalendarDay, CalendarError> {
    today_with(calendar, &SystemClock)
}

/// Today's date in both calendars, from `clock`. Nothing is cached.
pub fn today_with(calendar: &Calendar, clock: &impl Clock) -> Result<CalendarDay, CalendarError> {
    let date = clock.today();
    tracing::trace!(%date, "resolving today");
    describe(calendar, date)
}
