//! Dual Hijri/Gregorian calendar: month generation, date conversion records,
//! today's date and age calculation on top of the `taqwim-calendar` engine.

pub mod age;
pub mod convert;
pub mod extension;
pub mod month;
pub mod today;

pub use taqwim_calendar::{
    days_in_gregorian_month, gregorian_month_name, hijri_month_name, is_leap_year, is_valid_gregorian_date,
    weekday_name, Calendar, CalendarConfig, CalendarError, EpochPair, MonthLengthTable, UMM_AL_QURA_APPROX,
};
pub use taqwim_types::{
    Age, CalendarDay, CalendarMonth, CalendarSystem, DateSpan, GregorianDate, HijriDate, Locale, MonthRef,
};

pub use age::age_between;
pub use convert::{convert, describe};
pub use extension::HijriDateExt;
pub use month::generate_calendar_month;
pub use today::{today, today_with, Clock, FixedClock, SystemClock};

pub mod prelude {
    pub use crate::extension::HijriDateExt;
    pub use crate::{convert, generate_calendar_month, today};
    pub use crate::{Calendar, CalendarError, CalendarSystem, GregorianDate, HijriDate, Locale};
}

/// Converts a Hijri date with the default engine.
pub fn hijri_to_gregorian(day: i32, month: i32, year: i32) -> Result<GregorianDate, CalendarError> {
    Calendar::default().hijri_to_gregorian(day, month, year)
}

/// Converts a Gregorian date with the default engine.
pub fn gregorian_to_hijri(day: i32, month: i32, year: i32) -> Result<HijriDate, CalendarError> {
    Calendar::default().gregorian_to_hijri(day, month, year)
}

/// Hijri validity under the default month-length table.
pub fn is_valid_hijri_date(day: i32, month: i32, year: i32) -> bool {
    Calendar::default().is_valid_hijri_date(day, month, year)
}
