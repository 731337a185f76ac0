//! Table-driven Hijri (Umm al-Qura approximation) and Gregorian conversion.
//!
//! The engine owns the Hijri month-length table and an epoch pair, and
//! converts between the two calendars with day-count arithmetic from that
//! epoch. It is not an astronomical calendar: lengths come from the table,
//! never from lunar observation.

mod config;
mod engine;
mod error;
mod gregorian;
mod names;
mod table;

pub use config::{CalendarConfig, EpochPair};
pub use engine::Calendar;
pub use error::CalendarError;
pub use gregorian::{days_in_gregorian_month, is_leap_year, is_valid_gregorian_date, resolve_gregorian, weekday_index};
pub use names::{gregorian_month_name, hijri_month_name, weekday_name};
pub use table::{MonthLengthTable, UMM_AL_QURA_APPROX};
