use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from taqwim operations.
///
/// A day outside its month is deliberately absent: conversions treat it as a
/// raw offset, and the validity predicates are the only gate.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarError {
    /// Month index outside 1-12 in a name or length lookup.
    #[error("Month index {month} is outside 1-12")]
    InvalidMonthIndex { month: i64 },

    /// Weekday index outside 0-6.
    #[error("Weekday index {weekday} is outside 0-6 (0 = Sunday)")]
    InvalidWeekdayIndex { weekday: i64 },

    /// A month-length table entry that is neither 29 nor 30.
    #[error("Hijri month {month} cannot have {days} days (expected 29 or 30)")]
    InvalidMonthLength { month: u32, days: u32 },

    /// Arithmetic left the representable Gregorian range.
    #[error("Date {day}/{month}/{year} is outside the representable range")]
    DateOutOfRange { day: i64, month: i64, year: i64 },

    /// Age requested for a birth date after the reference date.
    #[error("Birth date {birth} is after reference date {reference}")]
    BirthAfterReference { birth: NaiveDate, reference: NaiveDate },

    /// Invalid configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl CalendarError {
    /// Creates a `DateOutOfRange` error from raw date parts.
    pub fn out_of_range(day: impl Into<i64>, month: impl Into<i64>, year: impl Into<i64>) -> Self {
        Self::DateOutOfRange {
            day: day.into(),
            month: month.into(),
            year: year.into(),
        }
    }

    /// Creates an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }
}
