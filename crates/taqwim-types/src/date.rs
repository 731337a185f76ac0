use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A date in the Hijri calendar.
///
/// Validity (day within the month-length table, month in 1-12, year > 0) is
/// not enforced by construction; the engine's validity predicate is the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HijriDate {
    // Field order makes the derived `Ord` chronological.
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    pub const fn new(day: u32, month: u32, year: i32) -> Self {
        Self { year, month, day }
    }

    pub const fn month_ref(&self) -> MonthRef {
        MonthRef::new(self.year, self.month)
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day, self.month, self.year)
    }
}

/// A date in the proleptic Gregorian calendar with its weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GregorianDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    /// 0 = Sunday .. 6 = Saturday.
    pub weekday: u8,
}

impl GregorianDate {
    pub const fn new(day: u32, month: u32, year: i32, weekday: u8) -> Self {
        Self { day, month, year, weekday }
    }

    /// Returns the equivalent `NaiveDate`, or `None` if the fields do not form
    /// a real Gregorian date.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    pub const fn month_ref(&self) -> MonthRef {
        MonthRef::new(self.year, self.month)
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            month: date.month(),
            year: date.year(),
            weekday: date.weekday().num_days_from_sunday() as u8,
        }
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day, self.month, self.year)
    }
}

/// A (year, month) pair in either calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

impl MonthRef {
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

/// The calendar system a request is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSystem {
    Hijri,
    Gregorian,
}

impl CalendarSystem {
    /// The other calendar system.
    pub fn opposite(&self) -> Self {
        match self {
            CalendarSystem::Hijri => CalendarSystem::Gregorian,
            CalendarSystem::Gregorian => CalendarSystem::Hijri,
        }
    }
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CalendarSystem::Hijri => "hijri",
            CalendarSystem::Gregorian => "gregorian",
        };
        write!(f, "{}", s)
    }
}

/// Language used for month and weekday names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Arabic,
    English,
}
