//! Value types shared by the taqwim crates.
//!
//! Every type here is a plain value: created by conversion or parsing, never
//! mutated in place. Serialized field names follow the JSON shape consumed by
//! web front ends (`hijriDay`, `weekDayName`, ...).

mod date;
mod record;

pub use date::{CalendarSystem, GregorianDate, HijriDate, Locale, MonthRef};
pub use record::{Age, CalendarDay, CalendarMonth, DateSpan};
