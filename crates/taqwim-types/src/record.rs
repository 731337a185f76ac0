use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::date::{CalendarSystem, GregorianDate, HijriDate, MonthRef};

/// One day seen through both calendars, with localized names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub hijri_day: u32,
    pub hijri_month: u32,
    pub hijri_year: i32,
    pub gregorian_day: u32,
    pub gregorian_month: u32,
    pub gregorian_year: i32,
    pub hijri_month_name: String,
    pub gregorian_month_name: String,
    /// 0 = Sunday .. 6 = Saturday.
    pub week_day: u8,
    pub week_day_name: String,
}

impl CalendarDay {
    pub fn new(
        hijri: HijriDate,
        gregorian: GregorianDate,
        hijri_month_name: impl Into<String>,
        gregorian_month_name: impl Into<String>,
        week_day_name: impl Into<String>,
    ) -> Self {
        Self {
            hijri_day: hijri.day,
            hijri_month: hijri.month,
            hijri_year: hijri.year,
            gregorian_day: gregorian.day,
            gregorian_month: gregorian.month,
            gregorian_year: gregorian.year,
            hijri_month_name: hijri_month_name.into(),
            gregorian_month_name: gregorian_month_name.into(),
            week_day: gregorian.weekday,
            week_day_name: week_day_name.into(),
        }
    }

    pub fn hijri(&self) -> HijriDate {
        HijriDate::new(self.hijri_day, self.hijri_month, self.hijri_year)
    }

    pub fn gregorian(&self) -> GregorianDate {
        GregorianDate::new(self.gregorian_day, self.gregorian_month, self.gregorian_year, self.week_day)
    }
}

/// A generated month in the requested ("anchor") calendar.
///
/// The summary fields for the opposite calendar are labelled from the first
/// day of `dates`. When the month crosses an opposite-calendar month boundary
/// that label describes only the start; `spanned_months` lists every
/// opposite-calendar month the days fall in, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    pub hijri_year: i32,
    pub hijri_month: u32,
    pub gregorian_year: i32,
    pub gregorian_month: u32,
    pub hijri_month_name: String,
    pub gregorian_month_name: String,
    pub anchor: CalendarSystem,
    pub spanned_months: SmallVec<[MonthRef; 3]>,
    pub dates: SmallVec<[CalendarDay; 31]>,
}

impl CalendarMonth {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// True if the days fall in more than one opposite-calendar month.
    pub fn spans_boundary(&self) -> bool {
        self.spanned_months.len() > 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalendarDay> {
        self.dates.iter()
    }
}

/// Elapsed whole years, months and days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateSpan {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl DateSpan {
    pub const fn new(years: i32, months: i32, days: i32) -> Self {
        Self { years, months, days }
    }
}

/// Age measured in both calendars.
///
/// Serialized flat as `gregorianYears`, `gregorianMonths`, ..., `hijriDays`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "AgeFields", from = "AgeFields")]
pub struct Age {
    pub gregorian: DateSpan,
    pub hijri: DateSpan,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AgeFields {
    gregorian_years: i32,
    gregorian_months: i32,
    gregorian_days: i32,
    hijri_years: i32,
    hijri_months: i32,
    hijri_days: i32,
}

impl From<Age> for AgeFields {
    fn from(age: Age) -> Self {
        Self {
            gregorian_years: age.gregorian.years,
            gregorian_months: age.gregorian.months,
            gregorian_days: age.gregorian.days,
            hijri_years: age.hijri.years,
            hijri_months: age.hijri.months,
            hijri_days: age.hijri.days,
        }
    }
}

impl From<AgeFields> for Age {
    fn from(f: AgeFields) -> Self {
        Self {
            gregorian: DateSpan::new(f.gregorian_years, f.gregorian_months, f.gregorian_days),
            hijri: DateSpan::new(f.hijri_years, f.hijri_months, f.hijri_days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_day() -> CalendarDay {
        CalendarDay::new(
            HijriDate::new(1, 1, 1446),
            GregorianDate::new(7, 7, 2024, 0),
            "Muharram",
            "July",
            "Sunday",
        )
    }

    #[test]
    fn test_calendar_day_json_shape() {
        let value = serde_json::to_value(sample_day()).unwrap();
        assert_eq!(value["hijriDay"], 1);
        assert_eq!(value["hijriYear"], 1446);
        assert_eq!(value["gregorianMonth"], 7);
        assert_eq!(value["weekDay"], 0);
        assert_eq!(value["weekDayName"], "Sunday");
        assert_eq!(value["hijriMonthName"], "Muharram");
    }

    #[test]
    fn test_calendar_day_accessors() {
        let day = sample_day();
        assert_eq!(day.hijri(), HijriDate::new(1, 1, 1446));
        assert_eq!(day.gregorian(), GregorianDate::new(7, 7, 2024, 0));
    }

    #[test]
    fn test_month_boundary_flag() {
        let mut month = CalendarMonth {
            hijri_year: 1446,
            hijri_month: 1,
            gregorian_year: 2024,
            gregorian_month: 7,
            hijri_month_name: "Muharram".into(),
            gregorian_month_name: "July".into(),
            anchor: CalendarSystem::Hijri,
            spanned_months: SmallVec::new(),
            dates: SmallVec::new(),
        };
        month.spanned_months.push(MonthRef::new(2024, 7));
        assert!(!month.spans_boundary());
        month.spanned_months.push(MonthRef::new(2024, 8));
        assert!(month.spans_boundary());
        assert!(month.is_empty());

        let value = serde_json::to_value(&month).unwrap();
        assert_eq!(value["anchor"], "hijri");
        assert_eq!(value["spannedMonths"][1]["month"], 8);
        assert!(value["dates"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_age_json_is_flat() {
        let age = Age { gregorian: DateSpan::new(34, 1, 0), hijri: DateSpan::new(35, 2, 12) };
        let value = serde_json::to_value(age).unwrap();
        assert_eq!(value["gregorianYears"], 34);
        assert_eq!(value["gregorianMonths"], 1);
        assert_eq!(value["gregorianDays"], 0);
        assert_eq!(value["hijriYears"], 35);
        assert_eq!(value["hijriMonths"], 2);
        assert_eq!(value["hijriDays"], 12);
        assert!(value.get("gregorian").is_none());

        let back: Age = serde_json::from_value(value).unwrap();
        assert_eq!(back, age);
    }
}
