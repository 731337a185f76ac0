use smallvec::SmallVec;
use taqwim_calendar::{gregorian_month_name, hijri_month_name, resolve_gregorian, Calendar, CalendarError};
use taqwim_types::{CalendarMonth, CalendarSystem, GregorianDate, HijriDate, MonthRef};

use crate::convert::day_record;

/// Generates every day of `month` in `year` of the anchor calendar `system`.
///
/// Summary fields of the anchor calendar come from the arguments. Those of
/// the opposite calendar are labelled from the first day; `spanned_months`
/// lists all opposite-calendar months touched.
///
/// # Errors
/// Returns `InvalidMonthIndex` if `month` is outside 1-12, or
/// `DateOutOfRange` if the month cannot be represented.
pub fn generate_calendar_month(
    calendar: &Calendar,
    year: i32,
    month: i32,
    system: CalendarSystem,
) -> Result<CalendarMonth, CalendarError> {
    let len = calendar.days_in_month(month, system, year)?;
    let locale = calendar.locale();

    let mut dates = SmallVec::new();
    let mut spanned_months: SmallVec<[MonthRef; 3]> = SmallVec::new();

    for day in 1..=len as i32 {
        let (hijri, gregorian) = match system {
            CalendarSystem::Hijri => (
                HijriDate::new(day as u32, month as u32, year),
                calendar.hijri_to_gregorian(day, month, year)?,
            ),
            CalendarSystem::Gregorian => {
                let date = resolve_gregorian(day, month, year)?;
                (calendar.hijri_from_naive(date)?, GregorianDate::from(date))
            }
        };

        let opposite = match system {
            CalendarSystem::Hijri => gregorian.month_ref(),
            CalendarSystem::Gregorian => hijri.month_ref(),
        };
        if spanned_months.last() != Some(&opposite) {
            spanned_months.push(opposite);
        }
        dates.push(day_record(locale, hijri, gregorian)?);
    }

    // Every month has at least 28 days, so the first opposite month exists.
    let first = spanned_months[0];
    let anchor = MonthRef::new(year, month as u32);
    let (hijri_ref, gregorian_ref) = match system {
        CalendarSystem::Hijri => (anchor, first),
        CalendarSystem::Gregorian => (first, anchor),
    };

    tracing::debug!(%system, year, month, days = len, spanned = spanned_months.len(), "generated calendar month");

    Ok(CalendarMonth {
        hijri_year: hijri_ref.year,
        hijri_month: hijri_ref.month,
        gregorian_year: gregorian_ref.year,
        gregorian_month: gregorian_ref.month,
        hijri_month_name: hijri_month_name(hijri_ref.month as i32, locale)?.to_string(),
        gregorian_month_name: gregorian_month_name(gregorian_ref.month as i32, locale)?.to_string(),
        anchor: system,
        spanned_months,
        dates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use taqwim_calendar::CalendarConfig;
    use taqwim_types::Locale;

    fn english() -> Calendar {
        Calendar::new(CalendarConfig::default().with_locale(Locale::English))
    }

    #[test]
    fn test_hijri_month_summary() {
        let month = generate_calendar_month(&english(), 1446, 1, CalendarSystem::Hijri).unwrap();
        assert_eq!(month.len(), 30);
        assert_eq!((month.hijri_year, month.hijri_month), (1446, 1));
        assert_eq!((month.gregorian_year, month.gregorian_month), (2024, 7));
        assert_eq!(month.hijri_month_name, "Muharram");
        assert_eq!(month.gregorian_month_name, "July");
        // 7 July .. 5 August 2024.
        assert_eq!(&month.spanned_months[..], &[MonthRef::new(2024, 7), MonthRef::new(2024, 8)]);
        assert!(month.spans_boundary());
    }

    #[test]
    fn test_gregorian_month_summary() {
        let month = generate_calendar_month(&english(), 2024, 7, CalendarSystem::Gregorian).unwrap();
        assert_eq!(month.len(), 31);
        assert_eq!((month.gregorian_year, month.gregorian_month), (2024, 7));
        // 1 July 2024 is 24 Dhu al-Hijjah 1445 under the table.
        assert_eq!((month.hijri_year, month.hijri_month), (1445, 12));
        assert_eq!(month.hijri_month_name, "Dhu al-Hijjah");
        assert_eq!(&month.spanned_months[..], &[MonthRef::new(1445, 12), MonthRef::new(1446, 1)]);
        assert_eq!(month.dates[6].hijri(), HijriDate::new(1, 1, 1446));
    }

    #[test]
    fn test_days_are_consecutive() {
        let month = generate_calendar_month(&english(), 1446, 9, CalendarSystem::Hijri).unwrap();
        for pair in month.dates.windows(2) {
            let a = pair[0].gregorian().to_naive_date().unwrap();
            let b = pair[1].gregorian().to_naive_date().unwrap();
            assert_eq!(b - a, chrono::TimeDelta::days(1));
            assert_eq!((pair[0].week_day + 1) % 7, pair[1].week_day);
        }
    }

    #[test]
    fn test_invalid_month_rejected() {
        for system in [CalendarSystem::Hijri, CalendarSystem::Gregorian] {
            assert_eq!(
                generate_calendar_month(&english(), 1446, 13, system),
                Err(CalendarError::InvalidMonthIndex { month: 13 })
            );
            assert!(generate_calendar_month(&english(), 1446, 0, system).is_err());
        }
    }

    #[test]
    fn test_json_projection() {
        let month = generate_calendar_month(&english(), 2025, 2, CalendarSystem::Gregorian).unwrap();
        let value = serde_json::to_value(&month).unwrap();
        assert_eq!(value["anchor"], "gregorian");
        assert_eq!(value["dates"].as_array().unwrap().len(), 28);
        assert_eq!(value["dates"][0]["gregorianDay"], 1);
    }
}
