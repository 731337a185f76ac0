//! Epoch-based conversion between the Hijri table calendar and the Gregorian calendar.

use std::sync::{Arc, LazyLock};

use chrono::{Datelike, NaiveDate, TimeDelta};
use taqwim_types::{CalendarSystem, GregorianDate, HijriDate, Locale};

use crate::config::CalendarConfig;
use crate::error::CalendarError;
use crate::gregorian::{days_in_gregorian_month, resolve_gregorian, weekday_index};

static DEFAULT_CONFIG: LazyLock<Arc<CalendarConfig>> =
    LazyLock::new(|| Arc::new(CalendarConfig::default()));

/// The conversion engine.
///
/// Holds an immutable, shared [`CalendarConfig`]; cloning is cheap and every
/// method is a pure function of its arguments and that configuration.
///
/// Hijri dates are mapped to a day ordinal (days since 1 Muharram of year 1
/// under the table), and the epoch pair pins that ordinal to a Gregorian date.
/// Every Hijri year has the table's fixed length, so the mapping drifts from
/// observed Umm al-Qura dates the further a date is from the epoch.
#[derive(Debug, Clone)]
pub struct Calendar {
    config: Arc<CalendarConfig>,
    epoch_ordinal: i64,
    epoch_weekday: u8,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::from_shared(Arc::clone(&DEFAULT_CONFIG))
    }
}

impl Calendar {
    pub fn new(config: CalendarConfig) -> Self {
        Self::from_shared(Arc::new(config))
    }

    /// Builds an engine around an already shared configuration.
    pub fn from_shared(config: Arc<CalendarConfig>) -> Self {
        let epoch = *config.epoch();
        let epoch_ordinal = hijri_ordinal(
            &config,
            i64::from(epoch.hijri.day),
            i64::from(epoch.hijri.month),
            i64::from(epoch.hijri.year),
        );
        let epoch_weekday = weekday_index(epoch.gregorian);
        tracing::debug!(
            epoch_hijri = %epoch.hijri,
            epoch_gregorian = %epoch.gregorian,
            year_length = config.months().year_length(),
            "calendar engine configured"
        );
        Self { config, epoch_ordinal, epoch_weekday }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn locale(&self) -> Locale {
        self.config.locale()
    }

    /// Converts a Hijri date to its Gregorian equivalent.
    ///
    /// A day beyond its month's length is not rejected: it is a raw offset
    /// and spills into the following month or year. Months outside 1-12 roll
    /// the year the same way. Call [`Calendar::is_valid_hijri_date`] first
    /// when the input needs to be a real date.
    ///
    /// # Errors
    /// Returns `DateOutOfRange` if the result cannot be represented.
    pub fn hijri_to_gregorian(&self, day: i32, month: i32, year: i32) -> Result<GregorianDate, CalendarError> {
        let ordinal = hijri_ordinal(&self.config, i64::from(day), i64::from(month), i64::from(year));
        let elapsed = ordinal - self.epoch_ordinal;
        let date = TimeDelta::try_days(elapsed)
            .and_then(|delta| self.config.epoch().gregorian.checked_add_signed(delta))
            .ok_or_else(|| CalendarError::out_of_range(day, month, year))?;
        let weekday = (i64::from(self.epoch_weekday) + elapsed).rem_euclid(7) as u8;
        debug_assert_eq!(weekday, weekday_index(date));
        Ok(GregorianDate::new(date.day(), date.month(), date.year(), weekday))
    }

    /// Converts a Gregorian date to its Hijri equivalent.
    ///
    /// Day and month overflow behave as in [`crate::resolve_gregorian`].
    ///
    /// # Errors
    /// Returns `DateOutOfRange` if the input cannot be represented.
    pub fn gregorian_to_hijri(&self, day: i32, month: i32, year: i32) -> Result<HijriDate, CalendarError> {
        let date = resolve_gregorian(day, month, year)?;
        self.hijri_from_naive(date)
    }

    /// Converts a `NaiveDate` to its Hijri equivalent.
    ///
    /// # Errors
    /// Returns `DateOutOfRange` if the Hijri year does not fit in an `i32`.
    pub fn hijri_from_naive(&self, date: NaiveDate) -> Result<HijriDate, CalendarError> {
        let elapsed = date.signed_duration_since(self.config.epoch().gregorian).num_days();
        let ordinal = self.epoch_ordinal + elapsed;
        let year_length = i64::from(self.config.months().year_length());

        // Whole years first, then whole months; floor division keeps dates
        // before the epoch in earlier years.
        let year = i32::try_from(ordinal.div_euclid(year_length) + 1)
            .map_err(|_| CalendarError::out_of_range(date.day(), date.month(), date.year()))?;
        let (month, day) = self.config.months().month_and_day(ordinal.rem_euclid(year_length) as u32);
        Ok(HijriDate::new(day, month, year))
    }

    /// True iff `month` is in the table, `1 <= day <= table[month]`, and `year > 0`.
    pub fn is_valid_hijri_date(&self, day: i32, month: i32, year: i32) -> bool {
        match self.config.months().get(month) {
            Some(len) => year > 0 && day >= 1 && (day as u32) <= len,
            None => false,
        }
    }

    /// Days in `month` of `year` in the given calendar system.
    ///
    /// # Errors
    /// Returns `InvalidMonthIndex` if `month` is outside 1-12.
    pub fn days_in_month(&self, month: i32, system: CalendarSystem, year: i32) -> Result<u32, CalendarError> {
        match system {
            CalendarSystem::Hijri => self.config.months().days_in_month(month),
            CalendarSystem::Gregorian => days_in_gregorian_month(month, year),
        }
    }
}

/// Days from 1 Muharram of year 1 to the given (possibly overflowing) date.
fn hijri_ordinal(config: &CalendarConfig, day: i64, month: i64, year: i64) -> i64 {
    let year = year + (month - 1).div_euclid(12);
    let month = (month - 1).rem_euclid(12) as u32 + 1;
    let months = config.months();
    (year - 1) * i64::from(months.year_length()) + i64::from(months.days_before(month)) + (day - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EpochPair;
    use crate::table::MonthLengthTable;

    fn cal() -> Calendar {
        Calendar::default()
    }

    #[test]
    fn test_epoch_maps_to_itself() {
        let g = cal().hijri_to_gregorian(1, 1, 1446).unwrap();
        assert_eq!(g, GregorianDate::new(7, 7, 2024, 0));
        assert_eq!(cal().gregorian_to_hijri(7, 7, 2024).unwrap(), HijriDate::new(1, 1, 1446));
    }

    #[test]
    fn test_day_before_epoch() {
        let h = cal().gregorian_to_hijri(6, 7, 2024).unwrap();
        assert_eq!(h, HijriDate::new(29, 12, 1445));
        let g = cal().hijri_to_gregorian(29, 12, 1445).unwrap();
        assert_eq!(g, GregorianDate::new(6, 7, 2024, 6));
    }

    #[test]
    fn test_day_overflow_spills_into_next_month() {
        // Safar has 29 days; day 30 is 1 Rabi' al-Awwal.
        let spilled = cal().hijri_to_gregorian(30, 2, 1446).unwrap();
        let next = cal().hijri_to_gregorian(1, 3, 1446).unwrap();
        assert_eq!(spilled, next);

        let far = cal().hijri_to_gregorian(40, 12, 1446).unwrap();
        let expected = cal().hijri_to_gregorian(11, 1, 1447).unwrap();
        assert_eq!(far, expected);
    }

    #[test]
    fn test_day_zero_is_previous_day() {
        let zero = cal().hijri_to_gregorian(0, 1, 1446).unwrap();
        assert_eq!(zero, GregorianDate::new(6, 7, 2024, 6));
    }

    #[test]
    fn test_month_overflow_rolls_year() {
        assert_eq!(
            cal().hijri_to_gregorian(1, 13, 1446).unwrap(),
            cal().hijri_to_gregorian(1, 1, 1447).unwrap()
        );
        assert_eq!(
            cal().hijri_to_gregorian(1, 0, 1447).unwrap(),
            cal().hijri_to_gregorian(1, 12, 1446).unwrap()
        );
    }

    #[test]
    fn test_deterministic() {
        let a = cal().hijri_to_gregorian(17, 5, 1400).unwrap();
        let b = cal().hijri_to_gregorian(17, 5, 1400).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_extreme_input_is_an_error_not_a_panic() {
        assert!(matches!(
            cal().hijri_to_gregorian(1, 1, i32::MAX),
            Err(CalendarError::DateOutOfRange { .. })
        ));
        assert!(matches!(
            cal().hijri_to_gregorian(i32::MIN, i32::MIN, i32::MIN),
            Err(CalendarError::DateOutOfRange { .. })
        ));
        assert!(cal().gregorian_to_hijri(i32::MAX, i32::MAX, i32::MAX).is_err());
    }

    #[test]
    fn test_validity_gate() {
        let c = cal();
        assert!(c.is_valid_hijri_date(1, 1, 1446));
        assert!(c.is_valid_hijri_date(30, 1, 1446));
        assert!(!c.is_valid_hijri_date(31, 1, 1446));
        assert!(c.is_valid_hijri_date(29, 2, 1446));
        assert!(!c.is_valid_hijri_date(30, 2, 1446));
        assert!(!c.is_valid_hijri_date(0, 1, 1446));
        assert!(!c.is_valid_hijri_date(1, 0, 1446));
        assert!(!c.is_valid_hijri_date(1, 13, 1446));
        assert!(!c.is_valid_hijri_date(1, 1, 0));
        assert!(!c.is_valid_hijri_date(-3, 1, 1446));
    }

    #[test]
    fn test_days_in_month_both_systems() {
        let c = cal();
        assert_eq!(c.days_in_month(1, CalendarSystem::Hijri, 1446), Ok(30));
        assert_eq!(c.days_in_month(2, CalendarSystem::Gregorian, 2024), Ok(29));
        assert_eq!(
            c.days_in_month(13, CalendarSystem::Hijri, 1446),
            Err(CalendarError::InvalidMonthIndex { month: 13 })
        );
    }

    #[test]
    fn test_custom_epoch_and_table() {
        let mut lengths = crate::table::UMM_AL_QURA_APPROX;
        lengths[11] = 30;
        let months = MonthLengthTable::new(lengths).unwrap();
        let epoch = EpochPair::default();
        let c = Calendar::new(CalendarConfig::new(months, epoch, Locale::English).unwrap());
        // 355-day year: 1 Muharram 1447 lands one day later than with the default table.
        assert_eq!(c.hijri_to_gregorian(1, 1, 1447).unwrap(), GregorianDate::new(27, 6, 2025, 5));
        assert_eq!(c.gregorian_to_hijri(26, 6, 2025).unwrap(), HijriDate::new(30, 12, 1446));
    }

    #[test]
    fn test_shared_config_is_reused() {
        let a = Calendar::default();
        let b = Calendar::default();
        assert!(std::ptr::eq(a.config(), b.config()));
    }
}
