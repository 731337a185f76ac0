use chrono::NaiveDate;
use serde::Serialize;
use taqwim_types::{HijriDate, Locale};

use crate::error::CalendarError;
use crate::table::MonthLengthTable;

/// A known Hijri/Gregorian correspondence anchoring all conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EpochPair {
    pub hijri: HijriDate,
    pub gregorian: NaiveDate,
}

impl EpochPair {
    pub const fn new(hijri: HijriDate, gregorian: NaiveDate) -> Self {
        Self { hijri, gregorian }
    }
}

impl Default for EpochPair {
    /// 1 Muharram 1446 fell on Sunday 7 July 2024.
    fn default() -> Self {
        Self {
            hijri: HijriDate::new(1, 1, 1446),
            gregorian: NaiveDate::from_ymd_opt(2024, 7, 7).unwrap_or_default(),
        }
    }
}

/// Engine configuration: month table, epoch pair and name locale.
///
/// Built once (usually at process start) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarConfig {
    months: MonthLengthTable,
    epoch: EpochPair,
    locale: Locale,
}

impl CalendarConfig {
    /// Validates and builds a configuration.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if the epoch's Hijri date is not valid
    /// under `months`.
    pub fn new(months: MonthLengthTable, epoch: EpochPair, locale: Locale) -> Result<Self, CalendarError> {
        let h = epoch.hijri;
        let day_fits = months.get(h.month as i32).is_some_and(|len| (1..=len).contains(&h.day));
        if h.year <= 0 || !day_fits {
            return Err(CalendarError::invalid_config(format!(
                "epoch {} is not a valid Hijri date for the month table",
                h
            )));
        }
        Ok(Self { months, epoch, locale })
    }

    pub fn months(&self) -> &MonthLengthTable {
        &self.months
    }

    pub fn epoch(&self) -> &EpochPair {
        &self.epoch
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Same table and epoch, different name locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            months: MonthLengthTable::default(),
            epoch: EpochPair::default(),
            locale: Locale::default(),
        }
    }
}
