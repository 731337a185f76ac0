use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use taqwim::{CalendarConfig, EpochPair, HijriDate, Locale, MonthLengthTable, UMM_AL_QURA_APPROX};
use tracing::info;

/// Top-level taqwim configuration file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TaqwimToml {
    /// Name locale ("arabic" or "english").
    #[serde(default)]
    pub locale: Option<Locale>,

    /// Hijri month-length table.
    #[serde(default)]
    pub months: MonthsToml,

    /// Epoch pair anchoring conversions.
    #[serde(default)]
    pub epoch: EpochToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonthsToml {
    #[serde(default = "default_lengths")]
    pub lengths: Vec<u8>,
}

impl Default for MonthsToml {
    fn default() -> Self {
        Self { lengths: default_lengths() }
    }
}

fn default_lengths() -> Vec<u8> {
    UMM_AL_QURA_APPROX.to_vec()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EpochToml {
    pub hijri: HijriDate,
    /// Quoted ISO date, e.g. "2024-07-07".
    pub gregorian: NaiveDate,
}

impl Default for EpochToml {
    fn default() -> Self {
        let epoch = EpochPair::default();
        Self { hijri: epoch.hijri, gregorian: epoch.gregorian }
    }
}

impl TaqwimToml {
    /// Converts the file contents into a validated engine configuration.
    pub fn into_calendar_config(self, locale_override: Option<Locale>) -> Result<CalendarConfig> {
        let months = MonthLengthTable::from_slice(&self.months.lengths).context("invalid [months] table")?;
        let epoch = EpochPair::new(self.epoch.hijri, self.epoch.gregorian);
        let locale = locale_override.or(self.locale).unwrap_or_default();
        CalendarConfig::new(months, epoch, locale).context("invalid [epoch]")
    }
}

/// Loads the configuration file if one was given, otherwise the defaults.
pub fn load(path: Option<&Path>, locale_override: Option<Locale>) -> Result<CalendarConfig> {
    let parsed = match path {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            info!(path = %path.display(), "loaded configuration file");
            toml::from_str(&toml_str).context("failed to parse TOML config")?
        }
        None => TaqwimToml::default(),
    };
    parsed.into_calendar_config(locale_override)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let parsed: TaqwimToml = toml::from_str("").unwrap();
        let config = parsed.into_calendar_config(None).unwrap();
        assert_eq!(config, CalendarConfig::default());
    }

    #[test]
    fn full_file() {
        let parsed: TaqwimToml = toml::from_str(
            r#"
            locale = "english"

            [months]
            lengths = [30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 30]

            [epoch]
            hijri = { day = 1, month = 1, year = 1445 }
            gregorian = "2023-07-19"
            "#,
        )
        .unwrap();
        let config = parsed.into_calendar_config(None).unwrap();
        assert_eq!(config.locale(), Locale::English);
        assert_eq!(config.months().year_length(), 355);
        assert_eq!(config.months().lengths()[11], 30);
        assert_eq!(config.epoch().hijri, HijriDate::new(1, 1, 1445));
    }

    #[test]
    fn locale_override_wins() {
        let parsed: TaqwimToml = toml::from_str("locale = \"english\"").unwrap();
        let config = parsed.into_calendar_config(Some(Locale::Arabic)).unwrap();
        assert_eq!(config.locale(), Locale::Arabic);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(toml::from_str::<TaqwimToml>("timezone = \"UTC\"").is_err());
    }

    #[test]
    fn rejects_bad_table() {
        let parsed: TaqwimToml = toml::from_str("[months]\nlengths = [30, 29, 31]").unwrap();
        let err = parsed.into_calendar_config(None).unwrap_err();
        assert!(format!("{err:#}").contains("12 entries"));
    }

    #[test]
    fn rejects_invalid_epoch() {
        let parsed: TaqwimToml = toml::from_str(
            "[epoch]\nhijri = { day = 30, month = 2, year = 1446 }\ngregorian = \"2024-09-04\"",
        )
        .unwrap();
        assert!(parsed.into_calendar_config(None).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load(Some(Path::new("/nonexistent/taqwim.toml")), None).is_err());
    }
}
