use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use taqwim::{CalendarSystem, Locale};

/// Taqwim Hijri/Gregorian dual calendar.
#[derive(Parser)]
#[command(
    name = "taqwim",
    version,
    about = "Hijri (Umm al-Qura approximation) and Gregorian dual calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (month table, epoch, locale).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Language for month and weekday names; overrides the config file.
    #[arg(short, long, global = true, value_enum)]
    pub locale: Option<LocaleArg>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show today's date in both calendars.
    Today,
    /// Generate every day of a month.
    Month(MonthArgs),
    /// Convert a single date between calendars.
    Convert(ConvertArgs),
    /// Check a Hijri date against the month-length table.
    Validate(ValidateArgs),
    /// Compute an age in both calendars.
    Age(AgeArgs),
    /// Print the effective configuration.
    Config,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Year in the chosen calendar.
    #[arg(short, long)]
    pub year: i32,

    /// Month number (1-12).
    #[arg(short, long)]
    pub month: i32,

    /// Calendar the year and month are expressed in.
    #[arg(long, value_enum, default_value_t = CalendarArg::Hijri)]
    pub calendar: CalendarArg,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    #[arg(short, long)]
    pub day: i32,

    #[arg(short, long)]
    pub month: i32,

    #[arg(short, long)]
    pub year: i32,

    /// Calendar of the given date.
    #[arg(long, value_enum, default_value_t = CalendarArg::Gregorian)]
    pub from: CalendarArg,
}

/// Arguments for the `validate` subcommand.
#[derive(clap::Args)]
pub struct ValidateArgs {
    #[arg(short, long)]
    pub day: i32,

    #[arg(short, long)]
    pub month: i32,

    #[arg(short, long)]
    pub year: i32,
}

/// Arguments for the `age` subcommand.
#[derive(clap::Args)]
pub struct AgeArgs {
    /// Birth date (YYYY-MM-DD).
    #[arg(short, long)]
    pub birth: NaiveDate,

    /// Reference date (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    pub on: Option<NaiveDate>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CalendarArg {
    Hijri,
    Gregorian,
}

impl From<CalendarArg> for CalendarSystem {
    fn from(arg: CalendarArg) -> Self {
        match arg {
            CalendarArg::Hijri => CalendarSystem::Hijri,
            CalendarArg::Gregorian => CalendarSystem::Gregorian,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LocaleArg {
    Arabic,
    English,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Arabic => Locale::Arabic,
            LocaleArg::English => Locale::English,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_month_command() {
        let cli = Cli::try_parse_from(["taqwim", "month", "-y", "1446", "-m", "9", "--calendar", "hijri"]).unwrap();
        match cli.command {
            Command::Month(args) => {
                assert_eq!((args.year, args.month), (1446, 9));
                assert_eq!(args.calendar, CalendarArg::Hijri);
            }
            _ => panic!("expected month command"),
        }
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["taqwim", "today", "-vv", "--locale", "english"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.locale, Some(LocaleArg::English));
    }

    #[test]
    fn parses_age_dates() {
        let cli = Cli::try_parse_from(["taqwim", "age", "--birth", "1990-05-15", "--on", "2025-05-15"]).unwrap();
        match cli.command {
            Command::Age(args) => {
                assert_eq!(args.birth, NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());
                assert!(args.on.is_some());
            }
            _ => panic!("expected age command"),
        }
    }

    #[test]
    fn rejects_unknown_calendar() {
        assert!(Cli::try_parse_from(["taqwim", "convert", "-d", "1", "-m", "1", "-y", "2025", "--from", "julian"]).is_err());
    }
}
