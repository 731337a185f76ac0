//! Subcommand implementations. Every command prints pretty JSON to stdout.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use taqwim::{Calendar, CalendarSystem, Clock, SystemClock};
use tracing::{debug, info};

use crate::cli::{AgeArgs, ConvertArgs, MonthArgs, ValidateArgs};

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

pub fn today(calendar: &Calendar) -> Result<()> {
    let day = taqwim::today(calendar).context("failed to resolve today's date")?;
    print_json(&day)
}

pub fn month(calendar: &Calendar, args: MonthArgs) -> Result<()> {
    let system = CalendarSystem::from(args.calendar);
    info!(year = args.year, month = args.month, %system, "generating month");
    let generated = taqwim::generate_calendar_month(calendar, args.year, args.month, system)
        .with_context(|| format!("cannot generate {system} month {}/{}", args.month, args.year))?;
    if generated.spans_boundary() {
        debug!(spanned = generated.spanned_months.len(), "month crosses an opposite-calendar boundary");
    }
    print_json(&generated)
}

pub fn convert(calendar: &Calendar, args: ConvertArgs) -> Result<()> {
    let from = CalendarSystem::from(args.from);
    let valid = match from {
        CalendarSystem::Hijri => calendar.is_valid_hijri_date(args.day, args.month, args.year),
        CalendarSystem::Gregorian => taqwim::is_valid_gregorian_date(args.day, args.month, args.year),
    };
    if !valid {
        bail!("{}/{}/{} is not a valid {from} date", args.day, args.month, args.year);
    }
    let day = taqwim::convert(calendar, args.day, args.month, args.year, from)?;
    print_json(&day)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Validation {
    valid: bool,
    days_in_month: Option<u32>,
}

pub fn validate(calendar: &Calendar, args: ValidateArgs) -> Result<()> {
    let valid = calendar.is_valid_hijri_date(args.day, args.month, args.year);
    let days_in_month = calendar.config().months().get(args.month);
    print_json(&Validation { valid, days_in_month })?;
    if !valid {
        bail!("{}/{}/{} is not a valid Hijri date", args.day, args.month, args.year);
    }
    Ok(())
}

pub fn age(calendar: &Calendar, args: AgeArgs) -> Result<()> {
    let reference = args.on.unwrap_or_else(|| SystemClock.today());
    let age = taqwim::age_between(calendar, args.birth, reference)?;
    print_json(&age)
}

pub fn config(calendar: &Calendar) -> Result<()> {
    print_json(calendar.config())
}
