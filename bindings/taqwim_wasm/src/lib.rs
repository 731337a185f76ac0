//! WASM bindings for Taqwim - Hijri/Gregorian dual calendar
//!
//! Returns the same JSON shapes a web front end consumes: today's date,
//! a generated month, a single-date conversion and the Hijri validity check.

use serde::Serialize;
use taqwim_core::{Calendar, CalendarSystem};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// `"hijri"` selects the Hijri calendar; any other value means Gregorian.
fn calendar_system(name: &str) -> CalendarSystem {
    if name == "hijri" {
        CalendarSystem::Hijri
    } else {
        CalendarSystem::Gregorian
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Returns today's date in both calendars.
///
/// # Example (JavaScript)
/// ```js
/// const day = today();
/// console.log(day.hijriMonthName, day.weekDayName);
/// ```
#[wasm_bindgen]
pub fn today() -> Result<JsValue, JsValue> {
    let day = taqwim_core::today(&Calendar::default()).map_err(js_error)?;
    to_js(&day)
}

/// Returns every day of a month in the requested calendar.
///
/// # Example (JavaScript)
/// ```js
/// const ramadan = month(1446, 9, "hijri");
/// console.log(ramadan.dates.length); // 30
/// ```
#[wasm_bindgen]
pub fn month(year: i32, month: i32, calendar: &str) -> Result<JsValue, JsValue> {
    let generated =
        taqwim_core::generate_calendar_month(&Calendar::default(), year, month, calendar_system(calendar))
            .map_err(js_error)?;
    to_js(&generated)
}

/// Converts a single date; `from` defaults to Gregorian.
#[wasm_bindgen]
pub fn convert(year: i32, month: i32, day: i32, from: Option<String>) -> Result<JsValue, JsValue> {
    let from = calendar_system(from.as_deref().unwrap_or("gregorian"));
    let converted = taqwim_core::convert(&Calendar::default(), day, month, year, from).map_err(js_error)?;
    to_js(&converted)
}

/// True iff the Hijri date exists in the month-length table.
#[wasm_bindgen(js_name = isValidHijriDate)]
pub fn is_valid_hijri_date(day: i32, month: i32, year: i32) -> bool {
    Calendar::default().is_valid_hijri_date(day, month, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_system_parsing() {
        assert_eq!(calendar_system("hijri"), CalendarSystem::Hijri);
        assert_eq!(calendar_system("gregorian"), CalendarSystem::Gregorian);
        assert_eq!(calendar_system("Hijri"), CalendarSystem::Gregorian);
    }

    #[test]
    fn test_validity_passthrough() {
        assert!(is_valid_hijri_date(29, 2, 1446));
        assert!(!is_valid_hijri_date(30, 2, 1446));
    }
}
