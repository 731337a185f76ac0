//! # Taqwim
//!
//! A dual Hijri/Gregorian calendar for civil calendar UIs. Hijri dates follow
//! a fixed month-length table (an Umm al-Qura approximation) anchored to a
//! known epoch, not astronomical observation.
//!
//! This crate is a facade that re-exports functionality from the `taqwim` ecosystem.
//!
//! ## Modules
//!
//! - `types`: value types (HijriDate, GregorianDate, CalendarMonth, ...)
//! - `calendar`: the table-driven conversion engine
//! - `core`: month generation, conversion records, today, age
//!
//! ## Usage
//!
//! ```rust
//! use taqwim::prelude::*;
//!
//! let calendar = Calendar::default();
//! let gregorian = calendar.hijri_to_gregorian(1, 10, 1446).unwrap();
//! assert_eq!((gregorian.day, gregorian.month, gregorian.year), (30, 3, 2025));
//!
//! let month = generate_calendar_month(&calendar, 1446, 9, CalendarSystem::Hijri).unwrap();
//! assert_eq!(month.len(), 30);
//! ```

pub use taqwim_core::*;
