//! # bizcal-time
//!
//! Date, timestamp, quarter, and holiday-aware calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and built-in implementations.
pub mod calendar;

/// Concrete calendars: injected holiday tables and US holiday generators.
pub mod calendars;

/// `Date` type.
pub mod date;

/// `Month` — month-of-year enum.
pub mod month;

/// `Quarter` — a (year, quarter-number) bucket.
pub mod quarter;

/// `TimeOfDay` — wall-clock time within a day.
pub mod time_of_day;

/// `Timestamp` — a date with a time of day.
pub mod timestamp;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, WeekendsOnly};
pub use calendars::TableCalendar;
pub use date::Date;
pub use month::Month;
pub use quarter::Quarter;
pub use time_of_day::TimeOfDay;
pub use timestamp::Timestamp;
pub use weekday::Weekday;
