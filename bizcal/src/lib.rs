//! # bizcal
//!
//! Business-day-aware calendar arithmetic: holiday-aware date shifts,
//! inclusive date ranges, date diffs, and quarter/week/month bucketing,
//! plus the textual date and timestamp conversions the arithmetic consumes.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `bizcal-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! bizcal = "0.1"
//! ```
//!
//! ```rust
//! use bizcal::time::calendars::united_states;
//! use bizcal::time::{Calendar, Date};
//!
//! # fn main() -> bizcal::core::Result<()> {
//! let cal = united_states::nyse(2019..=2019)?;
//!
//! // Jan 1 2019 is a holiday: the shift anchors on the preceding business
//! // day and skips the holiday on the way forward.
//! let start: Date = "2019-01-01".parse()?;
//! let settled = cal.add_business_days(start, 1)?;
//! assert_eq!(settled.to_string(), "2019-01-02");
//!
//! // 4 business-day steps between Jan 1 and Jan 8
//! let end: Date = "2019-01-08".parse()?;
//! assert_eq!(cal.days_between(start, end, true), 4);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the clock abstraction.
pub use bizcal_core as core;

/// Date, timestamp, quarter, and calendar types.
pub use bizcal_time as time;
