//! `Timestamp` — a calendar date with a time of day.

use std::str::FromStr;

use bizcal_core::clock::Clock;
use bizcal_core::errors::{Error, Result};

use crate::date::Date;
use crate::time_of_day::TimeOfDay;

/// Milliseconds in one day.
const MILLIS_PER_DAY: i64 = 86_400_000;

/// A date and time of day, convertible to and from epoch milliseconds (UTC).
///
/// Canonically serialized as `yyyy-MM-dd HH:mm:ss.SSS`; the fraction may be
/// omitted on input, and `/` is accepted as the date separator.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    date: Date,
    time: TimeOfDay,
}

impl Timestamp {
    /// Combine a date and a time of day.
    pub fn new(date: Date, time: TimeOfDay) -> Self {
        Timestamp { date, time }
    }

    /// The timestamp at the given epoch-millisecond instant (UTC).
    pub fn from_epoch_millis(millis: i64) -> Result<Self> {
        let date = Date::from_epoch_millis(millis)?;
        let time = TimeOfDay::from_millis_of_day(millis.rem_euclid(MILLIS_PER_DAY))?;
        Ok(Timestamp { date, time })
    }

    /// Epoch milliseconds (UTC) of this timestamp.
    pub fn to_epoch_millis(&self) -> i64 {
        self.date.to_epoch_millis() + self.time.millis_of_day()
    }

    /// The current timestamp according to `clock`.
    pub fn now(clock: &dyn Clock) -> Result<Self> {
        Self::from_epoch_millis(clock.now_millis())
    }

    /// Return the date part.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Return the time-of-day part.
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// The `HHmmss` digits of the time part packed into a plain integer
    /// (see [`TimeOfDay::packed`]).
    pub fn hhmmss_packed(&self) -> u32 {
        self.time.packed()
    }

    /// The `yyyy-MM-dd HH:mm:ss` form, without the fraction.
    pub fn format_seconds(&self) -> String {
        format!("{} {}", self.date, self.time.format_hms())
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    /// Parse `yyyy-MM-dd HH:mm:ss` with an optional `.S` fraction.
    fn from_str(s: &str) -> Result<Self> {
        let (date, time) = s.split_once(' ').ok_or_else(|| {
            Error::Format(format!("expected yyyy-MM-dd HH:mm:ss[.S], got {s:?}"))
        })?;
        let date: Date = date.parse()?;
        let time: TimeOfDay = time.parse()?;
        Ok(Timestamp { date, time })
    }
}

impl std::fmt::Display for Timestamp {
    /// Canonical `yyyy-MM-dd HH:mm:ss.SSS` form.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

impl std::fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timestamp({self})")
    }
}
