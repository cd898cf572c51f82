//! `TimeOfDay` — wall-clock time within a day.

use std::str::FromStr;

use bizcal_core::errors::{Error, Result};

/// Milliseconds in one day.
const MILLIS_PER_DAY: i64 = 86_400_000;

/// A time of day with millisecond resolution.
///
/// Canonically serialized as `HH:mm:ss.SSS`; the fraction may be omitted on
/// input.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
}

impl TimeOfDay {
    /// Midnight (00:00:00.000).
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
        millisecond: 0,
    };

    /// Create a time of day, validating each component.
    pub fn new(hour: u8, minute: u8, second: u8, millisecond: u16) -> Result<Self> {
        if hour > 23 {
            return Err(Error::Date(format!("hour {hour} out of range [0, 23]")));
        }
        if minute > 59 {
            return Err(Error::Date(format!("minute {minute} out of range [0, 59]")));
        }
        if second > 59 {
            return Err(Error::Date(format!("second {second} out of range [0, 59]")));
        }
        if millisecond > 999 {
            return Err(Error::Date(format!(
                "millisecond {millisecond} out of range [0, 999]"
            )));
        }
        Ok(TimeOfDay {
            hour,
            minute,
            second,
            millisecond,
        })
    }

    /// The time of day at `millis` milliseconds past midnight.
    pub fn from_millis_of_day(millis: i64) -> Result<Self> {
        if !(0..MILLIS_PER_DAY).contains(&millis) {
            return Err(Error::Date(format!(
                "millis-of-day {millis} out of range [0, {MILLIS_PER_DAY})"
            )));
        }
        Ok(TimeOfDay {
            hour: (millis / 3_600_000) as u8,
            minute: (millis / 60_000 % 60) as u8,
            second: (millis / 1_000 % 60) as u8,
            millisecond: (millis % 1_000) as u16,
        })
    }

    /// Milliseconds past midnight.
    pub fn millis_of_day(&self) -> i64 {
        i64::from(self.hour) * 3_600_000
            + i64::from(self.minute) * 60_000
            + i64::from(self.second) * 1_000
            + i64::from(self.millisecond)
    }

    /// Return the hour (0–23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Return the minute (0–59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Return the second (0–59).
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Return the millisecond (0–999).
    pub fn millisecond(&self) -> u16 {
        self.millisecond
    }

    /// The `HHmmss` digits packed into a plain integer: `13:05:09` → `130509`.
    ///
    /// Leading zeros vanish into the integer, so the output range is
    /// [0, 235959].  The fraction is dropped.
    pub fn packed(&self) -> u32 {
        u32::from(self.hour) * 10_000 + u32::from(self.minute) * 100 + u32::from(self.second)
    }

    /// The `HH:mm:ss` form, without the fraction.
    pub fn format_hms(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    /// The `HH:mm` form.
    pub fn format_hm(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    /// Parse `HH:mm:ss` with an optional `.S` fraction of 1–3 digits, read
    /// as a decimal fraction of a second (`.5` = 500 ms).
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::Format(format!("expected HH:mm:ss[.S], got {s:?}"));
        let (hms, fraction) = match s.split_once('.') {
            Some((hms, frac)) => (hms, Some(frac)),
            None => (s, None),
        };
        let b = hms.as_bytes();
        let all_digits = |r: &[u8]| r.iter().all(u8::is_ascii_digit);
        if b.len() != 8
            || b[2] != b':'
            || b[5] != b':'
            || !all_digits(&b[..2])
            || !all_digits(&b[3..5])
            || !all_digits(&b[6..])
        {
            return Err(malformed());
        }
        let millisecond = match fraction {
            None => 0,
            Some(f) => {
                if f.is_empty() || f.len() > 3 || !all_digits(f.as_bytes()) {
                    return Err(malformed());
                }
                let digits: u16 = f.parse().expect("checked digits");
                digits * 10u16.pow(3 - f.len() as u32)
            }
        };
        let hour: u8 = hms[..2].parse().expect("checked digits");
        let minute: u8 = hms[3..5].parse().expect("checked digits");
        let second: u8 = hms[6..].parse().expect("checked digits");
        Self::new(hour, minute, second, millisecond)
    }
}

impl std::fmt::Display for TimeOfDay {
    /// Canonical `HH:mm:ss.SSS` form.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hour, self.minute, self.second, self.millisecond
        )
    }
}

impl std::fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeOfDay({self})")
    }
}
