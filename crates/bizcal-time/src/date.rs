//! `Date` type.
//!
//! A calendar date is stored as a serial number of days since the Unix epoch
//! (serial 0 = 1970-01-01), which makes the epoch-millisecond conversions a
//! plain multiply.  No time-of-day component is carried.
//!
//! # Serial number convention
//! * Serial 0 = January 1, 1970.
//! * The valid date range is 1900-01-01 to 2199-12-31 (negative serials
//!   cover the pre-1970 part of the range).

use std::str::FromStr;

use bizcal_core::clock::Clock;
use bizcal_core::errors::{Error, Result};

use crate::month::Month;
use crate::weekday::Weekday;

/// Milliseconds in one day.
const MILLIS_PER_DAY: i64 = 86_400_000;

/// A calendar date represented as a serial number.
///
/// Canonically serialized as `yyyy-MM-dd`; `yyyy/MM/dd` is accepted as an
/// alternate input separator and normalized on parse.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(i32);

impl Date {
    /// Minimum supported date: January 1, 1900.
    pub const MIN: Date = Date(-25_567);

    /// Maximum supported date: December 31, 2199.
    pub const MAX: Date = Date(84_005);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (days since 1970-01-01).
    ///
    /// Returns an error if the serial falls outside the supported range.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} outside supported range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from an (unchecked) serial number.
    pub(crate) fn from_serial_unchecked(serial: i32) -> Self {
        debug_assert!(
            (Self::MIN.0..=Self::MAX.0).contains(&serial),
            "invalid date serial {serial}"
        );
        Date(serial)
    }

    /// Parse a `MMM dd yyyy` date such as `Jan 01 2019`.
    ///
    /// The month name may be abbreviated or full, in any ASCII case.
    pub fn parse_mdy(s: &str) -> Result<Self> {
        let malformed = || Error::Format(format!("expected `MMM dd yyyy`, got {s:?}"));
        let mut parts = s.split_whitespace();
        let (mon, day, year) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(m), Some(d), Some(y), None) => (m, d, y),
            _ => return Err(malformed()),
        };
        let month = Month::from_name(mon).ok_or_else(malformed)?;
        if day.is_empty() || day.len() > 2 || !day.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let day: u8 = day.parse().map_err(|_| malformed())?;
        let year: u16 = year.parse().map_err(|_| malformed())?;
        Self::from_ymd(year, month.number(), day)
    }

    // ── Epoch milliseconds ────────────────────────────────────────────────────

    /// The date containing the given epoch-millisecond instant (UTC).
    ///
    /// The sub-day remainder is dropped; instants before the epoch floor to
    /// the containing day.
    pub fn from_epoch_millis(millis: i64) -> Result<Self> {
        let days = millis.div_euclid(MILLIS_PER_DAY);
        let serial = i32::try_from(days)
            .map_err(|_| Error::Date(format!("epoch millis {millis} out of date range")))?;
        Self::from_serial(serial)
    }

    /// Epoch milliseconds at midnight UTC of this date.
    pub fn to_epoch_millis(&self) -> i64 {
        i64::from(self.0) * MILLIS_PER_DAY
    }

    // ── Clock adapters ────────────────────────────────────────────────────────

    /// Today's date according to `clock`.
    pub fn today(clock: &dyn Clock) -> Result<Self> {
        Self::from_epoch_millis(clock.now_millis())
    }

    /// Return `true` if this date is today according to `clock`.
    pub fn is_today(&self, clock: &dyn Clock) -> bool {
        Self::today(clock).is_ok_and(|today| today == *self)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number (days since 1970-01-01).
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, m, d) = ymd_from_serial(self.0);
        let mut doy = d as u16;
        for mon in 1..m {
            doy += days_in_month(y, mon) as u16;
        }
        doy
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 0 (1970-01-01) is a Thursday (ISO ordinal 4).
        let w = ((self.0 + 3).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative `n` moves backward).  Returns an error
    /// if the result leaves the supported range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Self::from_serial(self.0 + n)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Return the *n*-th occurrence of `weekday` in the month of
    /// `year`/`month`.
    ///
    /// For example, `nth_weekday(3, Weekday::Monday, 2019, 1)` returns the
    /// third Monday of January 2019 (2019-01-21).
    ///
    /// # Errors
    /// Returns an error if `n` is zero or larger than the number of such
    /// weekdays in the month.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Range("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let first_wd = first.weekday().ordinal();
        let target_wd = weekday.ordinal();
        let skip = ((target_wd as i32 - first_wd as i32).rem_euclid(7)) as u8;
        let day = 1 + skip + 7 * (n - 1);
        if day > days_in_month(year, month) {
            return Err(Error::Range(format!(
                "nth_weekday: {n}-th {weekday:?} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day)
    }

    /// Return the last occurrence of `weekday` in the month of `year`/`month`.
    pub fn last_weekday_of_month(weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        let last = Date::from_ymd(year, month, days_in_month(year, month))?;
        let back = ((last.weekday().ordinal() as i32 - weekday.ordinal() as i32).rem_euclid(7)) as u8;
        Date::from_ymd(year, month, days_in_month(year, month) - back)
    }

    // ── Buckets ───────────────────────────────────────────────────────────────

    /// The ISO-8601 week-based year and week number of this date.
    ///
    /// The week-based year can differ from the calendar year at year
    /// boundaries (e.g. 2016-01-03 falls in week 53 of 2015).
    pub fn iso_week(&self) -> (u16, u8) {
        let year = self.year();
        let week = (self.day_of_year() as i32 - self.weekday().ordinal() as i32 + 10) / 7;
        if week < 1 {
            (year - 1, iso_weeks_in_year(year - 1))
        } else if week as u8 > iso_weeks_in_year(year) {
            (year + 1, 1)
        } else {
            (year, week as u8)
        }
    }

    /// The `yyyy-ww` week bucket of this date, under ISO-8601 week numbering.
    pub fn week_of_year(&self) -> String {
        let (wy, w) = self.iso_week();
        format!("{wy:04}-{w:02}")
    }

    /// The `yyyy-MM` month bucket of this date.
    pub fn month_of_year(&self) -> String {
        let (y, m, _) = ymd_from_serial(self.0);
        format!("{y:04}-{m:02}")
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    /// Parse `yyyy-MM-dd` or `yyyy/MM/dd`.
    fn from_str(s: &str) -> Result<Self> {
        let b = s.as_bytes();
        let is_sep = |c: u8| c == b'-' || c == b'/';
        let all_digits = |r: &[u8]| r.iter().all(u8::is_ascii_digit);
        if b.len() != 10
            || !is_sep(b[4])
            || !is_sep(b[7])
            || !all_digits(&b[..4])
            || !all_digits(&b[5..7])
            || !all_digits(&b[8..])
        {
            return Err(Error::Format(format!(
                "expected yyyy-MM-dd or yyyy/MM/dd, got {s:?}"
            )));
        }
        let year: u16 = s[..4].parse().expect("checked digits");
        let month: u8 = s[5..7].parse().expect("checked digits");
        let day: u8 = s[8..].parse().expect("checked digits");
        Self::from_ymd(year, month, day)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = self.add_days(-rhs).expect("date subtraction underflow");
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    /// Canonical `yyyy-MM-dd` form.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Leap years strictly before `year`.
fn leaps_before(year: i32) -> i32 {
    let y = year - 1;
    y / 4 - y / 100 + y / 400
}

/// Serial number of January 1 of `year`.
fn year_start_serial(year: u16) -> i32 {
    let y = year as i32;
    (y - 1970) * 365 + leaps_before(y) - leaps_before(1970)
}

/// Convert (year, month, day) to a serial number (days since 1970-01-01).
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let mut serial = year_start_serial(year);
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32 - 1
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // Estimate the year, then adjust until the serial falls within it.
    let mut y = (1970 + serial / 365) as u16;
    loop {
        if serial < year_start_serial(y) {
            y -= 1;
        } else if serial >= year_start_serial(y + 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - year_start_serial(y) + 1; // 1-based day of year
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Number of ISO-8601 weeks in a year: 52 or 53.
fn iso_weeks_in_year(year: u16) -> u8 {
    let p = |y: i32| (y + y / 4 - y / 100 + y / 400) % 7;
    let y = year as i32;
    if p(y) == 4 || p(y - 1) == 3 {
        53
    } else {
        52
    }
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
