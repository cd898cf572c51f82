//! `Calendar` trait and concrete calendar implementations.
//!
//! A calendar knows which dates are business days and provides the
//! holiday-aware arithmetic on top of that predicate: backward-anchored
//! business-day shifts, inclusive date-range enumeration, and date diffs.

use bizcal_core::errors::{Error, Result};

use crate::date::Date;

/// A business-day calendar.
///
/// A date is a *holiday* iff it is not a business day — that is, it falls on
/// a weekend or is excluded by the concrete calendar.  All arithmetic is
/// provided on top of [`is_business_day`](Calendar::is_business_day).
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"US (NYSE)"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday (weekend or excluded day).
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a weekend day.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `date` if it is a business day, otherwise the nearest business
    /// day before it.
    ///
    /// This is the anchor normalization used by the business-day shifts:
    /// a shift from a holiday start is computed from the preceding business
    /// day, in **both** directions.
    fn previous_business_day(&self, date: Date) -> Result<Date> {
        let mut d = date;
        while self.is_holiday(d) {
            d = d.add_days(-1)?;
        }
        Ok(d)
    }

    /// Advance `date` by `n` business days.
    ///
    /// The start date is first normalized backward to the nearest business
    /// day on or before it; the shift then steps forward one calendar day at
    /// a time, counting only business days, until `n` have been counted.
    /// `n == 0` returns the normalized anchor, not the original date.
    ///
    /// # Errors
    /// `Error::Range` if `n` is negative (use
    /// [`sub_business_days`](Calendar::sub_business_days) to move backward);
    /// `Error::Date` if the walk leaves the supported date range.
    fn add_business_days(&self, date: Date, n: i32) -> Result<Date> {
        if n < 0 {
            return Err(Error::Range(format!(
                "business-day count must be non-negative, got {n}"
            )));
        }
        let mut d = self.previous_business_day(date)?;
        let mut counted = 0;
        while counted < n {
            d = d.add_days(1)?;
            if self.is_business_day(d) {
                counted += 1;
            }
        }
        Ok(d)
    }

    /// Move `date` backward by `n` business days.
    ///
    /// Anchor normalization is identical to
    /// [`add_business_days`](Calendar::add_business_days): the start date is
    /// normalized backward first, and `n == 0` returns the anchor.
    fn sub_business_days(&self, date: Date, n: i32) -> Result<Date> {
        if n < 0 {
            return Err(Error::Range(format!(
                "business-day count must be non-negative, got {n}"
            )));
        }
        let mut d = self.previous_business_day(date)?;
        let mut counted = 0;
        while counted < n {
            d = d.add_days(-1)?;
            if self.is_business_day(d) {
                counted += 1;
            }
        }
        Ok(d)
    }

    /// Return every date from `from` to `to` inclusive, in ascending order.
    ///
    /// Empty when `from > to`.  With `exclude_holidays` set, dates for which
    /// [`is_holiday`](Calendar::is_holiday) holds are filtered out, order
    /// preserved.
    fn dates_in_range(&self, from: Date, to: Date, exclude_holidays: bool) -> Vec<Date> {
        if from > to {
            return Vec::new();
        }
        let mut dates = Vec::with_capacity((to - from) as usize + 1);
        for serial in from.serial()..=to.serial() {
            let d = Date::from_serial_unchecked(serial);
            if !exclude_holidays || !self.is_holiday(d) {
                dates.push(d);
            }
        }
        dates
    }

    /// The number of day-steps between `d1` and `d2` under the same
    /// inclusion rule as [`dates_in_range`](Calendar::dates_in_range):
    /// the size of the inclusive range between the two dates minus one,
    /// negative when `d1 > d2`.
    fn days_between(&self, d1: Date, d2: Date, exclude_holidays: bool) -> i32 {
        let (lo, hi) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
        let steps = self.dates_in_range(lo, hi, exclude_holidays).len() as i32 - 1;
        if d1 > d2 {
            -steps
        } else {
            steps
        }
    }

    /// Convenience form of [`days_between`](Calendar::days_between) with
    /// holidays excluded.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        self.days_between(d1, d2, true)
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days,
/// with no additional holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}
