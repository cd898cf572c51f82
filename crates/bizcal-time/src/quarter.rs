//! `Quarter` — a (year, quarter-number) bucket, serialized as `yyyyQn`.

use std::str::FromStr;

use bizcal_core::errors::{Error, Result};

use crate::date::{days_in_month, Date};

/// A calendar quarter: a year and a quarter number in 1–4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quarter {
    year: u16,
    number: u8,
}

impl Quarter {
    /// Create a quarter, validating the year against the supported date
    /// range and the quarter number against 1–4.
    pub fn new(year: u16, number: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=4).contains(&number) {
            return Err(Error::Range(format!(
                "quarter number {number} out of range [1, 4]"
            )));
        }
        Ok(Quarter { year, number })
    }

    /// The quarter containing `date`: month-day up to 03-31 → Q1, up to
    /// 06-30 → Q2, up to 09-30 → Q3, otherwise Q4.
    pub fn of(date: Date) -> Self {
        Quarter {
            year: date.year(),
            number: (date.month() - 1) / 3 + 1,
        }
    }

    /// Return the year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Return the quarter number (1–4).
    pub fn number(&self) -> u8 {
        self.number
    }

    /// The preceding quarter: Q1 rolls back to Q4 of the previous year.
    ///
    /// # Errors
    /// `Error::Date` when rolling back from Q1 of the first supported year.
    pub fn previous(&self) -> Result<Self> {
        if self.number == 1 {
            Self::new(self.year - 1, 4)
        } else {
            Self::new(self.year, self.number - 1)
        }
    }

    /// The first calendar date of the quarter.
    pub fn start_date(&self) -> Date {
        let month = 3 * (self.number - 1) + 1;
        Date::from_ymd(self.year, month, 1).expect("quarter year validated on construction")
    }

    /// The last calendar date of the quarter.
    pub fn end_date(&self) -> Date {
        let month = 3 * self.number;
        Date::from_ymd(self.year, month, days_in_month(self.year, month))
            .expect("quarter year validated on construction")
    }
}

impl FromStr for Quarter {
    type Err = Error;

    /// Parse `yyyyQn`, e.g. `2019Q3`.
    fn from_str(s: &str) -> Result<Self> {
        let b = s.as_bytes();
        if b.len() != 6 || b[4] != b'Q' || !b[..4].iter().all(u8::is_ascii_digit) || !b[5].is_ascii_digit()
        {
            return Err(Error::Format(format!("expected yyyyQn, got {s:?}")));
        }
        let year: u16 = s[..4].parse().expect("checked digits");
        let number: u8 = s[5..].parse().expect("checked digits");
        Self::new(year, number)
    }
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}Q{}", self.year, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn of_date_boundaries() {
        assert_eq!(Quarter::of(date(2019, 9, 4)).to_string(), "2019Q3");
        assert_eq!(Quarter::of(date(2019, 1, 1)).to_string(), "2019Q1");
        assert_eq!(Quarter::of(date(2019, 3, 31)).to_string(), "2019Q1");
        assert_eq!(Quarter::of(date(2019, 4, 1)).to_string(), "2019Q2");
        assert_eq!(Quarter::of(date(2019, 6, 30)).to_string(), "2019Q2");
        assert_eq!(Quarter::of(date(2019, 9, 30)).to_string(), "2019Q3");
        assert_eq!(Quarter::of(date(2019, 10, 1)).to_string(), "2019Q4");
        assert_eq!(Quarter::of(date(2019, 12, 31)).to_string(), "2019Q4");
    }

    #[test]
    fn previous_rolls_over_year_boundary() {
        let q: Quarter = "2020Q1".parse().unwrap();
        assert_eq!(q.previous().unwrap().to_string(), "2019Q4");
        let q: Quarter = "2019Q3".parse().unwrap();
        assert_eq!(q.previous().unwrap().to_string(), "2019Q2");
        // rolling back from the first supported year fails loudly
        let q: Quarter = "1900Q1".parse().unwrap();
        assert!(q.previous().is_err());
    }

    #[test]
    fn parse_and_format_round_trip() {
        let q: Quarter = "2019Q3".parse().unwrap();
        assert_eq!(q.year(), 2019);
        assert_eq!(q.number(), 3);
        assert_eq!(q.to_string(), "2019Q3");
    }

    #[test]
    fn parse_rejects_malformed() {
        for s in ["2019Q", "2019q3", "19Q3", "2019Q33", "Q3", "2019-Q3", ""] {
            assert!(s.parse::<Quarter>().is_err(), "accepted {s:?}");
        }
        assert!(matches!("2019Q0".parse::<Quarter>(), Err(Error::Range(_))));
        assert!(matches!("2019Q5".parse::<Quarter>(), Err(Error::Range(_))));
        assert!(matches!("1899Q4".parse::<Quarter>(), Err(Error::Date(_))));
    }

    #[test]
    fn quarter_span() {
        let q: Quarter = "2019Q3".parse().unwrap();
        assert_eq!(q.start_date().to_string(), "2019-07-01");
        assert_eq!(q.end_date().to_string(), "2019-09-30");
        let q: Quarter = "2020Q1".parse().unwrap();
        assert_eq!(q.end_date().to_string(), "2020-03-31");
    }
}
