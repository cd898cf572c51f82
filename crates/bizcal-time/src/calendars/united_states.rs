//! United States holiday table generators.
//!
//! Holiday tables are produced per calendar year as plain date lists, ready
//! to feed a [`TableCalendar`]; the arithmetic engine is not tied to any
//! year.  Two rule sets are provided: the federal (settlement) holidays and
//! the NYSE trading holidays (which add Good Friday and drop Columbus and
//! Veterans' Day).

use std::ops::RangeInclusive;

use bizcal_core::errors::Result;

use crate::calendars::TableCalendar;
use crate::date::Date;
use crate::weekday::Weekday;

/// US federal (settlement) holidays for one year.
///
/// * New Year's Day (Jan 1; if Sun → Mon; a Saturday Jan 1 is observed on
///   Dec 31 and therefore appears in the *previous* year's table)
/// * Martin Luther King Jr. Day (3rd Mon in Jan, from 1983)
/// * Presidents' Day (3rd Mon in Feb)
/// * Memorial Day (last Mon in May)
/// * Juneteenth (Jun 19, observed, from 2022)
/// * Independence Day (Jul 4, observed)
/// * Labor Day (1st Mon in Sep)
/// * Columbus Day (2nd Mon in Oct)
/// * Veterans' Day (Nov 11, observed)
/// * Thanksgiving Day (4th Thu in Nov)
/// * Christmas Day (Dec 25, observed)
pub fn settlement_holidays(year: u16) -> Result<Vec<Date>> {
    let mut dates = Vec::new();

    let jan1 = Date::from_ymd(year, 1, 1)?;
    match jan1.weekday() {
        Weekday::Saturday => {}
        Weekday::Sunday => dates.push(jan1.add_days(1)?),
        _ => dates.push(jan1),
    }
    if year >= 1983 {
        dates.push(Date::nth_weekday(3, Weekday::Monday, year, 1)?);
    }
    dates.push(Date::nth_weekday(3, Weekday::Monday, year, 2)?);
    dates.push(Date::last_weekday_of_month(Weekday::Monday, year, 5)?);
    if year >= 2022 {
        dates.push(observed(Date::from_ymd(year, 6, 19)?)?);
    }
    dates.push(observed(Date::from_ymd(year, 7, 4)?)?);
    dates.push(Date::nth_weekday(1, Weekday::Monday, year, 9)?);
    dates.push(Date::nth_weekday(2, Weekday::Monday, year, 10)?);
    dates.push(observed(Date::from_ymd(year, 11, 11)?)?);
    dates.push(Date::nth_weekday(4, Weekday::Thursday, year, 11)?);
    dates.push(observed(Date::from_ymd(year, 12, 25)?)?);

    // next year's New Year's Day, observed on Dec 31 when Jan 1 is a Saturday
    let dec31 = Date::from_ymd(year, 12, 31)?;
    if dec31.weekday() == Weekday::Friday {
        dates.push(dec31);
    }

    dates.sort();
    Ok(dates)
}

/// NYSE trading holidays for one year.
///
/// Relative to [`settlement_holidays`]: adds Good Friday and the exchange's
/// historical one-off closings, drops Columbus Day and Veterans' Day, starts
/// observing MLK Day in 1998, and does not move a Saturday New Year's Day to
/// the preceding Friday.
pub fn nyse_holidays(year: u16) -> Result<Vec<Date>> {
    let mut dates = Vec::new();

    let jan1 = Date::from_ymd(year, 1, 1)?;
    match jan1.weekday() {
        Weekday::Saturday => {}
        Weekday::Sunday => dates.push(jan1.add_days(1)?),
        _ => dates.push(jan1),
    }
    if year >= 1998 {
        dates.push(Date::nth_weekday(3, Weekday::Monday, year, 1)?);
    }
    dates.push(Date::nth_weekday(3, Weekday::Monday, year, 2)?);
    dates.push(good_friday(year)?);
    dates.push(Date::last_weekday_of_month(Weekday::Monday, year, 5)?);
    if year >= 2022 {
        dates.push(observed(Date::from_ymd(year, 6, 19)?)?);
    }
    dates.push(observed(Date::from_ymd(year, 7, 4)?)?);
    dates.push(Date::nth_weekday(1, Weekday::Monday, year, 9)?);
    dates.push(Date::nth_weekday(4, Weekday::Thursday, year, 11)?);
    dates.push(observed(Date::from_ymd(year, 12, 25)?)?);

    for &(y, m, d) in historical_closings(year) {
        dates.push(Date::from_ymd(y, m, d)?);
    }

    dates.sort();
    dates.dedup();
    Ok(dates)
}

/// US federal (settlement) calendar covering an inclusive range of years.
pub fn settlement(years: RangeInclusive<u16>) -> Result<TableCalendar> {
    let mut holidays = Vec::new();
    for year in years {
        holidays.extend(settlement_holidays(year)?);
    }
    Ok(TableCalendar::new("US (Settlement)", holidays))
}

/// NYSE calendar covering an inclusive range of years.
pub fn nyse(years: RangeInclusive<u16>) -> Result<TableCalendar> {
    let mut holidays = Vec::new();
    for year in years {
        holidays.extend(nyse_holidays(year)?);
    }
    Ok(TableCalendar::new("US (NYSE)", holidays))
}

/// Easter Sunday by the anonymous Gregorian computus.
pub fn easter_sunday(year: u16) -> Result<Date> {
    let y = year as i32;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    Date::from_ymd(year, month as u8, day as u8)
}

/// Good Friday: two days before Easter Sunday.
pub fn good_friday(year: u16) -> Result<Date> {
    easter_sunday(year)?.add_days(-2)
}

/// Shift a fixed-date holiday off the weekend: Saturday → preceding Friday,
/// Sunday → following Monday.
fn observed(date: Date) -> Result<Date> {
    match date.weekday() {
        Weekday::Saturday => date.add_days(-1),
        Weekday::Sunday => date.add_days(1),
        _ => Ok(date),
    }
}

/// One-off NYSE closings (funerals, disasters, September 2001).
fn historical_closings(year: u16) -> &'static [(u16, u8, u8)] {
    match year {
        2012 => &[(2012, 10, 29), (2012, 10, 30)], // Hurricane Sandy
        2004 => &[(2004, 6, 11)],                  // President Reagan's funeral
        2001 => &[(2001, 9, 11), (2001, 9, 12), (2001, 9, 13), (2001, 9, 14)],
        1994 => &[(1994, 4, 27)],                  // President Nixon's funeral
        1985 => &[(1985, 9, 27)],                  // Hurricane Gloria
        1977 => &[(1977, 7, 14)],                  // blackout
        1973 => &[(1973, 1, 25)],                  // President Johnson's funeral
        1972 => &[(1972, 12, 28)],                 // President Truman's funeral
        1969 => &[(1969, 2, 10), (1969, 3, 31), (1969, 7, 21)],
        1968 => &[(1968, 4, 9), (1968, 7, 5)],
        1963 => &[(1963, 11, 25)],                 // President Kennedy's funeral
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn nyse_2019_table() {
        let expected = vec![
            date(2019, 1, 1),   // New Year's Day
            date(2019, 1, 21),  // MLK Day
            date(2019, 2, 18),  // Presidents' Day
            date(2019, 4, 19),  // Good Friday
            date(2019, 5, 27),  // Memorial Day
            date(2019, 7, 4),   // Independence Day
            date(2019, 9, 2),   // Labor Day
            date(2019, 11, 28), // Thanksgiving
            date(2019, 12, 25), // Christmas
        ];
        assert_eq!(nyse_holidays(2019).unwrap(), expected);
    }

    #[test]
    fn settlement_2019_table() {
        let holidays = settlement_holidays(2019).unwrap();
        assert_eq!(holidays.len(), 10);
        // the two federal holidays the NYSE does not observe
        assert!(holidays.contains(&date(2019, 10, 14))); // Columbus Day
        assert!(holidays.contains(&date(2019, 11, 11))); // Veterans' Day
        assert!(!holidays.contains(&date(2019, 4, 19))); // no Good Friday
    }

    #[test]
    fn observed_shifts_2021() {
        let holidays = settlement_holidays(2021).unwrap();
        // Jul 4 2021 is a Sunday → observed Monday Jul 5
        assert!(holidays.contains(&date(2021, 7, 5)));
        // Dec 25 2021 is a Saturday → observed Friday Dec 24
        assert!(holidays.contains(&date(2021, 12, 24)));
        // Jan 1 2022 is a Saturday → observed Friday Dec 31 2021
        assert!(holidays.contains(&date(2021, 12, 31)));
        // ...and 2022's own table has no New Year's entry
        let next = settlement_holidays(2022).unwrap();
        assert!(!next.contains(&date(2022, 1, 1)));
        assert!(!next.contains(&date(2021, 12, 31)));
    }

    #[test]
    fn nyse_does_not_observe_a_saturday_new_year() {
        // real-world check: the NYSE traded on Friday Dec 31 2021
        let cal = nyse(2021..=2022).unwrap();
        assert!(cal.is_business_day(date(2021, 12, 31)));
    }

    #[test]
    fn juneteenth_starts_in_2022() {
        assert!(!settlement_holidays(2021).unwrap().contains(&date(2021, 6, 18)));
        // Jun 19 2022 is a Sunday → observed Monday Jun 20
        assert!(settlement_holidays(2022).unwrap().contains(&date(2022, 6, 20)));
        assert!(nyse_holidays(2022).unwrap().contains(&date(2022, 6, 20)));
    }

    #[test]
    fn easter_dates() {
        assert_eq!(easter_sunday(2019).unwrap(), date(2019, 4, 21));
        assert_eq!(easter_sunday(2024).unwrap(), date(2024, 3, 31));
        assert_eq!(good_friday(2019).unwrap(), date(2019, 4, 19));
        assert_eq!(good_friday(2024).unwrap(), date(2024, 3, 29));
    }

    #[test]
    fn september_2001_closings() {
        let cal = nyse(2001..=2001).unwrap();
        for day in 11..=14 {
            assert!(!cal.is_business_day(date(2001, 9, day)));
        }
        assert!(cal.is_business_day(date(2001, 9, 17))); // reopened Monday
    }

    #[test]
    fn multi_year_calendar() {
        let cal = nyse(2019..=2020).unwrap();
        assert!(!cal.is_business_day(date(2019, 12, 25)));
        assert!(!cal.is_business_day(date(2020, 12, 25)));
        assert_eq!(cal.name(), "US (NYSE)");
    }
}
