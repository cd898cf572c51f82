//! Integration tests for `Date`, `Timestamp`, and the bucketing helpers.

use proptest::prelude::*;

use bizcal_core::clock::FixedClock;
use bizcal_time::{Date, Quarter, Timestamp, Weekday};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Parsing and formatting ───────────────────────────────────────────────────

#[test]
fn parse_normalizes_the_alternate_separator() {
    let slash: Date = "2019/09/04".parse().unwrap();
    let dash: Date = "2019-09-04".parse().unwrap();
    assert_eq!(slash, dash);
    // canonical output regardless of input separator
    assert_eq!(slash.to_string(), "2019-09-04");
}

#[test]
fn parse_failures_are_loud() {
    assert!("2019-09-4".parse::<Date>().is_err());
    assert!("04/09/2019".parse::<Date>().is_err());
    assert!("2019-09-31".parse::<Date>().is_err());
    assert!("2019-09-04 00:00:00".parse::<Date>().is_err());
}

#[test]
fn month_name_form() {
    assert_eq!(Date::parse_mdy("Jan 01 2019").unwrap(), date(2019, 1, 1));
    assert_eq!(Date::parse_mdy("Dec 25 2019").unwrap(), date(2019, 12, 25));
}

// ─── Epoch milliseconds ───────────────────────────────────────────────────────

#[test]
fn epoch_millis_adapters() {
    let d = date(2019, 9, 4);
    let millis = d.to_epoch_millis();
    assert_eq!(Date::from_epoch_millis(millis).unwrap(), d);
    // any instant within the day maps back to the same date
    assert_eq!(Date::from_epoch_millis(millis + 86_399_999).unwrap(), d);

    let ts: Timestamp = "2019-09-04 13:05:09.250".parse().unwrap();
    assert_eq!(Timestamp::from_epoch_millis(ts.to_epoch_millis()).unwrap(), ts);
    assert_eq!(ts.date(), d);
    assert_eq!(ts.hhmmss_packed(), 130_509);
    assert_eq!(ts.time().format_hm(), "13:05");
}

#[test]
fn clock_driven_values() {
    // 2019-09-04T13:05:09.250Z
    let millis = date(2019, 9, 4).to_epoch_millis() + 47_109_250;
    let clock = FixedClock(millis);
    assert_eq!(Date::today(&clock).unwrap(), date(2019, 9, 4));
    assert!(date(2019, 9, 4).is_today(&clock));
    assert!(!date(2019, 9, 5).is_today(&clock));
    assert_eq!(Timestamp::now(&clock).unwrap().to_string(), "2019-09-04 13:05:09.250");
}

// ─── Buckets ──────────────────────────────────────────────────────────────────

#[test]
fn week_month_and_quarter_buckets() {
    let d = date(2019, 9, 4);
    assert_eq!(d.week_of_year(), "2019-36");
    assert_eq!(d.month_of_year(), "2019-09");
    assert_eq!(Quarter::of(d).to_string(), "2019Q3");
    assert_eq!(d.weekday(), Weekday::Wednesday);
    assert_eq!(d.weekday().abbrev(), "Wed");
}

#[test]
fn iso_week_year_boundary() {
    // first days of January can belong to the previous ISO week-year
    assert_eq!(date(2016, 1, 3).week_of_year(), "2015-53");
    assert_eq!(date(2016, 1, 4).week_of_year(), "2016-01");
    // ...and late December to the next
    assert_eq!(date(2019, 12, 30).week_of_year(), "2020-01");
}

#[test]
fn previous_quarter_chain() {
    let q: Quarter = "2020Q1".parse().unwrap();
    let q = q.previous().unwrap();
    assert_eq!(q.to_string(), "2019Q4");
    let q = q.previous().unwrap();
    assert_eq!(q.to_string(), "2019Q3");
}

// ─── Property checks ──────────────────────────────────────────────────────────

proptest! {
    /// Serial → components → serial is the identity over the whole range.
    #[test]
    fn serial_component_round_trip(serial in Date::MIN.serial()..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let rebuilt = Date::from_ymd(d.year(), d.month(), d.day_of_month()).unwrap();
        prop_assert_eq!(d, rebuilt);
    }

    /// Format → parse is the identity.
    #[test]
    fn format_parse_round_trip(serial in Date::MIN.serial()..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let parsed: Date = d.to_string().parse().unwrap();
        prop_assert_eq!(d, parsed);
    }

    /// Consecutive dates have consecutive weekdays.
    #[test]
    fn weekday_advances_by_one(serial in Date::MIN.serial()..Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let next = d + 1;
        let expected = d.weekday().ordinal() % 7 + 1;
        prop_assert_eq!(next.weekday().ordinal(), expected);
    }

    /// Epoch-millis conversion inverts for any instant in range.
    #[test]
    fn epoch_millis_floor(serial in Date::MIN.serial()..=Date::MAX.serial(), offset in 0i64..86_400_000) {
        let d = Date::from_serial(serial).unwrap();
        prop_assert_eq!(Date::from_epoch_millis(d.to_epoch_millis() + offset).unwrap(), d);
    }
}
