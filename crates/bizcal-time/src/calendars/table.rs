//! Table calendar — a calendar over an injected holiday table.

use std::collections::HashSet;

use crate::calendar::Calendar;
use crate::date::Date;

/// A named calendar whose holidays are an immutable table of dates, fixed at
/// construction.
///
/// The table is configuration data: load it from wherever holiday data lives
/// (or generate it, see [`united_states`](crate::calendars::united_states))
/// and hand it in.  A date is a holiday iff it is a weekend day or a member
/// of the table.
#[derive(Debug, Clone)]
pub struct TableCalendar {
    name: String,
    holidays: HashSet<i32>,
}

impl TableCalendar {
    /// Create a calendar from a holiday table.
    pub fn new(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        TableCalendar {
            name: name.into(),
            holidays: holidays.into_iter().map(|d| d.serial()).collect(),
        }
    }

    /// Return `true` if `date` is in the holiday table (weekends are not
    /// listed; see [`Calendar::is_holiday`]).
    pub fn contains(&self, date: Date) -> bool {
        self.holidays.contains(&date.serial())
    }

    /// The number of listed holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl Calendar for TableCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.holidays.contains(&date.serial())
    }
}
