//! Calendar date to a continuous day count.
//!
//! The epoch is 2000 Jan 0.0 UT (1999-12-31 00:00 UT), so 2000-01-01 is day 1.
//! The integer formula ignores the century leap rule and is exact from
//! 1900-03-01 through 2100-02-28.

use crate::types::CalendarDate;

/// Whole days from 2000 Jan 0.0 to 0h UT of `date`.
pub fn days_since_2000_jan_0(date: CalendarDate) -> i64 {
    let y = i64::from(date.year);
    let m = i64::from(date.month);
    let d = i64::from(date.day);
    367 * y - (7 * (y + (m + 9) / 12)) / 4 + (275 * m) / 9 + d - 730530
}

/// Day count at 12h UT of `date`.
pub fn day_count(date: CalendarDate) -> f64 {
    days_since_2000_jan_0(date) as f64 + 0.5
}

/// Day count at local mean noon for an observer at `longitude`.
pub fn local_noon_day_count(date: CalendarDate, longitude: f64) -> f64 {
    day_count(date) - longitude / 360.0
}
