//! Defaulting and validation of parsed dates.
//!
//! The parser leaves absent fields absent; this step fills them from
//! "today" and then range-checks the result. `today` is passed in from
//! the CLI boundary so everything here stays a pure function.

use chrono::{Datelike, NaiveDate};

use event_types::{ParsedDate, ResolvedDate};

/// Fill absent fields: year and month default to today's, day defaults
/// to the 1st.
pub fn resolve(parsed: &ParsedDate, today: NaiveDate) -> ResolvedDate {
    ResolvedDate {
        month: parsed.month.unwrap_or(today.month0() as i32),
        day: parsed.day.unwrap_or(1),
        year: parsed.year.unwrap_or(today.year()),
    }
}

/// Range-check a resolved date: month in [0,11], day fits the month
/// (leap years included), year in [1000, today's year + 10].
pub fn is_valid(date: &ResolvedDate, today: NaiveDate) -> bool {
    if !(0..=11).contains(&date.month) {
        return false;
    }
    if !(1000..=today.year() + 10).contains(&date.year) {
        return false;
    }
    date.day >= 1 && date.day <= days_in_month(date.month as u32, date.year)
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in a month, for a 0-based month index.
pub fn days_in_month(month0: u32, year: i32) -> u32 {
    match month0 {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}
