//! Calendar day window
//!
//! Selectable dates, starting at a given day and moving forward one
//! calendar day at a time.

use chrono::NaiveDate;
use serde::Serialize;

use super::clock::Clock;
use crate::utils::time::{format_display_date, iso_date};

/// One selectable day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// "Monday, Jan 5"
    pub display_label: String,
    pub is_today: bool,
    /// "2026-01-05"
    pub iso_date: String,
}

impl CalendarDay {
    fn new(date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            date,
            display_label: format_display_date(date),
            is_today: date == today,
            iso_date: iso_date(date),
        }
    }
}

/// Lazy, unbounded window starting at `from`
///
/// Stops only at the end of chrono's representable range.
pub fn calendar_days(from: NaiveDate, today: NaiveDate) -> impl Iterator<Item = CalendarDay> {
    from.iter_days().map(move |date| CalendarDay::new(date, today))
}

/// Exactly `n` days starting at `from` (empty when `n == 0`)
pub fn generate_days(n: usize, from: NaiveDate, today: NaiveDate) -> Vec<CalendarDay> {
    calendar_days(from, today).take(n).collect()
}

/// `n` days starting at the clock's today
pub fn upcoming_days(clock: &dyn Clock, n: usize) -> Vec<CalendarDay> {
    let today = clock.today();
    generate_days(n, today, today)
}
