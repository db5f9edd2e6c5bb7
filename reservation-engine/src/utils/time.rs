//! 时间格式化工具
//!
//! Display formats shared by the calendar, the slot generator and the
//! confirmation summary.

use chrono::{NaiveDate, NaiveTime};

/// Slot label, e.g. "7:00 PM"
pub fn format_slot_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Calendar label, e.g. "Monday, Jan 5"
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%A, %b %-d").to_string()
}

/// Confirmation label, e.g. "January 5, 2026"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// YYYY-MM-DD
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_time_format() {
        assert_eq!(format_slot_time(NaiveTime::from_hms_opt(11, 0, 0).unwrap()), "11:00 AM");
        assert_eq!(format_slot_time(NaiveTime::from_hms_opt(19, 30, 0).unwrap()), "7:30 PM");
        assert_eq!(format_slot_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap()), "12:00 PM");
    }

    #[test]
    fn test_date_formats() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(format_display_date(date), "Monday, Jan 5");
        assert_eq!(format_long_date(date), "January 5, 2026");
        assert_eq!(iso_date(date), "2026-01-05");
    }
}
