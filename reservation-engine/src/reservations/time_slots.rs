//! Time slot generation
//!
//! Slots start at opening time and repeat every `interval_minutes` while
//! strictly before closing time. Slots at or before "now" are never offered.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use shared::models::{BusinessHours, DayCategory, OpeningHours};
use tracing::debug;

use super::oracle::AvailabilityOracle;
use crate::core::error::{ConfigError, Result};
use crate::utils::time::format_slot_time;

/// Dinner service starts at 16:00
const DINNER_START: NaiveTime = match NaiveTime::from_hms_opt(16, 0, 0) {
    Some(t) => t,
    None => panic!("invalid dinner start"),
};

/// Longest slot interval accepted: one day
pub const MAX_INTERVAL_MINUTES: i64 = 24 * 60;

/// A bookable time point
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// "7:00 PM"
    pub time: String,
    pub instant: NaiveDateTime,
    pub available: bool,
}

impl TimeSlot {
    pub fn period(&self) -> MealPeriod {
        MealPeriod::of(self.instant.time())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MealPeriod {
    Lunch,
    Dinner,
}

impl MealPeriod {
    pub fn of(time: NaiveTime) -> Self {
        if time < DINNER_START {
            MealPeriod::Lunch
        } else {
            MealPeriod::Dinner
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MealPeriod::Lunch => "Lunch",
            MealPeriod::Dinner => "Dinner",
        }
    }
}

/// Slots of one meal period, in time order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotGroup {
    pub period: MealPeriod,
    pub slots: Vec<TimeSlot>,
}

/// Reject entries that would loop forever or silently produce no slots
pub fn validate_opening_hours(
    category: DayCategory,
    hours: &OpeningHours,
) -> std::result::Result<(), ConfigError> {
    if hours.interval_minutes <= 0 {
        return Err(ConfigError::NonPositiveInterval {
            category,
            interval_minutes: hours.interval_minutes,
        });
    }
    if hours.interval_minutes > MAX_INTERVAL_MINUTES {
        return Err(ConfigError::IntervalTooLong {
            category,
            interval_minutes: hours.interval_minutes,
            max_minutes: MAX_INTERVAL_MINUTES,
        });
    }
    if hours.open >= hours.close {
        return Err(ConfigError::EmptyServiceWindow {
            category,
            open: hours.open,
            close: hours.close,
        });
    }
    Ok(())
}

/// Check every category of a business hours table
pub fn validate_business_hours(hours: &BusinessHours) -> std::result::Result<(), ConfigError> {
    [
        DayCategory::MondayToThursday,
        DayCategory::FridayToSaturday,
        DayCategory::Sunday,
    ]
    .into_iter()
    .try_for_each(|category| validate_opening_hours(category, hours.for_category(category)))
}

/// Slot instants for `date`, excluding those not strictly after `now`
pub fn slot_instants(
    date: NaiveDate,
    hours: &BusinessHours,
    now: NaiveDateTime,
) -> std::result::Result<Vec<NaiveDateTime>, ConfigError> {
    let (category, entry) = hours.for_weekday(date.weekday());
    validate_opening_hours(category, entry)?;

    let step = Duration::try_minutes(entry.interval_minutes).ok_or(
        ConfigError::IntervalTooLong {
            category,
            interval_minutes: entry.interval_minutes,
            max_minutes: MAX_INTERVAL_MINUTES,
        },
    )?;
    let close = date.and_time(entry.close);
    let mut next = Some(date.and_time(entry.open));
    let mut instants = Vec::new();

    while let Some(instant) = next.filter(|i| *i < close) {
        if instant > now {
            instants.push(instant);
        }
        next = instant.checked_add_signed(step);
    }

    Ok(instants)
}

/// Generate the slots offered for `date`
///
/// Availability of each slot comes from the oracle; an oracle failure aborts
/// the whole generation instead of being read as "fully booked".
pub fn generate_time_slots(
    date: NaiveDate,
    hours: &BusinessHours,
    now: NaiveDateTime,
    oracle: &dyn AvailabilityOracle,
) -> Result<Vec<TimeSlot>> {
    let instants = slot_instants(date, hours, now)?;

    let slots = instants
        .into_iter()
        .map(|instant| -> Result<TimeSlot> {
            let available = oracle.is_slot_available(date, instant.time())?;
            Ok(TimeSlot {
                time: format_slot_time(instant.time()),
                instant,
                available,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        date = %date,
        total = slots.len(),
        open = slots.iter().filter(|s| s.available).count(),
        "Generated time slots"
    );

    Ok(slots)
}

/// Split slots into Lunch and Dinner, dropping empty groups
pub fn group_by_period(slots: &[TimeSlot]) -> Vec<SlotGroup> {
    [MealPeriod::Lunch, MealPeriod::Dinner]
        .into_iter()
        .map(|period| SlotGroup {
            period,
            slots: slots.iter().filter(|s| s.period() == period).cloned().collect(),
        })
        .filter(|group| !group.slots.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{OracleError, ReservationError};
    use crate::reservations::oracle::{OpenAvailability, ScriptedAvailability};

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    // 2026-01-05 is a Monday
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    fn long_ago() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn test_weekday_slots_cover_open_to_close() {
        let hours = BusinessHours::default();
        let slots = generate_time_slots(monday(), &hours, long_ago(), &OpenAvailability).unwrap();

        // 11:00 .. 21:30 every 30 minutes
        assert_eq!(slots.len(), 22);
        assert_eq!(slots.first().unwrap().time, "11:00 AM");
        assert_eq!(slots.last().unwrap().time, "9:30 PM");
        assert!(slots.iter().all(|s| s.available));
    }

    #[test]
    fn test_slots_are_spaced_by_interval_and_bounded() {
        let hours = BusinessHours::default();
        for offset in 0..7 {
            let date = monday() + Duration::days(offset);
            let (_, entry) = hours.for_weekday(date.weekday());
            let instants = slot_instants(date, &hours, long_ago()).unwrap();

            assert!(!instants.is_empty());
            for pair in instants.windows(2) {
                assert_eq!(pair[1] - pair[0], Duration::minutes(entry.interval_minutes));
            }
            for instant in &instants {
                assert!(*instant >= date.and_time(entry.open));
                assert!(*instant < date.and_time(entry.close));
            }
        }
    }

    #[test]
    fn test_friday_and_sunday_use_their_own_hours() {
        let hours = BusinessHours::default();
        let friday = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2026, 1, 11).unwrap();

        let fri = slot_instants(friday, &hours, long_ago()).unwrap();
        let sun = slot_instants(sunday, &hours, long_ago()).unwrap();
        assert_eq!(fri.last().unwrap().time(), hm(22, 30));
        assert_eq!(sun.last().unwrap().time(), hm(20, 30));
    }

    #[test]
    fn test_interval_not_dividing_window() {
        let mut hours = BusinessHours::default();
        hours.monday_to_thursday = OpeningHours::new(hm(11, 0), hm(12, 0), 25);
        let instants = slot_instants(monday(), &hours, long_ago()).unwrap();
        let times: Vec<_> = instants.iter().map(|i| i.time()).collect();
        assert_eq!(times, [hm(11, 0), hm(11, 25), hm(11, 50)]);
    }

    #[test]
    fn test_today_excludes_past_and_present_instants() {
        let hours = BusinessHours::default();
        let now = monday().and_time(hm(19, 0));
        let slots = generate_time_slots(monday(), &hours, now, &OpenAvailability).unwrap();

        assert!(slots.iter().all(|s| s.instant > now));
        // 19:00 itself is excluded, next is 19:30
        assert_eq!(slots.first().unwrap().time, "7:30 PM");
        assert_eq!(slots.len(), 5);
    }

    #[test]
    fn test_today_after_closing_has_no_slots() {
        let hours = BusinessHours::default();
        let now = monday().and_time(hm(22, 5));
        assert!(slot_instants(monday(), &hours, now).unwrap().is_empty());
    }

    #[test]
    fn test_zero_interval_fails_fast() {
        let mut hours = BusinessHours::default();
        hours.monday_to_thursday.interval_minutes = 0;
        assert_eq!(
            slot_instants(monday(), &hours, long_ago()),
            Err(ConfigError::NonPositiveInterval {
                category: DayCategory::MondayToThursday,
                interval_minutes: 0,
            })
        );

        hours.monday_to_thursday.interval_minutes = -15;
        assert!(slot_instants(monday(), &hours, long_ago()).is_err());
    }

    #[test]
    fn test_oversized_interval_fails_fast() {
        let mut hours = BusinessHours::default();
        hours.monday_to_thursday.interval_minutes = 2_000_000_000_000;
        assert_eq!(
            slot_instants(monday(), &hours, long_ago()),
            Err(ConfigError::IntervalTooLong {
                category: DayCategory::MondayToThursday,
                interval_minutes: 2_000_000_000_000,
                max_minutes: MAX_INTERVAL_MINUTES,
            })
        );
        assert!(validate_business_hours(&hours).is_err());

        // beyond TimeDelta range
        hours.monday_to_thursday.interval_minutes = 9_000_000_000_000_000;
        assert!(slot_instants(monday(), &hours, long_ago()).is_err());
    }

    #[test]
    fn test_day_long_interval_yields_opening_slot_only() {
        let mut hours = BusinessHours::default();
        hours.monday_to_thursday.interval_minutes = MAX_INTERVAL_MINUTES;
        let instants = slot_instants(monday(), &hours, long_ago()).unwrap();
        assert_eq!(instants, [monday().and_time(hm(11, 0))]);
    }

    #[test]
    fn test_open_not_before_close_fails_fast() {
        let mut hours = BusinessHours::default();
        hours.monday_to_thursday = OpeningHours::new(hm(22, 0), hm(11, 0), 30);
        assert!(matches!(
            slot_instants(monday(), &hours, long_ago()),
            Err(ConfigError::EmptyServiceWindow { .. })
        ));

        hours.monday_to_thursday = OpeningHours::new(hm(11, 0), hm(11, 0), 30);
        assert!(slot_instants(monday(), &hours, long_ago()).is_err());
    }

    #[test]
    fn test_misconfigured_other_category_does_not_affect_valid_day() {
        let mut hours = BusinessHours::default();
        hours.sunday.interval_minutes = 0;
        assert!(slot_instants(monday(), &hours, long_ago()).is_ok());
        assert!(validate_business_hours(&hours).is_err());
    }

    #[test]
    fn test_oracle_marks_slot_unavailable() {
        let hours = BusinessHours::default();
        let oracle = ScriptedAvailability::new().block_slot(monday(), hm(12, 30));
        let slots = generate_time_slots(monday(), &hours, long_ago(), &oracle).unwrap();

        let blocked: Vec<_> = slots.iter().filter(|s| !s.available).collect();
        assert_eq!(blocked.len(), 1);
        assert_eq!(blocked[0].time, "12:30 PM");
    }

    #[test]
    fn test_oracle_failure_propagates() {
        let hours = BusinessHours::default();
        let oracle = ScriptedAvailability::failing(OracleError::Unreachable("offline".into()));
        let result = generate_time_slots(monday(), &hours, long_ago(), &oracle);
        assert!(matches!(result, Err(ReservationError::Oracle(_))));
    }

    #[test]
    fn test_group_by_period() {
        let hours = BusinessHours::default();
        let slots = generate_time_slots(monday(), &hours, long_ago(), &OpenAvailability).unwrap();
        let groups = group_by_period(&slots);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].period, MealPeriod::Lunch);
        assert_eq!(groups[0].slots.last().unwrap().time, "3:30 PM");
        assert_eq!(groups[1].period, MealPeriod::Dinner);
        assert_eq!(groups[1].slots.first().unwrap().time, "4:00 PM");
        assert_eq!(groups[0].slots.len() + groups[1].slots.len(), slots.len());
    }

    #[test]
    fn test_group_by_period_drops_empty_lunch() {
        let hours = BusinessHours::default();
        let now = monday().and_time(hm(17, 0));
        let slots = generate_time_slots(monday(), &hours, now, &OpenAvailability).unwrap();
        let groups = group_by_period(&slots);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].period.name(), "Dinner");
    }
}
