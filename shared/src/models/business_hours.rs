//! Business Hours Model
//!
//! Opening hours per day category (营业时间). Read-only at runtime.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Day grouping used to pick opening hours
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum DayCategory {
    MondayToThursday,
    FridayToSaturday,
    Sunday,
}

impl DayCategory {
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Fri | Weekday::Sat => DayCategory::FridayToSaturday,
            Weekday::Sun => DayCategory::Sunday,
            _ => DayCategory::MondayToThursday,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayCategory::MondayToThursday => "mondayToThursday",
            DayCategory::FridayToSaturday => "fridayToSaturday",
            DayCategory::Sunday => "sunday",
        }
    }
}

impl std::fmt::Display for DayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opening hours of one day category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    /// Opening time (HH:MM)
    #[serde(with = "hhmm")]
    pub open: NaiveTime,
    /// Closing time (HH:MM), exclusive for slot generation
    #[serde(with = "hhmm")]
    pub close: NaiveTime,
    /// Minutes between two bookable slots
    pub interval_minutes: i64,
}

impl OpeningHours {
    pub const fn new(open: NaiveTime, close: NaiveTime, interval_minutes: i64) -> Self {
        Self {
            open,
            close,
            interval_minutes,
        }
    }
}

/// Business hours table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessHours {
    pub monday_to_thursday: OpeningHours,
    pub friday_to_saturday: OpeningHours,
    pub sunday: OpeningHours,
}

impl BusinessHours {
    pub fn for_category(&self, category: DayCategory) -> &OpeningHours {
        match category {
            DayCategory::MondayToThursday => &self.monday_to_thursday,
            DayCategory::FridayToSaturday => &self.friday_to_saturday,
            DayCategory::Sunday => &self.sunday,
        }
    }

    pub fn for_weekday(&self, weekday: Weekday) -> (DayCategory, &OpeningHours) {
        let category = DayCategory::from_weekday(weekday);
        (category, self.for_category(category))
    }
}

const fn hm(hour: u32, min: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, 0) {
        Some(t) => t,
        None => panic!("invalid time of day"),
    }
}

const DEFAULT_INTERVAL_MINUTES: i64 = 30;

impl Default for BusinessHours {
    /// 11:00-22:00 Mon-Thu, 11:00-23:00 Fri-Sat, 11:00-21:00 Sun, every 30 minutes
    fn default() -> Self {
        Self {
            monday_to_thursday: OpeningHours::new(hm(11, 0), hm(22, 0), DEFAULT_INTERVAL_MINUTES),
            friday_to_saturday: OpeningHours::new(hm(11, 0), hm(23, 0), DEFAULT_INTERVAL_MINUTES),
            sunday: OpeningHours::new(hm(11, 0), hm(21, 0), DEFAULT_INTERVAL_MINUTES),
        }
    }
}

/// `NaiveTime` as "HH:MM" (seconds accepted on input)
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(|e| serde::de::Error::custom(format!("invalid time '{}': {}", raw, e)))
    }
}
