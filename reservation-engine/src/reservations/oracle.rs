//! Availability oracles
//!
//! Availability is fully delegated to these capabilities. The engine never
//! hard-codes which tables or slots are taken.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use rand::Rng;

use crate::core::error::OracleError;

/// Answers whether a time slot still takes bookings
pub trait AvailabilityOracle: Send + Sync {
    fn is_slot_available(&self, date: NaiveDate, time: NaiveTime) -> Result<bool, OracleError>;
}

/// Answers whether a table is free at a slot
///
/// `time` is the slot label as shown to the guest ("7:00 PM").
pub trait TableAvailabilityOracle: Send + Sync {
    fn is_table_available(&self, table_id: i64, time: &str) -> Result<bool, OracleError>;
}

/// Everything is available
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAvailability;

impl AvailabilityOracle for OpenAvailability {
    fn is_slot_available(&self, _date: NaiveDate, _time: NaiveTime) -> Result<bool, OracleError> {
        Ok(true)
    }
}

impl TableAvailabilityOracle for OpenAvailability {
    fn is_table_available(&self, _table_id: i64, _time: &str) -> Result<bool, OracleError> {
        Ok(true)
    }
}

/// Explicit list of taken slots and tables
#[derive(Debug, Clone, Default)]
pub struct ScriptedAvailability {
    blocked_slots: HashSet<(NaiveDate, NaiveTime)>,
    blocked_tables: HashSet<(i64, String)>,
    failure: Option<OracleError>,
}

impl ScriptedAvailability {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_slot(mut self, date: NaiveDate, time: NaiveTime) -> Self {
        self.blocked_slots.insert((date, time));
        self
    }

    pub fn block_table(mut self, table_id: i64, time: impl Into<String>) -> Self {
        self.blocked_tables.insert((table_id, time.into()));
        self
    }

    /// Every query fails with the given error
    pub fn failing(error: OracleError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    fn check_failure(&self) -> Result<(), OracleError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl AvailabilityOracle for ScriptedAvailability {
    fn is_slot_available(&self, date: NaiveDate, time: NaiveTime) -> Result<bool, OracleError> {
        self.check_failure()?;
        Ok(!self.blocked_slots.contains(&(date, time)))
    }
}

impl TableAvailabilityOracle for ScriptedAvailability {
    fn is_table_available(&self, table_id: i64, time: &str) -> Result<bool, OracleError> {
        self.check_failure()?;
        Ok(!self.blocked_tables.contains(&(table_id, time.to_string())))
    }
}

/// Random availability for demos
///
/// Each query is independent; the same slot may flip between calls.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedAvailability {
    /// Probability that a slot is open
    slot_open_ratio: f64,
    /// Probability that a table is free
    table_free_ratio: f64,
}

const DEFAULT_SLOT_OPEN_RATIO: f64 = 0.7;
const DEFAULT_TABLE_FREE_RATIO: f64 = 0.8;

impl SimulatedAvailability {
    /// Ratios are clamped to `[0, 1]`; a non-finite ratio falls back to its default
    pub fn new(slot_open_ratio: f64, table_free_ratio: f64) -> Self {
        Self {
            slot_open_ratio: probability(slot_open_ratio, DEFAULT_SLOT_OPEN_RATIO),
            table_free_ratio: probability(table_free_ratio, DEFAULT_TABLE_FREE_RATIO),
        }
    }

    pub fn slot_open_ratio(&self) -> f64 {
        self.slot_open_ratio
    }

    pub fn table_free_ratio(&self) -> f64 {
        self.table_free_ratio
    }
}

fn probability(ratio: f64, fallback: f64) -> f64 {
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        fallback
    }
}

impl Default for SimulatedAvailability {
    fn default() -> Self {
        Self::new(DEFAULT_SLOT_OPEN_RATIO, DEFAULT_TABLE_FREE_RATIO)
    }
}

impl AvailabilityOracle for SimulatedAvailability {
    fn is_slot_available(&self, _date: NaiveDate, _time: NaiveTime) -> Result<bool, OracleError> {
        Ok(rand::thread_rng().gen_bool(self.slot_open_ratio))
    }
}

impl TableAvailabilityOracle for SimulatedAvailability {
    fn is_table_available(&self, _table_id: i64, _time: &str) -> Result<bool, OracleError> {
        Ok(rand::thread_rng().gen_bool(self.table_free_ratio))
    }
}
