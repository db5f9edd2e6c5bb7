//! Table availability resolution
//!
//! `available` comes from the oracle and is fixed once resolved.
//! `suitable` is derived: `available && seats >= party_size`, and is the only
//! part recomputed when the party size changes.

use serde::Serialize;
use shared::models::DiningTable;
use tracing::debug;

use super::oracle::TableAvailabilityOracle;
use crate::core::error::OracleError;

/// Availability of one table at the selected time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableAvailability {
    pub table: DiningTable,
    pub available: bool,
    pub suitable: bool,
}

impl TableAvailability {
    pub fn new(table: DiningTable, available: bool, party_size: i32) -> Self {
        let suitable = is_suitable(&table, available, party_size);
        Self {
            table,
            available,
            suitable,
        }
    }
}

#[inline]
fn is_suitable(table: &DiningTable, available: bool, party_size: i32) -> bool {
    available && table.seats_party_of(party_size)
}

/// Resolve every table for `selected_time`, preserving input order
pub fn resolve_availability(
    tables: &[DiningTable],
    selected_time: &str,
    party_size: i32,
    oracle: &dyn TableAvailabilityOracle,
) -> Result<Vec<TableAvailability>, OracleError> {
    let resolved = tables
        .iter()
        .map(|table| {
            let available = oracle.is_table_available(table.id, selected_time)?;
            Ok(TableAvailability::new(table.clone(), available, party_size))
        })
        .collect::<Result<Vec<_>, OracleError>>()?;

    debug!(
        time = %selected_time,
        party_size,
        summary = ?AvailabilitySummary::of(&resolved),
        "Resolved table availability"
    );

    Ok(resolved)
}

/// Recompute `suitable` in place without asking the oracle again
pub fn refresh_suitability(resolved: &mut [TableAvailability], party_size: i32) {
    for entry in resolved.iter_mut() {
        entry.suitable = is_suitable(&entry.table, entry.available, party_size);
    }
}

/// Tables that can be selected
pub fn suitable_tables(resolved: &[TableAvailability]) -> impl Iterator<Item = &DiningTable> {
    resolved.iter().filter(|e| e.suitable).map(|e| &e.table)
}

/// Counts for headers and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AvailabilitySummary {
    pub total: usize,
    pub available: usize,
    pub suitable: usize,
}

impl AvailabilitySummary {
    pub fn of(resolved: &[TableAvailability]) -> Self {
        Self {
            total: resolved.len(),
            available: resolved.iter().filter(|e| e.available).count(),
            suitable: resolved.iter().filter(|e| e.suitable).count(),
        }
    }
}
