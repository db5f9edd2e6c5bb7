//! Default floor plan (桌台布局)

use std::collections::HashSet;

use shared::models::{DiningTable, TableArea, TableShape};

use crate::core::error::ConfigError;

/// The restaurant's 19 tables: window and main dining rounds, wall booths,
/// two large rectangles, bar seating, patio and the private room.
pub fn default_floor_plan() -> Vec<DiningTable> {
    use TableArea::*;
    use TableShape::*;

    vec![
        DiningTable::new(1, "Table 1", Round, 2, Window, 100, 80),
        DiningTable::new(2, "Table 2", Round, 2, Window, 180, 80),
        DiningTable::new(3, "Table 3", Round, 4, Window, 260, 80),
        DiningTable::new(4, "Table 4", Round, 4, Main, 100, 160),
        DiningTable::new(5, "Table 5", Round, 4, Main, 180, 160),
        DiningTable::new(6, "Table 6", Round, 4, Main, 260, 160),
        DiningTable::new(7, "Booth 1", Booth, 4, Main, 40, 220),
        DiningTable::new(8, "Booth 2", Booth, 4, Main, 40, 300),
        DiningTable::new(9, "Booth 3", Booth, 4, Main, 40, 380),
        DiningTable::new(10, "Table 10", Rectangle, 6, Main, 180, 250),
        DiningTable::new(11, "Table 11", Rectangle, 6, Main, 180, 350),
        DiningTable::new(12, "Bar 1", Square, 2, Bar, 340, 220),
        DiningTable::new(13, "Bar 2", Square, 2, Bar, 340, 260),
        DiningTable::new(14, "Bar 3", Square, 2, Bar, 340, 300),
        DiningTable::new(15, "Bar 4", Square, 2, Bar, 340, 340),
        DiningTable::new(16, "Patio 1", Round, 4, Patio, 100, 450),
        DiningTable::new(17, "Patio 2", Round, 4, Patio, 180, 450),
        DiningTable::new(18, "Patio 3", Round, 4, Patio, 260, 450),
        DiningTable::new(19, "Private", Rectangle, 10, Private, 250, 550),
    ]
}

/// Table ids must be unique and every table must seat at least one guest
pub fn validate_floor_plan(tables: &[DiningTable]) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(tables.len());
    for table in tables {
        if !seen.insert(table.id) {
            return Err(ConfigError::InvalidFloorPlan(format!(
                "duplicate table id {}",
                table.id
            )));
        }
        if table.seats < 1 {
            return Err(ConfigError::InvalidFloorPlan(format!(
                "table {} has {} seats",
                table.id, table.seats
            )));
        }
    }
    Ok(())
}

/// Largest table capacity, 0 for an empty plan
pub fn max_capacity(tables: &[DiningTable]) -> i32 {
    tables.iter().map(|t| t.seats).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_is_valid() {
        let plan = default_floor_plan();
        assert_eq!(plan.len(), 19);
        assert!(validate_floor_plan(&plan).is_ok());
        assert_eq!(max_capacity(&plan), 10);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut plan = default_floor_plan();
        plan[1].id = 1;
        assert!(matches!(
            validate_floor_plan(&plan),
            Err(ConfigError::InvalidFloorPlan(msg)) if msg.contains("duplicate")
        ));
    }

    #[test]
    fn test_zero_seat_table_rejected() {
        let mut plan = default_floor_plan();
        plan[0].seats = 0;
        assert!(validate_floor_plan(&plan).is_err());
    }
}
