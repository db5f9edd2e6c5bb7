//! Dining Table Model

use serde::{Deserialize, Serialize};

use super::zone::TableArea;

/// Table shape (used by the floor plan renderer)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TableShape {
    Round,
    Rectangle,
    Square,
    Booth,
}

/// Floor plan coordinates of a table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FloorPosition {
    pub x: i32,
    pub y: i32,
}

/// Dining table entity (桌台)
///
/// Static layout data; immutable for the lifetime of a reservation session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiningTable {
    pub id: i64,
    pub name: String,
    pub shape: TableShape,
    /// Seat count, always >= 1
    pub seats: i32,
    pub area: TableArea,
    pub position: FloorPosition,
}

impl DiningTable {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        shape: TableShape,
        seats: i32,
        area: TableArea,
        x: i32,
        y: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            shape,
            seats,
            area,
            position: FloorPosition { x, y },
        }
    }

    /// Whether the table has enough seats for the party
    #[inline]
    pub fn seats_party_of(&self, party_size: i32) -> bool {
        self.seats >= party_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seats_party_of_boundary() {
        let table = DiningTable::new(1, "Table 1", TableShape::Round, 4, TableArea::Main, 0, 0);
        assert!(table.seats_party_of(3));
        assert!(table.seats_party_of(4));
        assert!(!table.seats_party_of(5));
    }

    #[test]
    fn test_shape_serializes_lowercase() {
        let json = serde_json::to_string(&TableShape::Booth).unwrap();
        assert_eq!(json, "\"booth\"");
    }
}
