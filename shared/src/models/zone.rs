//! Zone Model
//!
//! Restaurant areas (窗边、大厅、吧台、露台、包厢) and their display catalog.

use serde::{Deserialize, Serialize};

/// Area a table belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TableArea {
    Window,
    Main,
    Bar,
    Patio,
    Private,
}

impl TableArea {
    pub const ALL: [TableArea; 5] = [
        TableArea::Window,
        TableArea::Main,
        TableArea::Bar,
        TableArea::Patio,
        TableArea::Private,
    ];

    /// Section name shown to guests
    pub fn display_name(&self) -> &'static str {
        match self {
            TableArea::Window => "Window",
            TableArea::Main => "Main Dining",
            TableArea::Bar => "Bar Area",
            TableArea::Patio => "Patio",
            TableArea::Private => "Private Room",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TableArea::Window => "Enjoy your meal with a view of the avenue",
            TableArea::Main => "The heart of our restaurant with a warm, inviting atmosphere",
            TableArea::Bar => "Casual seating near our full-service bar",
            TableArea::Patio => "Outdoor seating with heaters for year-round comfort",
            TableArea::Private => "Exclusive space for larger groups and special events",
        }
    }
}

/// Restaurant section entity (区域)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RestaurantSection {
    pub area: TableArea,
    pub name: String,
    pub description: String,
}

impl From<TableArea> for RestaurantSection {
    fn from(area: TableArea) -> Self {
        Self {
            area,
            name: area.display_name().to_string(),
            description: area.description().to_string(),
        }
    }
}

/// Default section catalog, in floor plan order
pub fn default_sections() -> Vec<RestaurantSection> {
    TableArea::ALL.into_iter().map(RestaurantSection::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sections_follow_area_order() {
        let sections = default_sections();
        let names: Vec<_> = sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            ["Window", "Main Dining", "Bar Area", "Patio", "Private Room"]
        );
        assert_eq!(sections[4].area, TableArea::Private);
        assert!(sections.iter().all(|s| !s.description.is_empty()));
    }
}
