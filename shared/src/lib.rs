//! Shared types for the reservation engine
//!
//! Domain models (tables, areas, business hours, guest details, reservations),
//! unified error codes and id helpers used by the engine and its hosts.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ErrorCategory, ErrorCode};
pub use models::{
    BusinessHours, CustomerInfo, CustomerInfoUpdate, DayCategory, DiningTable, OpeningHours,
    Reservation, SpecialOccasion, TableArea, TableShape,
};
