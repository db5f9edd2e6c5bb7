//! Data models
//!
//! Shared between the reservation engine and its hosts.
//! All IDs are `i64`.

pub mod business_hours;
pub mod dining_table;
pub mod reservation;
pub mod zone;

// Re-exports
pub use business_hours::*;
pub use dining_table::*;
pub use reservation::*;
pub use zone::*;
