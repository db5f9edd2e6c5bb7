//! Unified error codes for the reservation engine
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors (field validation)
//! - 7xxx: Table and reservation errors
//! - 9xxx: System errors (configuration, availability backend)
//!
//! # Example
//!
//! ```
//! use shared::error::{ErrorCategory, ErrorCode};
//!
//! let code = ErrorCode::TimeSlotUnavailable;
//! assert_eq!(code.code(), 7503);
//! assert_eq!(code.category(), ErrorCategory::Table);
//! ```

mod category;
mod codes;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
