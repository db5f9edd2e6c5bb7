//! Unified error codes for the reservation engine
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 7xxx: Table and reservation errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so hosts in any language can
/// match on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 7xxx: Table ====================
    /// Table not found in the resolved floor plan
    TableNotFound = 7001,
    /// Table is not available at the selected time
    TableUnavailable = 7002,
    /// Table has fewer seats than the party size
    TableTooSmall = 7003,

    // ==================== 75xx: Reservation ====================
    /// No date selected yet
    DateNotSelected = 7501,
    /// No time selected yet
    TimeNotSelected = 7502,
    /// Requested time is not an open slot for the selected date
    TimeSlotUnavailable = 7503,
    /// Reservation is not on the confirmation step
    ReservationIncomplete = 7504,
    /// Reservation was already confirmed
    ReservationAlreadyCompleted = 7505,
    /// Submission was cancelled before confirmation
    SubmissionCancelled = 7506,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Availability backend could not be reached
    NetworkError = 9003,
    /// Configuration error
    ConfigError = 9005,
    /// Availability backend answered with an error
    AvailabilityCheckFailed = 9006,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableUnavailable => "Table is not available at this time",
            ErrorCode::TableTooSmall => "Table is too small for the party",

            // Reservation
            ErrorCode::DateNotSelected => "No date selected",
            ErrorCode::TimeNotSelected => "No time selected",
            ErrorCode::TimeSlotUnavailable => "Time slot is not available",
            ErrorCode::ReservationIncomplete => "Reservation is not ready to be confirmed",
            ErrorCode::ReservationAlreadyCompleted => "Reservation is already confirmed",
            ErrorCode::SubmissionCancelled => "Reservation submission was cancelled",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::NetworkError => "Could not check availability",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::AvailabilityCheckFailed => "Availability check failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::TableUnavailable),
            7003 => Ok(ErrorCode::TableTooSmall),

            // Reservation
            7501 => Ok(ErrorCode::DateNotSelected),
            7502 => Ok(ErrorCode::TimeNotSelected),
            7503 => Ok(ErrorCode::TimeSlotUnavailable),
            7504 => Ok(ErrorCode::ReservationIncomplete),
            7505 => Ok(ErrorCode::ReservationAlreadyCompleted),
            7506 => Ok(ErrorCode::SubmissionCancelled),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9003 => Ok(ErrorCode::NetworkError),
            9005 => Ok(ErrorCode::ConfigError),
            9006 => Ok(ErrorCode::AvailabilityCheckFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
