use chrono::NaiveTime;
use shared::error::ErrorCode;
use shared::models::DayCategory;
use thiserror::Error;

/// Configuration errors
///
/// Raised at the boundary where configuration is consumed so that a bad
/// business-hours entry never looks like a fully booked day.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("slot interval for {category} must be positive, got {interval_minutes}")]
    NonPositiveInterval {
        category: DayCategory,
        interval_minutes: i64,
    },

    #[error("slot interval for {category} is {interval_minutes} minutes, max {max_minutes}")]
    IntervalTooLong {
        category: DayCategory,
        interval_minutes: i64,
        max_minutes: i64,
    },

    #[error("opening time {open} is not before closing time {close} for {category}")]
    EmptyServiceWindow {
        category: DayCategory,
        open: NaiveTime,
        close: NaiveTime,
    },

    #[error("unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("failed to load {path}: {reason}")]
    Load { path: String, reason: String },

    #[error("invalid floor plan: {0}")]
    InvalidFloorPlan(String),
}

/// Availability backend errors
///
/// Distinct from "not available": the caller can retry or tell the guest that
/// availability could not be checked.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OracleError {
    #[error("availability backend unreachable: {0}")]
    Unreachable(String),

    #[error("availability check failed: {0}")]
    Failed(String),
}

/// Reservation errors
///
/// Field validation failures are NOT represented here; they are reported
/// through the wizard's field error map.
#[derive(Debug, Error)]
pub enum ReservationError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("no date selected")]
    DateNotSelected,

    #[error("no time selected")]
    TimeNotSelected,

    #[error("time slot not available: {0}")]
    TimeSlotUnavailable(String),

    #[error("table not found: {0}")]
    TableNotFound(i64),

    #[error("table {0} is not available at the selected time")]
    TableUnavailable(i64),

    #[error("table {table_id} seats {seats}, party of {party_size}")]
    TableTooSmall {
        table_id: i64,
        seats: i32,
        party_size: i32,
    },

    #[error("reservation can only be confirmed from step 4 (current step {0})")]
    NotOnConfirmStep(u8),

    #[error("reservation already confirmed")]
    AlreadyCompleted,

    #[error("reservation submission cancelled")]
    SubmissionCancelled,
}

impl ReservationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ReservationError::Config(_) => ErrorCode::ConfigError,
            ReservationError::Oracle(OracleError::Unreachable(_)) => ErrorCode::NetworkError,
            ReservationError::Oracle(OracleError::Failed(_)) => {
                ErrorCode::AvailabilityCheckFailed
            }
            ReservationError::DateNotSelected => ErrorCode::DateNotSelected,
            ReservationError::TimeNotSelected => ErrorCode::TimeNotSelected,
            ReservationError::TimeSlotUnavailable(_) => ErrorCode::TimeSlotUnavailable,
            ReservationError::TableNotFound(_) => ErrorCode::TableNotFound,
            ReservationError::TableUnavailable(_) => ErrorCode::TableUnavailable,
            ReservationError::TableTooSmall { .. } => ErrorCode::TableTooSmall,
            ReservationError::NotOnConfirmStep(_) => ErrorCode::ReservationIncomplete,
            ReservationError::AlreadyCompleted => ErrorCode::ReservationAlreadyCompleted,
            ReservationError::SubmissionCancelled => ErrorCode::SubmissionCancelled,
        }
    }

    /// Whether retrying the same call may succeed (backend hiccup)
    pub fn is_retryable(&self) -> bool {
        matches!(self, ReservationError::Oracle(_))
    }
}

/// Result type alias for reservation operations
pub type Result<T> = std::result::Result<T, ReservationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_errors_are_retryable() {
        let err: ReservationError = OracleError::Unreachable("timeout".into()).into();
        assert!(err.is_retryable());
        assert_eq!(err.code(), ErrorCode::NetworkError);

        let err: ReservationError = OracleError::Failed("500".into()).into();
        assert_eq!(err.code(), ErrorCode::AvailabilityCheckFailed);
    }

    #[test]
    fn test_config_error_is_not_retryable() {
        let err: ReservationError = ConfigError::NonPositiveInterval {
            category: DayCategory::Sunday,
            interval_minutes: 0,
        }
        .into();
        assert!(!err.is_retryable());
        assert_eq!(err.code(), ErrorCode::ConfigError);
        assert!(err.to_string().contains("sunday"));
    }
}
