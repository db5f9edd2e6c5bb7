//! Step validation gates
//!
//! Each gate inspects the draft and reports field errors; none of them are
//! fatal. An empty [`FieldErrors`] means the gate passed.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use shared::error::ErrorCode;
use shared::models::CustomerInfo;

use super::wizard::ReservationDraft;

/// Loose `something@something.something` check
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid email regex"));

// ── Text length limits ──────────────────────────────────────────────

pub const MAX_NAME_LEN: usize = 200;

/// RFC 5321
pub const MAX_EMAIL_LEN: usize = 254;

pub const MAX_PHONE_LEN: usize = 100;

pub const MAX_SPECIAL_REQUESTS_LEN: usize = 500;

/// Field keys, as exposed to the presentation layer
pub mod field {
    pub const DATE: &str = "date";
    pub const TIME: &str = "time";
    pub const PARTY_SIZE: &str = "partySize";
    pub const TABLE: &str = "table";
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const SPECIAL_REQUESTS: &str = "specialRequests";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub code: ErrorCode,
    pub message: String,
}

impl FieldError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    fn required(message: &str) -> Self {
        Self::new(ErrorCode::RequiredField, message)
    }

    fn too_long(label: &str, len: usize, max_len: usize) -> Self {
        Self::new(
            ErrorCode::ValueOutOfRange,
            format!("{label} is too long ({len} chars, max {max_len})"),
        )
    }
}

/// Field errors keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    /// Message for a field, if it has an error
    pub fn message(&self, field: &str) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldError)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    pub fn extend(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[inline]
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Step 1: date, time and party size
pub fn validate_date_time(draft: &ReservationDraft, max_party_size: i32) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if draft.selected_date.is_none() {
        errors.insert(field::DATE, FieldError::required("Please select a date"));
    }
    if draft.selected_time.is_none() {
        errors.insert(field::TIME, FieldError::required("Please select a time"));
    }
    if !(1..=max_party_size).contains(&draft.party_size) {
        errors.insert(
            field::PARTY_SIZE,
            FieldError::new(ErrorCode::ValueOutOfRange, "Please enter a valid party size"),
        );
    }
    errors
}

/// Step 2: a table is selected
pub fn validate_table(draft: &ReservationDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if draft.selected_table.is_none() {
        errors.insert(field::TABLE, FieldError::required("Please select a table"));
    }
    errors
}

/// Step 3: guest contact details
pub fn validate_guest_info(info: &CustomerInfo) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if is_blank(&info.name) {
        errors.insert(field::NAME, FieldError::required("Please enter your name"));
    } else if info.name.len() > MAX_NAME_LEN {
        errors.insert(field::NAME, FieldError::too_long("Name", info.name.len(), MAX_NAME_LEN));
    }

    if is_blank(&info.email) {
        errors.insert(field::EMAIL, FieldError::required("Please enter your email"));
    } else if info.email.len() > MAX_EMAIL_LEN {
        errors.insert(
            field::EMAIL,
            FieldError::too_long("Email", info.email.len(), MAX_EMAIL_LEN),
        );
    } else if !is_valid_email(&info.email) {
        errors.insert(
            field::EMAIL,
            FieldError::new(ErrorCode::InvalidFormat, "Please enter a valid email address"),
        );
    }

    if is_blank(&info.phone) {
        errors.insert(field::PHONE, FieldError::required("Please enter your phone number"));
    } else if info.phone.len() > MAX_PHONE_LEN {
        errors.insert(
            field::PHONE,
            FieldError::too_long("Phone number", info.phone.len(), MAX_PHONE_LEN),
        );
    }

    // optional
    if info.special_requests.len() > MAX_SPECIAL_REQUESTS_LEN {
        errors.insert(
            field::SPECIAL_REQUESTS,
            FieldError::too_long(
                "Special requests",
                info.special_requests.len(),
                MAX_SPECIAL_REQUESTS_LEN,
            ),
        );
    }

    errors
}
