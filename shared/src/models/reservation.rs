//! Reservation Model
//!
//! Guest details and the finalized reservation record (预订).

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::dining_table::DiningTable;

/// Optional occasion attached to a reservation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SpecialOccasion {
    Birthday,
    Anniversary,
    #[serde(rename = "date")]
    DateNight,
    Business,
    Graduation,
    Other,
}

impl SpecialOccasion {
    pub const ALL: [SpecialOccasion; 6] = [
        SpecialOccasion::Birthday,
        SpecialOccasion::Anniversary,
        SpecialOccasion::DateNight,
        SpecialOccasion::Business,
        SpecialOccasion::Graduation,
        SpecialOccasion::Other,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SpecialOccasion::Birthday => "birthday",
            SpecialOccasion::Anniversary => "anniversary",
            SpecialOccasion::DateNight => "date",
            SpecialOccasion::Business => "business",
            SpecialOccasion::Graduation => "graduation",
            SpecialOccasion::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SpecialOccasion::Birthday => "Birthday",
            SpecialOccasion::Anniversary => "Anniversary",
            SpecialOccasion::DateNight => "Date Night",
            SpecialOccasion::Business => "Business Meal",
            SpecialOccasion::Graduation => "Graduation",
            SpecialOccasion::Other => "Other Special Occasion",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.id() == id)
    }
}

/// Guest contact details
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: String,
}

/// Partial update payload for [`CustomerInfo`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfoUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub special_requests: Option<String>,
}

impl CustomerInfoUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn special_requests(mut self, requests: impl Into<String>) -> Self {
        self.special_requests = Some(requests.into());
        self
    }
}

impl CustomerInfo {
    /// Merge the provided fields, leaving the others untouched
    pub fn apply(&mut self, update: CustomerInfoUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(requests) = update.special_requests {
            self.special_requests = requests;
        }
    }
}

/// Finalized reservation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Confirmation identifier shown to the guest (e.g. "RS-...")
    pub confirmation_id: String,
    pub date: NaiveDate,
    /// Slot label as displayed ("7:00 PM")
    pub time: String,
    pub instant: NaiveDateTime,
    pub table: DiningTable,
    pub party_size: i32,
    pub special_occasion: Option<SpecialOccasion>,
    pub customer: CustomerInfo,
    /// Unix millis
    pub created_at: i64,
}
