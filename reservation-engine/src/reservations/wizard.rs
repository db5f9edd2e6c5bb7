//! Reservation wizard (预订向导)
//!
//! Four linear steps: date & time, table, guest info, confirmation. Moving
//! forward is gated by step validation; moving back never is. Completion is
//! terminal until [`ReservationWizard::reset`].
//!
//! # 派生状态
//!
//! - 选择日期: 重新生成时段，清空时间、桌台
//! - 选择时间: 重新解析桌台，清空桌台
//! - 修改人数: 只刷新 suitable，不重新查询可用性

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use shared::error::ErrorCode;
use shared::models::{
    CustomerInfo, CustomerInfoUpdate, DiningTable, Reservation, SpecialOccasion,
};
use shared::util::{confirmation_number, now_millis};
use tracing::{debug, info, warn};

use super::availability::{
    AvailabilitySummary, TableAvailability, refresh_suitability, resolve_availability,
};
use super::calendar::{CalendarDay, upcoming_days};
use super::time_slots::{SlotGroup, TimeSlot, generate_time_slots, group_by_period};
use super::validation::{self, FieldError, FieldErrors, field};
use crate::core::error::{ReservationError, Result};
use crate::core::state::BookingEnvironment;

const CONFIRMATION_PREFIX: &str = "RS";

/// Wizard step, numbered from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum WizardStep {
    DateTime = 1,
    TableSelect = 2,
    GuestInfo = 3,
    Confirm = 4,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn next(self) -> Self {
        match self {
            WizardStep::DateTime => WizardStep::TableSelect,
            WizardStep::TableSelect => WizardStep::GuestInfo,
            WizardStep::GuestInfo | WizardStep::Confirm => WizardStep::Confirm,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            WizardStep::DateTime | WizardStep::TableSelect => WizardStep::DateTime,
            WizardStep::GuestInfo => WizardStep::TableSelect,
            WizardStep::Confirm => WizardStep::GuestInfo,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::DateTime => "Date & Time",
            WizardStep::TableSelect => "Select Table",
            WizardStep::GuestInfo => "Guest Information",
            WizardStep::Confirm => "Confirm",
        }
    }
}

/// Mutable wizard state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    pub selected_date: Option<NaiveDate>,
    /// Slot label ("7:00 PM")
    pub selected_time: Option<String>,
    pub selected_table: Option<DiningTable>,
    pub party_size: i32,
    pub special_occasion: Option<SpecialOccasion>,
    pub customer_info: CustomerInfo,
    pub current_step: WizardStep,
    pub complete: bool,
    pub confirmation_id: Option<String>,
}

impl Default for ReservationDraft {
    fn default() -> Self {
        Self {
            selected_date: None,
            selected_time: None,
            selected_table: None,
            party_size: 2,
            special_occasion: None,
            customer_info: CustomerInfo::default(),
            current_step: WizardStep::DateTime,
            complete: false,
            confirmation_id: None,
        }
    }
}

/// One reservation session
///
/// Owns the draft plus the state derived from it: the slots of the selected
/// date, the tables resolved for the selected time and the current field
/// errors.
#[derive(Debug, Clone)]
pub struct ReservationWizard {
    env: BookingEnvironment,
    draft: ReservationDraft,
    slots: Vec<TimeSlot>,
    tables: Vec<TableAvailability>,
    errors: FieldErrors,
}

impl ReservationWizard {
    pub fn new(env: BookingEnvironment) -> Self {
        Self {
            env,
            draft: ReservationDraft::default(),
            slots: Vec::new(),
            tables: Vec::new(),
            errors: FieldErrors::new(),
        }
    }

    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    pub fn current_step(&self) -> WizardStep {
        self.draft.current_step
    }

    pub fn is_complete(&self) -> bool {
        self.draft.complete
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn environment(&self) -> &BookingEnvironment {
        &self.env
    }

    /// Selectable dates starting today
    pub fn calendar(&self) -> Vec<CalendarDay> {
        upcoming_days(self.env.clock.as_ref(), self.env.calendar_days)
    }

    /// Slots of the selected date (empty until a date is chosen)
    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn slot_groups(&self) -> Vec<SlotGroup> {
        group_by_period(&self.slots)
    }

    /// Tables resolved for the selected time (empty until a time is chosen)
    pub fn tables(&self) -> &[TableAvailability] {
        &self.tables
    }

    pub fn availability_summary(&self) -> AvailabilitySummary {
        AvailabilitySummary::of(&self.tables)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.draft.complete {
            warn!(
                confirmation_id = ?self.draft.confirmation_id,
                "Rejected action on completed reservation"
            );
            return Err(ReservationError::AlreadyCompleted);
        }
        Ok(())
    }

    /// Select a date; clears time, table and resolved tables
    ///
    /// Slots are generated before anything changes, so a failure leaves the
    /// draft as it was.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<()> {
        self.ensure_open()?;

        let slots = generate_time_slots(
            date,
            &self.env.business_hours,
            self.env.clock.now(),
            self.env.slot_oracle.as_ref(),
        )?;

        self.draft.selected_date = Some(date);
        self.draft.selected_time = None;
        self.draft.selected_table = None;
        self.slots = slots;
        self.tables.clear();
        self.errors.remove(field::DATE);

        info!(date = %date, slots = self.slots.len(), "Date selected");
        Ok(())
    }

    /// Select one of the offered, available slots; clears the table
    pub fn select_time(&mut self, time: &str) -> Result<()> {
        self.ensure_open()?;

        if self.draft.selected_date.is_none() {
            warn!(time = %time, "Time selected before date");
            return Err(ReservationError::DateNotSelected);
        }
        if !self.slots.iter().any(|s| s.available && s.time == time) {
            warn!(time = %time, "Time slot not offered");
            return Err(ReservationError::TimeSlotUnavailable(time.to_string()));
        }

        let tables = resolve_availability(
            &self.env.tables,
            time,
            self.draft.party_size,
            self.env.table_oracle.as_ref(),
        )?;

        self.draft.selected_time = Some(time.to_string());
        self.draft.selected_table = None;
        self.tables = tables;
        self.errors.remove(field::TIME);

        info!(
            time = %time,
            suitable = self.availability_summary().suitable,
            "Time selected"
        );
        Ok(())
    }

    /// Select a resolved, suitable table
    pub fn select_table(&mut self, table_id: i64) -> Result<()> {
        self.ensure_open()?;

        if self.draft.selected_time.is_none() {
            warn!(table_id, "Table selected before time");
            return Err(ReservationError::TimeNotSelected);
        }
        let entry = self
            .tables
            .iter()
            .find(|e| e.table.id == table_id)
            .ok_or(ReservationError::TableNotFound(table_id))?;

        if !entry.available {
            warn!(table_id, "Table not available");
            return Err(ReservationError::TableUnavailable(table_id));
        }
        if !entry.suitable {
            warn!(
                table_id,
                seats = entry.table.seats,
                party_size = self.draft.party_size,
                "Table too small"
            );
            return Err(ReservationError::TableTooSmall {
                table_id,
                seats: entry.table.seats,
                party_size: self.draft.party_size,
            });
        }

        info!(table_id, table = %entry.table.name, "Table selected");
        self.draft.selected_table = Some(entry.table.clone());
        self.errors.remove(field::TABLE);
        Ok(())
    }

    /// Change the party size
    ///
    /// Out of range values (`< 1` or above the configured maximum) are
    /// ignored. Returns whether the size changed.
    pub fn set_party_size(&mut self, party_size: i32) -> Result<bool> {
        self.ensure_open()?;

        if party_size < 1 || party_size > self.env.max_party_size {
            debug!(
                party_size,
                max = self.env.max_party_size,
                "Ignored out of range party size"
            );
            return Ok(false);
        }

        self.draft.party_size = party_size;
        refresh_suitability(&mut self.tables, party_size);
        self.errors.remove(field::PARTY_SIZE);

        let too_small = self
            .draft
            .selected_table
            .as_ref()
            .is_some_and(|t| !t.seats_party_of(party_size));
        if too_small {
            debug!(party_size, "Cleared table that no longer seats the party");
            self.draft.selected_table = None;
        }

        info!(party_size, "Party size changed");
        Ok(true)
    }

    pub fn set_special_occasion(&mut self, occasion: Option<SpecialOccasion>) -> Result<()> {
        self.ensure_open()?;
        self.draft.special_occasion = occasion;
        Ok(())
    }

    /// Merge guest details; validation waits for [`advance`](Self::advance)
    pub fn update_customer_info(&mut self, update: CustomerInfoUpdate) -> Result<()> {
        self.ensure_open()?;

        if update.name.is_some() {
            self.errors.remove(field::NAME);
        }
        if update.email.is_some() {
            self.errors.remove(field::EMAIL);
        }
        if update.phone.is_some() {
            self.errors.remove(field::PHONE);
        }
        if update.special_requests.is_some() {
            self.errors.remove(field::SPECIAL_REQUESTS);
        }
        self.draft.customer_info.apply(update);
        Ok(())
    }

    fn gate(&self, step: WizardStep) -> FieldErrors {
        match step {
            WizardStep::DateTime => {
                validation::validate_date_time(&self.draft, self.env.max_party_size)
            }
            WizardStep::TableSelect => validation::validate_table(&self.draft),
            WizardStep::GuestInfo => validation::validate_guest_info(&self.draft.customer_info),
            WizardStep::Confirm => FieldErrors::new(),
        }
    }

    /// Validate the current step and move forward
    ///
    /// Returns `Ok(false)` when validation fails (see [`errors`](Self::errors))
    /// or when already on the confirmation step.
    pub fn advance(&mut self) -> Result<bool> {
        self.ensure_open()?;

        let step = self.draft.current_step;
        let errors = self.gate(step);
        if !errors.is_empty() {
            warn!(
                step = step.number(),
                fields = ?errors.fields().collect::<Vec<_>>(),
                "Step validation failed"
            );
            self.errors = errors;
            return Ok(false);
        }

        self.errors.clear();
        if step == WizardStep::Confirm {
            return Ok(false);
        }

        self.draft.current_step = step.next();
        info!(
            from = step.number(),
            to = self.draft.current_step.number(),
            "Advanced step"
        );
        Ok(true)
    }

    /// Move back one step without validation
    pub fn retreat(&mut self) -> Result<()> {
        self.ensure_open()?;
        let step = self.draft.current_step;
        self.draft.current_step = step.prev();
        debug!(from = step.number(), to = self.draft.current_step.number(), "Went back");
        Ok(())
    }

    /// Whether [`complete`](Self::complete) would succeed right now
    ///
    /// Populates the error map with every failing field of steps 1 to 3.
    pub fn check_ready(&mut self) -> Result<bool> {
        self.ensure_open()?;

        if self.draft.current_step != WizardStep::Confirm {
            return Err(ReservationError::NotOnConfirmStep(
                self.draft.current_step.number(),
            ));
        }

        let mut errors = FieldErrors::new();
        for step in [
            WizardStep::DateTime,
            WizardStep::TableSelect,
            WizardStep::GuestInfo,
        ] {
            errors.extend(self.gate(step));
        }

        // slots are filtered against "now" only when the date is picked
        let now = self.env.clock.now();
        if !errors.contains(field::TIME) && self.selected_instant().is_some_and(|i| i <= now) {
            errors.insert(
                field::TIME,
                FieldError::new(
                    ErrorCode::TimeSlotUnavailable,
                    "This time has already passed, please select another time",
                ),
            );
        }

        if errors.is_empty() {
            self.errors.clear();
            Ok(true)
        } else {
            warn!(
                fields = ?errors.fields().collect::<Vec<_>>(),
                "Reservation not ready to confirm"
            );
            self.errors = errors;
            Ok(false)
        }
    }

    fn selected_instant(&self) -> Option<NaiveDateTime> {
        let time = self.draft.selected_time.as_deref()?;
        self.slots.iter().find(|s| s.time == time).map(|s| s.instant)
    }

    /// Finalize the reservation
    ///
    /// Returns `Ok(None)` when a gate fails on the final check.
    pub fn complete(&mut self) -> Result<Option<Reservation>> {
        if !self.check_ready()? {
            return Ok(None);
        }

        let (Some(date), Some(time), Some(table)) = (
            self.draft.selected_date,
            self.draft.selected_time.clone(),
            self.draft.selected_table.clone(),
        ) else {
            return Ok(None);
        };
        let instant = self
            .selected_instant()
            .ok_or_else(|| ReservationError::TimeSlotUnavailable(time.clone()))?;

        let confirmation_id = confirmation_number(CONFIRMATION_PREFIX);
        self.draft.complete = true;
        self.draft.confirmation_id = Some(confirmation_id.clone());

        info!(
            confirmation_id = %confirmation_id,
            date = %date,
            time = %time,
            table_id = table.id,
            party_size = self.draft.party_size,
            "Reservation confirmed"
        );

        Ok(Some(Reservation {
            confirmation_id,
            date,
            time,
            instant,
            table,
            party_size: self.draft.party_size,
            special_occasion: self.draft.special_occasion,
            customer: self.draft.customer_info.clone(),
            created_at: now_millis(),
        }))
    }

    /// Back to the initial state, from any step
    pub fn reset(&mut self) {
        debug!(step = self.draft.current_step.number(), "Wizard reset");
        self.draft = ReservationDraft::default();
        self.slots.clear();
        self.tables.clear();
        self.errors.clear();
    }
}
