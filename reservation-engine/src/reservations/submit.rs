//! 预订提交
//!
//! Simulated network submission: validate, wait, then finalize. The wait can
//! be cancelled (guest navigates away), in which case nothing changes.

use std::time::Duration;

use shared::models::Reservation;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::wizard::ReservationWizard;
use crate::core::error::{ReservationError, Result};

/// One pending submission
#[derive(Debug, Clone)]
pub struct Submission {
    delay: Duration,
    cancel: CancellationToken,
}

impl Submission {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            cancel: CancellationToken::new(),
        }
    }

    /// Uses the environment's configured delay
    pub fn for_wizard(wizard: &ReservationWizard) -> Self {
        Self::new(wizard.environment().submit_delay)
    }

    /// Token that aborts the wait when cancelled
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Submit the wizard's reservation
    ///
    /// Returns `Ok(None)` without waiting when the final validation fails.
    /// `on_confirmed` runs exactly once, only after a successful completion.
    pub async fn run<F>(
        &self,
        wizard: &mut ReservationWizard,
        on_confirmed: F,
    ) -> Result<Option<Reservation>>
    where
        F: FnOnce(&Reservation),
    {
        if !wizard.check_ready()? {
            return Ok(None);
        }

        debug!(delay_ms = self.delay.as_millis() as u64, "Submitting reservation");

        tokio::select! {
            _ = tokio::time::sleep(self.delay) => {}
            _ = self.cancel.cancelled() => {
                warn!("Reservation submission cancelled");
                return Err(ReservationError::SubmissionCancelled);
            }
        }

        let reservation = wizard.complete()?;
        if let Some(reservation) = &reservation {
            info!(confirmation_id = %reservation.confirmation_id, "Reservation submitted");
            on_confirmed(reservation);
        }
        Ok(reservation)
    }
}
