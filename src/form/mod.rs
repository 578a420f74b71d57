//! The booking form controller and its submission handler
//!
//! [`BookingForm`] owns the field values, validates them on submit, inserts
//! the booking through a [`BookingRepository`] and reports the outcome
//! through a [`NotificationSink`] and the caller's `on_submit` callback.
//!
//! ```text
//! update() ──▶ handle_submit() ──▶ validate ──▶ submit() ──▶ repository.insert()
//!                                    │                         ├─ ok:  on_submit + reset + toast
//!                                    └─ field errors            └─ err: toast only
//! ```

pub mod state;

use crate::core::booking::{BookingFormData, NewBooking, SubmittedBooking};
use crate::core::clock::{Clock, SystemClock};
use crate::core::error::{BookingError, GENERIC_FAILURE_MESSAGE, SubmissionError};
use crate::core::notification::{Notification, NotificationSink};
use crate::core::reference::BookingReference;
use crate::core::repository::BookingRepository;
use crate::core::validation::{ValidatedBooking, validate_booking};
use state::{BusyGuard, FormState, lock};
use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};

pub use state::FormPhase;

pub const SUCCESS_TITLE: &str = "Booking Submitted";
pub const ERROR_TITLE: &str = "Error";

/// Headless booking form
pub struct BookingForm<R, N> {
    repository: R,
    notifier: N,
    clock: Arc<dyn Clock>,
    state: Mutex<FormState>,
}

impl<R, N> BookingForm<R, N>
where
    R: BookingRepository,
    N: NotificationSink,
{
    /// Create a form using the system clock
    pub fn new(repository: R, notifier: N) -> Self {
        Self::with_clock(repository, notifier, Arc::new(SystemClock))
    }

    pub fn with_clock(repository: R, notifier: N, clock: Arc<dyn Clock>) -> Self {
        let values = BookingFormData::defaults(clock.today());
        Self {
            repository,
            notifier,
            clock,
            state: Mutex::new(FormState {
                values,
                phase: FormPhase::Editing,
            }),
        }
    }

    /// Snapshot of the current field values
    pub fn values(&self) -> BookingFormData {
        lock(&self.state).values.clone()
    }

    pub fn phase(&self) -> FormPhase {
        lock(&self.state).phase.clone()
    }

    /// Whether a submission is in flight; the submit control is disabled while true
    pub fn is_submitting(&self) -> bool {
        lock(&self.state).phase.is_submitting()
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Edit field values.
    ///
    /// Refused while a submission is in flight. Editing after a finished
    /// submission returns the form to `Editing`.
    pub fn update<F>(&self, edit: F) -> Result<(), BookingError>
    where
        F: FnOnce(&mut BookingFormData),
    {
        let mut state = lock(&self.state);
        if state.phase.is_submitting() {
            return Err(SubmissionError::InFlight.into());
        }
        edit(&mut state.values);
        state.phase = FormPhase::Editing;
        Ok(())
    }

    /// Restore default values (today / tomorrow are recomputed)
    pub fn reset(&self) -> Result<(), BookingError> {
        let defaults = BookingFormData::defaults(self.clock.today());
        self.update(|values| *values = defaults)
    }

    /// Run the schema against the current values without submitting
    pub fn validate(&self) -> Result<ValidatedBooking, BookingError> {
        Ok(validate_booking(&self.values())?)
    }

    /// Validate the current values and submit them.
    ///
    /// A validation failure leaves the form untouched: no insert, no toast.
    pub async fn handle_submit<F>(&self, on_submit: F) -> Result<SubmittedBooking, BookingError>
    where
        F: FnOnce(SubmittedBooking) -> anyhow::Result<()>,
    {
        if self.is_submitting() {
            warn!("booking submission ignored, another one is in flight");
            return Err(SubmissionError::InFlight.into());
        }

        let validated = match validate_booking(&self.values()) {
            Ok(validated) => validated,
            Err(e) => {
                warn!(error = %e, "booking form rejected by validation");
                return Err(e.into());
            }
        };

        self.submit(validated, on_submit).await
    }

    /// Persist a validated booking.
    ///
    /// On success `on_submit` is called exactly once with the submitted values
    /// plus the booking reference and row id, the form is reset and a success
    /// toast is shown. On failure the values are kept and a destructive toast
    /// with a generic message is shown. The busy flag is cleared on every path.
    pub async fn submit<F>(
        &self,
        booking: ValidatedBooking,
        on_submit: F,
    ) -> Result<SubmittedBooking, BookingError>
    where
        F: FnOnce(SubmittedBooking) -> anyhow::Result<()>,
    {
        let Some(busy) = BusyGuard::acquire(&self.state) else {
            warn!("booking submission ignored, another one is in flight");
            return Err(SubmissionError::InFlight.into());
        };

        let reference = BookingReference::generate(self.clock.now());
        info!(booking_reference = %reference, "submitting booking");

        let record = NewBooking::new(&booking, reference.clone());
        let outcome = match self.repository.insert(record).await {
            Ok(row) => {
                let submitted = SubmittedBooking {
                    values: booking.into_values(),
                    booking_reference: reference.to_string(),
                    booking_id: row.id,
                };
                on_submit(submitted.clone())
                    .map(|()| submitted)
                    .map_err(|e| SubmissionError::Callback {
                        message: format!("{:#}", e),
                    })
            }
            Err(e) => Err(SubmissionError::Database(e)),
        };

        match outcome {
            Ok(submitted) => {
                info!(
                    booking_reference = %reference,
                    booking_id = submitted.booking_id,
                    "booking submitted"
                );
                let defaults = BookingFormData::defaults(self.clock.today());
                self.notifier.notify(Notification::new(
                    SUCCESS_TITLE,
                    format!("Your booking reference is {}", reference),
                ));
                busy.finish(
                    FormPhase::Succeeded {
                        booking_reference: reference,
                    },
                    |state| state.values = defaults,
                );
                Ok(submitted)
            }
            Err(e) => {
                error!(booking_reference = %reference, error = %e, "booking error");
                self.notifier
                    .notify(Notification::destructive(ERROR_TITLE, GENERIC_FAILURE_MESSAGE));
                busy.finish(
                    FormPhase::Failed {
                        reason: e.to_string(),
                    },
                    |_| {},
                );
                Err(e.into())
            }
        }
    }
}
