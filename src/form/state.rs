//! Form phase and the busy guard

use crate::core::booking::BookingFormData;
use crate::core::reference::BookingReference;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Where the form is in its lifecycle.
///
/// The busy flag shown on the submit control is
/// [`is_submitting`](FormPhase::is_submitting).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded {
        booking_reference: BookingReference,
    },
    Failed {
        reason: String,
    },
}

impl FormPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormPhase::Submitting)
    }
}

#[derive(Debug)]
pub(crate) struct FormState {
    pub values: BookingFormData,
    pub phase: FormPhase,
}

pub(crate) fn lock(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Holds the form in [`FormPhase::Submitting`].
///
/// Dropping the guard without [`finish`](BusyGuard::finish), for example when
/// the submit future is dropped mid-request, puts the form back into
/// `Editing` so the submit control is re-enabled.
pub(crate) struct BusyGuard<'a> {
    state: &'a Mutex<FormState>,
    armed: bool,
}

impl<'a> BusyGuard<'a> {
    /// Enter the submitting phase, or `None` if a submission is already running
    pub fn acquire(state: &'a Mutex<FormState>) -> Option<Self> {
        let mut guard = lock(state);
        if guard.phase.is_submitting() {
            return None;
        }
        guard.phase = FormPhase::Submitting;
        Some(Self { state, armed: true })
    }

    /// Leave the submitting phase, applying `apply` under the same lock
    pub fn finish<F>(mut self, phase: FormPhase, apply: F)
    where
        F: FnOnce(&mut FormState),
    {
        let mut guard = lock(self.state);
        apply(&mut guard);
        guard.phase = phase;
        self.armed = false;
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            let mut guard = lock(self.state);
            if guard.phase.is_submitting() {
                guard.phase = FormPhase::Editing;
            }
        }
    }
}
