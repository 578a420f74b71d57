//! Shared test harness for booking form and repository testing
//!
//! Provides fixtures (`new_booking`, `filled_values`), a scriptable
//! `ScriptedRepository`, a `RecordingNotifier` and the
//! `booking_repository_tests!` contract suite.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod repository_tests;

use async_trait::async_trait;
use booking::prelude::*;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Epoch millis whose last six digits are `123456`
pub const FIXED_MILLIS: i64 = 1_760_000_123_456;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::at_millis(FIXED_MILLIS))
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Values that pass every schema rule
pub fn filled_values() -> BookingFormData {
    BookingFormData {
        name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        phone: "+1 555 123 4567".to_string(),
        adults: "2".to_string(),
        children: "1".to_string(),
        check_in_date: date(2026, 11, 1),
        check_out_date: date(2026, 11, 4),
    }
}

/// Insert payload with a reference derived from `millis`
pub fn new_booking(millis: i64) -> NewBooking {
    NewBooking {
        booking_reference: BookingReference::from_millis(millis),
        name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        phone: "+1 555 123 4567".to_string(),
        adults: 2,
        children: 1,
        check_in_date: date(2026, 11, 1),
        check_out_date: date(2026, 11, 4),
        status: BookingStatus::Pending,
    }
}

// ---------------------------------------------------------------------------
// ScriptedRepository
// ---------------------------------------------------------------------------

/// Repository returning a fixed outcome and recording every insert.
///
/// When gated, `insert` signals `entered` and then waits on `release`,
/// which lets a test observe the form mid-request.
pub struct ScriptedRepository {
    outcome: Result<i64, StorageError>,
    inserts: Mutex<Vec<NewBooking>>,
    gate: Option<Gate>,
}

#[derive(Clone, Default)]
pub struct Gate {
    pub entered: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl ScriptedRepository {
    pub fn succeeding(id: i64) -> Self {
        Self {
            outcome: Ok(id),
            inserts: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(StorageError::Backend {
                message: message.to_string(),
                code: None,
            }),
            inserts: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn gated(mut self, gate: Gate) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn inserts(&self) -> Vec<NewBooking> {
        self.inserts.lock().unwrap().clone()
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.lock().unwrap().len()
    }
}

#[async_trait]
impl BookingRepository for ScriptedRepository {
    async fn insert(&self, record: NewBooking) -> Result<Booking, StorageError> {
        self.inserts.lock().unwrap().push(record.clone());

        if let Some(gate) = &self.gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }

        match &self.outcome {
            Ok(id) => Ok(Booking::from_new(*id, record, None)),
            Err(e) => Err(e.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// RecordingNotifier
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Notification> {
        self.toasts.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.toasts.lock().unwrap().last().cloned()
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.toasts.lock().unwrap().push(notification);
    }
}
