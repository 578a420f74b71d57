//! # Booking Form
//!
//! A headless booking form: it collects guest details, validates them, stores
//! a new booking through a pluggable repository and reports the outcome to the
//! parent view and the user.
//!
//! ## Features
//!
//! - **Schema validation**: field rules via `validator`, plus stay date checks
//! - **Booking references**: `BK` + six digits, shown to the guest
//! - **Pluggable storage**: in-memory, hosted REST (`rest`) or PostgreSQL (`postgres`)
//! - **Toasts**: success and error notifications over a broadcast channel
//! - **Busy flag**: one submission in flight per form
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use booking::prelude::*;
//!
//! let toasts = ToastBus::new(16);
//! let form = BookingForm::new(InMemoryBookingRepository::new(), toasts.clone());
//!
//! form.update(|v| {
//!     v.name = "Ada Lovelace".into();
//!     v.email = "ada@example.com".into();
//!     v.phone = "+44 20 7946 0958".into();
//! })?;
//!
//! let booking = form
//!     .handle_submit(|submitted| {
//!         println!("stored as #{}", submitted.booking_id);
//!         Ok(())
//!     })
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod form;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        booking::{Booking, BookingFormData, BookingStatus, NewBooking, SubmittedBooking},
        clock::{Clock, FixedClock, SystemClock},
        error::{
            BookingError, ConfigError, FieldValidationError, StorageError, SubmissionError,
            ValidationError,
        },
        notification::{
            Notification, NotificationSink, NotificationVariant, ToastBus, ToastEnvelope,
            TracingNotifier,
        },
        reference::BookingReference,
        repository::BookingRepository,
        validation::{ValidatedBooking, validate_booking},
    };

    // === Form ===
    pub use crate::form::{BookingForm, FormPhase};

    // === Storage ===
    pub use crate::storage::InMemoryBookingRepository;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresBookingRepository;
    #[cfg(feature = "rest")]
    pub use crate::storage::RestBookingRepository;

    // === Config ===
    pub use crate::config::{BackendConfig, BookingConfig};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
}
