//! Core types and traits of the booking form

pub mod booking;
pub mod clock;
pub mod error;
pub mod notification;
pub mod reference;
pub mod repository;
pub mod validation;

pub use booking::{Booking, BookingFormData, BookingStatus, NewBooking, SubmittedBooking};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{BookingError, ConfigError, StorageError, SubmissionError, ValidationError};
pub use notification::{Notification, NotificationSink, NotificationVariant, ToastBus};
pub use reference::BookingReference;
pub use repository::BookingRepository;
pub use validation::{ValidatedBooking, validate_booking};
