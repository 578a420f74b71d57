//! Typed error handling for the booking form
//!
//! Callers can match on the specific failure instead of a generic
//! `anyhow::Error`.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: the form values were rejected by the schema
//! - [`StorageError`]: the booking repository failed to insert the row
//! - [`SubmissionError`]: the submission itself failed (in flight, database, callback)
//! - [`ConfigError`]: configuration could not be loaded
//!
//! # Example
//!
//! ```rust,ignore
//! match form.handle_submit(|_| Ok(())).await {
//!     Ok(booking) => println!("Booked {}", booking.booking_reference),
//!     Err(BookingError::Validation(e)) => render_field_errors(e.errors()),
//!     Err(e) => show_toast(e.user_message()),
//! }
//! ```

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Generic text shown to the guest for every failure that is not a
/// validation problem. Backend details never reach the user.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "There was a problem processing your booking. Please try again.";

/// The main error type of the crate
#[derive(Debug)]
pub enum BookingError {
    /// Form values failed schema validation
    Validation(ValidationError),

    /// The submission failed after validation
    Submission(SubmissionError),

    /// Configuration errors
    Config(ConfigError),
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingError::Validation(e) => write!(f, "{}", e),
            BookingError::Submission(e) => write!(f, "{}", e),
            BookingError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for BookingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BookingError::Validation(e) => Some(e),
            BookingError::Submission(e) => Some(e),
            BookingError::Config(e) => Some(e),
        }
    }
}

/// Error payload a UI layer can render or serialize
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Message safe to show to the guest
    pub message: String,
    /// Field level details, only for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl BookingError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            BookingError::Validation(_) => "VALIDATION_ERROR",
            BookingError::Submission(e) => e.error_code(),
            BookingError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Message suitable for the guest.
    ///
    /// Validation errors are returned verbatim since they describe the
    /// guest's own input; everything else collapses to
    /// [`GENERIC_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            BookingError::Validation(e) => e.to_string(),
            BookingError::Submission(SubmissionError::InFlight) => {
                SubmissionError::InFlight.to_string()
            }
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.user_message(),
            details: match self {
                BookingError::Validation(e) => Some(e.details()),
                _ => None,
            },
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

/// Errors produced by the booking schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Single field validation error
    #[error("Validation error for field '{field}': {message}")]
    FieldError { field: String, message: String },

    /// Multiple field validation errors
    #[error("Validation errors: {}", join_field_errors(.0))]
    FieldErrors(Vec<FieldValidationError>),
}

fn join_field_errors(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    /// All field errors, flattened
    pub fn errors(&self) -> Vec<FieldValidationError> {
        match self {
            ValidationError::FieldError { field, message } => vec![FieldValidationError {
                field: field.clone(),
                message: message.clone(),
            }],
            ValidationError::FieldErrors(errors) => errors.clone(),
        }
    }

    /// Whether `field` has at least one error
    pub fn has_field(&self, field: &str) -> bool {
        self.errors().iter().any(|e| e.field == field)
    }

    fn details(&self) -> serde_json::Value {
        serde_json::json!({ "fields": self.errors() })
    }
}

impl From<ValidationError> for BookingError {
    fn from(err: ValidationError) -> Self {
        BookingError::Validation(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors returned by a [`BookingRepository`](crate::core::BookingRepository)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backend rejected the insert
    #[error("{message}")]
    Backend {
        message: String,
        code: Option<String>,
    },

    /// A unique or check constraint was violated
    #[error("{message}")]
    Constraint { constraint: String, message: String },

    /// The backend could not be reached
    #[error("Failed to connect to {backend}: {message}")]
    Connection { backend: String, message: String },

    /// The inserted row could not be decoded
    #[error("Failed to decode inserted booking: {message}")]
    Decode { message: String },
}

// =============================================================================
// Submission Errors
// =============================================================================

/// Errors raised while a validated booking is being submitted
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Another submission on the same form has not finished yet
    #[error("A booking submission is already in progress")]
    InFlight,

    /// The repository insert failed
    #[error("Database error: {0}")]
    Database(#[from] StorageError),

    /// The parent callback failed after the row was inserted
    #[error("Booking callback failed: {message}")]
    Callback { message: String },
}

impl SubmissionError {
    pub fn error_code(&self) -> &'static str {
        match self {
            SubmissionError::InFlight => "SUBMISSION_IN_FLIGHT",
            SubmissionError::Database(_) => "STORAGE_ERROR",
            SubmissionError::Callback { .. } => "CALLBACK_ERROR",
        }
    }
}

impl From<SubmissionError> for BookingError {
    fn from(err: SubmissionError) -> Self {
        BookingError::Submission(err)
    }
}

impl From<StorageError> for BookingError {
    fn from(err: StorageError) -> Self {
        BookingError::Submission(SubmissionError::Database(err))
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Missing configuration value: {key}")]
    Missing { key: String },
}

impl From<ConfigError> for BookingError {
    fn from(err: ConfigError) -> Self {
        BookingError::Config(err)
    }
}
