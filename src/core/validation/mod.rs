//! Booking schema
//!
//! Field rules are declared with `validator` on [`BookingFormData`]; the stay
//! dates are checked together here. A successful run yields a
//! [`ValidatedBooking`], the only input the submission handler accepts.

pub mod validators;

use crate::core::booking::BookingFormData;
use crate::core::error::{FieldValidationError, ValidationError};
use validator::Validate;

/// Field order used when reporting errors, matching the form layout
const FIELD_ORDER: &[&str] = &[
    "name",
    "email",
    "phone",
    "adults",
    "children",
    "check_in_date",
    "check_out_date",
];

/// Form values that passed the schema, with guest counts already parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBooking {
    values: BookingFormData,
    adults: i32,
    children: i32,
}

impl ValidatedBooking {
    pub fn values(&self) -> &BookingFormData {
        &self.values
    }

    pub fn into_values(self) -> BookingFormData {
        self.values
    }

    pub fn adults(&self) -> i32 {
        self.adults
    }

    pub fn children(&self) -> i32 {
        self.children
    }
}

/// Run every rule against `values`, collecting all failures
pub fn validate_booking(values: &BookingFormData) -> Result<ValidatedBooking, ValidationError> {
    let mut errors: Vec<FieldValidationError> = Vec::new();

    if let Err(report) = values.validate() {
        for (field, field_errors) in report.field_errors() {
            for error in field_errors.iter() {
                errors.push(FieldValidationError {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string()),
                });
            }
        }
    }

    if values.check_out_date <= values.check_in_date {
        errors.push(FieldValidationError {
            field: "check_out_date".to_string(),
            message: "check-out date must be after check-in date".to_string(),
        });
    }

    if !errors.is_empty() {
        errors.sort_by_key(|e| {
            FIELD_ORDER
                .iter()
                .position(|f| *f == e.field)
                .unwrap_or(FIELD_ORDER.len())
        });
        return Err(ValidationError::FieldErrors(errors));
    }

    let adults = validators::parse_count(&values.adults).unwrap_or(1);
    let children = validators::parse_count(&values.children).unwrap_or(0);

    Ok(ValidatedBooking {
        values: values.clone(),
        adults: adults as i32,
        children: children as i32,
    })
}
