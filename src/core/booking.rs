//! Booking data model: form values, insert payload and persisted row

use crate::core::reference::BookingReference;
use crate::core::validation::ValidatedBooking;
use crate::core::validation::validators::{PHONE_REGEX, adult_count, child_count, guest_name};
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Raw values as entered in the booking form.
///
/// Guest counts stay strings until validation, like the inputs they come from.
/// Stay dates are checked together by
/// [`validate_booking`](crate::core::validation::validate_booking).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingFormData {
    #[validate(custom(function = "guest_name"))]
    pub name: String,
    #[validate(email(message = "invalid email address", code = "email"))]
    pub email: String,
    #[validate(regex(
        path = *PHONE_REGEX,
        message = "phone number must be 10 to 20 digits, spaces or + - ( )",
        code = "phone-format"
    ))]
    pub phone: String,
    #[validate(custom(function = "adult_count"))]
    pub adults: String,
    #[validate(custom(function = "child_count"))]
    pub children: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}

impl BookingFormData {
    /// Blank form: one adult, no children, staying from `today` to the day after.
    pub fn defaults(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            adults: "1".to_string(),
            children: "0".to_string(),
            check_in_date: today,
            check_out_date: today.checked_add_days(Days::new(1)).unwrap_or(today),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(format!("unknown booking status '{}'", other)),
        }
    }
}

/// Row sent to the `bookings` table.
///
/// Dates serialize as `YYYY-MM-DD` and guest counts as integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub booking_reference: BookingReference,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub adults: i32,
    pub children: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: BookingStatus,
}

impl NewBooking {
    pub fn new(booking: &ValidatedBooking, booking_reference: BookingReference) -> Self {
        let values = booking.values();
        Self {
            booking_reference,
            name: values.name.trim().to_string(),
            email: values.email.trim().to_string(),
            phone: values.phone.trim().to_string(),
            adults: booking.adults(),
            children: booking.children(),
            check_in_date: values.check_in_date,
            check_out_date: values.check_out_date,
            status: BookingStatus::Pending,
        }
    }
}

/// A booking as returned by the backend after insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub booking_reference: BookingReference,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub adults: i32,
    pub children: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Booking {
    pub fn from_new(id: i64, record: NewBooking, created_at: Option<DateTime<Utc>>) -> Self {
        Self {
            id,
            booking_reference: record.booking_reference,
            name: record.name,
            email: record.email,
            phone: record.phone,
            adults: record.adults,
            children: record.children,
            check_in_date: record.check_in_date,
            check_out_date: record.check_out_date,
            status: record.status,
            created_at,
        }
    }

    pub fn nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days()
    }
}

/// What the parent view receives once a booking is stored: the submitted
/// form values plus the reference and the database id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedBooking {
    #[serde(flatten)]
    pub values: BookingFormData,
    pub booking_reference: String,
    pub booking_id: i64,
}
