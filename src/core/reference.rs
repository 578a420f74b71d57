//! Human readable booking references
//!
//! A reference is `BK` followed by the last six digits of the epoch
//! millisecond timestamp at submission time. It is shown to the guest and is
//! distinct from the database row id. Two submissions in the same
//! millisecond (or exactly 1000 seconds apart) produce the same reference,
//! so uniqueness has to be enforced by the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const PREFIX: &str = "BK";
const DIGITS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingReference(String);

impl BookingReference {
    /// Build a reference from an epoch millisecond timestamp
    pub fn from_millis(millis: i64) -> Self {
        Self(format!("{}{:06}", PREFIX, millis.rem_euclid(1_000_000)))
    }

    /// Build a reference for the given instant
    pub fn generate(now: DateTime<Utc>) -> Self {
        Self::from_millis(now.timestamp_millis())
    }

    /// Parse an existing reference, rejecting anything not shaped `BK######`
    pub fn parse(value: &str) -> Option<Self> {
        Self::is_valid(value).then(|| Self(value.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        value
            .strip_prefix(PREFIX)
            .is_some_and(|digits| digits.len() == DIGITS && digits.bytes().all(|b| b.is_ascii_digit()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<BookingReference> for String {
    fn from(reference: BookingReference) -> Self {
        reference.0
    }
}
