//! In-memory implementation of BookingRepository for testing and development

use crate::core::booking::{Booking, NewBooking};
use crate::core::error::StorageError;
use crate::core::repository::BookingRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, RwLock};

const REFERENCE_CONSTRAINT: &str = "bookings_booking_reference_key";

/// In-memory booking table
///
/// Ids are assigned sequentially from 1 and `booking_reference` is unique,
/// mirroring the constraints of the hosted table.
#[derive(Clone, Default)]
pub struct InMemoryBookingRepository {
    rows: Arc<RwLock<Vec<Booking>>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all stored rows in insert order
    pub fn list(&self) -> Result<Vec<Booking>, StorageError> {
        let rows = self.rows.read().map_err(|e| StorageError::Backend {
            message: format!("Failed to acquire read lock: {}", e),
            code: None,
        })?;

        Ok(rows.clone())
    }

    pub fn find_by_reference(&self, reference: &str) -> Result<Option<Booking>, StorageError> {
        Ok(self
            .list()?
            .into_iter()
            .find(|b| b.booking_reference.as_str() == reference))
    }

    pub fn len(&self) -> usize {
        self.rows.read().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn insert(&self, record: NewBooking) -> Result<Booking, StorageError> {
        let mut rows = self.rows.write().map_err(|e| StorageError::Backend {
            message: format!("Failed to acquire write lock: {}", e),
            code: None,
        })?;

        if rows
            .iter()
            .any(|b| b.booking_reference == record.booking_reference)
        {
            return Err(StorageError::Constraint {
                constraint: REFERENCE_CONSTRAINT.to_string(),
                message: format!(
                    "duplicate key value violates unique constraint \"{}\"",
                    REFERENCE_CONSTRAINT
                ),
            });
        }

        let id = rows.last().map_or(1, |b| b.id + 1);
        let booking = Booking::from_new(id, record, Some(Utc::now()));
        rows.push(booking.clone());

        Ok(booking)
    }
}
