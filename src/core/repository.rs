//! Repository trait for persisting bookings

use crate::core::booking::{Booking, NewBooking};
use crate::core::error::StorageError;
use async_trait::async_trait;
use std::sync::Arc;

/// Persists new bookings.
///
/// Implementations perform a single-row insert into the `bookings` table and
/// return the stored row including its generated id. The form is agnostic to
/// where the row ends up.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert one booking and return the stored row
    async fn insert(&self, record: NewBooking) -> Result<Booking, StorageError>;
}

#[async_trait]
impl<T: BookingRepository + ?Sized> BookingRepository for Arc<T> {
    async fn insert(&self, record: NewBooking) -> Result<Booking, StorageError> {
        (**self).insert(record).await
    }
}
