//! Integration tests for InMemoryBookingRepository using the storage test harness.
//!
//! This file invokes `booking_repository_tests!` to validate that
//! InMemoryBookingRepository fully conforms to the BookingRepository contract.

#[macro_use]
mod storage_harness;

use booking::storage::InMemoryBookingRepository;
use storage_harness::*;

booking_repository_tests!(InMemoryBookingRepository::new());
