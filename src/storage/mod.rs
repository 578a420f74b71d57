//! Storage implementations for different backends

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "rest")]
pub mod rest;

pub use in_memory::InMemoryBookingRepository;
#[cfg(feature = "postgres")]
pub use postgres::{PostgresBookingRepository, ensure_schema};
#[cfg(feature = "rest")]
pub use rest::RestBookingRepository;
