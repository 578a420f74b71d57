//! PostgreSQL storage backend using sqlx.
//!
//! Provides `PostgresBookingRepository`, backed by a `bookings` table via
//! `sqlx::PgPool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! booking-form = { version = "0.1", features = ["postgres"] }
//! ```

use crate::core::booking::{Booking, BookingStatus, NewBooking};
use crate::core::error::StorageError;
use crate::core::reference::BookingReference;
use crate::core::repository::BookingRepository;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

const BACKEND: &str = "postgres";
const UNIQUE_VIOLATION: &str = "23505";

/// Create the `bookings` table (idempotent).
///
/// `booking_reference` carries a unique constraint since the reference
/// scheme itself can collide.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS bookings (
            id BIGSERIAL PRIMARY KEY,
            booking_reference TEXT NOT NULL,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT NOT NULL,
            adults INTEGER NOT NULL CHECK (adults >= 0),
            children INTEGER NOT NULL CHECK (children >= 0),
            check_in_date DATE NOT NULL,
            check_out_date DATE NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending',
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            CONSTRAINT bookings_booking_reference_key UNIQUE (booking_reference)
        )",
    )
    .execute(pool)
    .await
    .map_err(map_sqlx_error)?;

    Ok(())
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    match &err {
        sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            StorageError::Constraint {
                constraint: db.constraint().unwrap_or_default().to_string(),
                message: db.message().to_string(),
            }
        }
        sqlx::Error::Database(db) => StorageError::Backend {
            message: db.message().to_string(),
            code: db.code().map(|c| c.to_string()),
        },
        sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            StorageError::Connection {
                backend: BACKEND.to_string(),
                message: err.to_string(),
            }
        }
        _ => StorageError::Backend {
            message: err.to_string(),
            code: None,
        },
    }
}

fn row_to_booking(row: &PgRow) -> Result<Booking, StorageError> {
    let decode = |e: sqlx::Error| StorageError::Decode {
        message: e.to_string(),
    };

    let status: String = row.try_get("status").map_err(decode)?;
    let reference: String = row.try_get("booking_reference").map_err(decode)?;

    Ok(Booking {
        id: row.try_get("id").map_err(decode)?,
        booking_reference: BookingReference::parse(&reference).ok_or_else(|| {
            StorageError::Decode {
                message: format!("malformed booking reference '{}'", reference),
            }
        })?,
        name: row.try_get("name").map_err(decode)?,
        email: row.try_get("email").map_err(decode)?,
        phone: row.try_get("phone").map_err(decode)?,
        adults: row.try_get("adults").map_err(decode)?,
        children: row.try_get("children").map_err(decode)?,
        check_in_date: row.try_get::<NaiveDate, _>("check_in_date").map_err(decode)?,
        check_out_date: row.try_get::<NaiveDate, _>("check_out_date").map_err(decode)?,
        status: status
            .parse::<BookingStatus>()
            .map_err(|message| StorageError::Decode { message })?,
        created_at: row
            .try_get::<Option<DateTime<Utc>>, _>("created_at")
            .map_err(decode)?,
    })
}

#[derive(Clone, Debug)]
pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_reference(&self, reference: &str) -> Result<Option<Booking>, StorageError> {
        let row = sqlx::query("SELECT * FROM bookings WHERE booking_reference = $1")
            .bind(reference)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_booking).transpose()
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn insert(&self, record: NewBooking) -> Result<Booking, StorageError> {
        let row = sqlx::query(
            "INSERT INTO bookings
                (booking_reference, name, email, phone, adults, children,
                 check_in_date, check_out_date, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING *",
        )
        .bind(record.booking_reference.as_str())
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(record.adults)
        .bind(record.children)
        .bind(record.check_in_date)
        .bind(record.check_out_date)
        .bind(record.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row_to_booking(&row)
    }
}
