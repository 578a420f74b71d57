//! Macro-generated test suite for `BookingRepository` contract validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use booking::storage::InMemoryBookingRepository;
//!
//! booking_repository_tests!(InMemoryBookingRepository::new());
//! ```
//!
//! # Generated Tests
//!
//! - `test_insert_returns_stored_row`: every field comes back as sent, plus an id
//! - `test_insert_assigns_distinct_ids`: two inserts, two ids
//! - `test_duplicate_reference_is_constraint_error`: reference uniqueness
//! - `test_insert_through_form`: full submission against the backend

/// Generate a `BookingRepository` conformance test suite.
///
/// `$factory` is re-evaluated for each test and must yield an empty
/// repository.
#[macro_export]
macro_rules! booking_repository_tests {
    ($factory:expr) => {
        mod booking_repository_contract_tests {
            use super::*;
            use booking::prelude::*;

            #[tokio::test]
            async fn test_insert_returns_stored_row() {
                let repo = $factory;
                let record = new_booking(FIXED_MILLIS);

                let stored = repo.insert(record.clone()).await.unwrap();

                assert!(stored.id > 0);
                assert_eq!(stored.booking_reference, record.booking_reference);
                assert_eq!(stored.name, record.name);
                assert_eq!(stored.email, record.email);
                assert_eq!(stored.phone, record.phone);
                assert_eq!(stored.adults, 2);
                assert_eq!(stored.children, 1);
                assert_eq!(stored.check_in_date, date(2026, 11, 1));
                assert_eq!(stored.check_out_date, date(2026, 11, 4));
                assert_eq!(stored.status, BookingStatus::Pending);
            }

            #[tokio::test]
            async fn test_insert_assigns_distinct_ids() {
                let repo = $factory;

                let first = repo.insert(new_booking(1)).await.unwrap();
                let second = repo.insert(new_booking(2)).await.unwrap();

                assert_ne!(first.id, second.id);
            }

            #[tokio::test]
            async fn test_duplicate_reference_is_constraint_error() {
                let repo = $factory;
                repo.insert(new_booking(1_000_000_777)).await.unwrap();

                let err = repo.insert(new_booking(9_000_000_777)).await.unwrap_err();

                assert!(
                    matches!(err, StorageError::Constraint { .. }),
                    "expected constraint error, got {:?}",
                    err
                );
                assert!(err.to_string().contains("duplicate key"));
            }

            #[tokio::test]
            async fn test_insert_through_form() {
                let repo = $factory;
                let form = BookingForm::with_clock(repo, RecordingNotifier::default(), fixed_clock());
                form.update(|v| *v = filled_values()).unwrap();

                let submitted = form.handle_submit(|_| Ok(())).await.unwrap();

                assert_eq!(submitted.booking_reference, "BK123456");
                assert!(submitted.booking_id > 0);
            }
        }
    };
}
