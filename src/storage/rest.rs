//! Hosted REST backend (PostgREST / Supabase) using reqwest.
//!
//! Inserts go to `POST {url}/rest/v1/{table}` with the project API key and
//! ask for the stored row back as a single JSON object.
//!
//! # Feature flag
//!
//! This module is gated behind the `rest` feature flag:
//! ```toml
//! [dependencies]
//! booking-form = { version = "0.1", features = ["rest"] }
//! ```

use crate::config::BackendConfig;
use crate::core::booking::{Booking, NewBooking};
use crate::core::error::StorageError;
use crate::core::repository::BookingRepository;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderValue};
use serde::Deserialize;

const BACKEND: &str = "rest";
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
const UNIQUE_VIOLATION: &str = "23505";

/// Error body returned by PostgREST
#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

#[derive(Clone, Debug)]
pub struct RestBookingRepository {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl RestBookingRepository {
    pub fn new(base_url: &str, api_key: impl Into<String>, table: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key, table)
    }

    pub fn with_client(
        client: reqwest::Client,
        base_url: &str,
        api_key: impl Into<String>,
        table: &str,
    ) -> Self {
        Self {
            client,
            endpoint: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(&config.url, config.api_key.clone(), &config.table)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl BookingRepository for RestBookingRepository {
    async fn insert(&self, record: NewBooking) -> Result<Booking, StorageError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .header(ACCEPT, HeaderValue::from_static(SINGLE_OBJECT))
            .json(&record)
            .send()
            .await
            .map_err(|e| StorageError::Connection {
                backend: BACKEND.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| StorageError::Connection {
            backend: BACKEND.to_string(),
            message: e.to_string(),
        })?;

        if !status.is_success() {
            let error = serde_json::from_str::<ApiError>(&body).unwrap_or_else(|_| ApiError {
                message: format!("HTTP {}", status),
                code: None,
                details: None,
            });
            tracing::debug!(
                status = status.as_u16(),
                code = ?error.code,
                details = ?error.details,
                "booking insert rejected"
            );

            return Err(match error.code.as_deref() {
                Some(UNIQUE_VIOLATION) => StorageError::Constraint {
                    constraint: error.details.unwrap_or_default(),
                    message: error.message,
                },
                _ => StorageError::Backend {
                    message: error.message,
                    code: error.code,
                },
            });
        }

        serde_json::from_str(&body).map_err(|e| StorageError::Decode {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_table() {
        let repo = RestBookingRepository::new("https://project.supabase.co/", "key", "bookings");
        assert_eq!(repo.endpoint(), "https://project.supabase.co/rest/v1/bookings");
    }

    #[test]
    fn test_from_config() {
        let repo = RestBookingRepository::from_config(&BackendConfig {
            url: "http://localhost:54321".to_string(),
            api_key: "anon".to_string(),
            table: "stays".to_string(),
        });
        assert_eq!(repo.endpoint(), "http://localhost:54321/rest/v1/stays");
    }
}
