//! Transient user notifications ("toasts")
//!
//! The form never waits on a notification: [`NotificationSink::notify`] is
//! fire-and-forget. [`ToastBus`] fans toasts out over a
//! `tokio::sync::broadcast` channel so a UI layer (or a test) can subscribe.
//!
//! ```text
//! BookingForm::submit ──▶ ToastBus::notify() ──▶ broadcast channel ──▶ toast renderer
//!                                                               ──▶ audit log
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! let toasts = ToastBus::new(16);
//! let mut rx = toasts.subscribe();
//!
//! toasts.notify(Notification::new("Booking Submitted", "Your booking reference is BK123456"));
//!
//! if let Ok(toast) = rx.recv().await {
//!     println!("{}: {}", toast.notification.title, toast.notification.description);
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    #[default]
    Default,
    /// Rendered as an error
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// Receives toasts emitted by the form
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl<T: NotificationSink + ?Sized> NotificationSink for Arc<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Envelope wrapping a toast with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastEnvelope {
    /// Unique toast ID, usable as a dismiss handle
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub notification: Notification,
}

impl ToastEnvelope {
    pub fn new(notification: Notification) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            notification,
        }
    }
}

/// Broadcast-based toast channel
///
/// Cheap to clone; every clone publishes into the same channel.
#[derive(Debug, Clone)]
pub struct ToastBus {
    sender: broadcast::Sender<ToastEnvelope>,
}

impl ToastBus {
    /// Create a bus buffering up to `capacity` toasts for slow subscribers
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a toast to all subscribers.
    ///
    /// Returns the number of subscribers that will receive it; a toast with
    /// no subscriber is dropped.
    pub fn publish(&self, notification: Notification) -> usize {
        self.sender
            .send(ToastEnvelope::new(notification))
            .unwrap_or(0)
    }

    /// Toasts published before this call are not received.
    pub fn subscribe(&self) -> broadcast::Receiver<ToastEnvelope> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ToastBus {
    fn default() -> Self {
        Self::new(64)
    }
}

impl NotificationSink for ToastBus {
    fn notify(&self, notification: Notification) {
        self.publish(notification);
    }
}

/// Writes every toast to the log instead of a screen
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.variant {
            NotificationVariant::Default => tracing::info!(
                title = %notification.title,
                "{}",
                notification.description
            ),
            NotificationVariant::Destructive => tracing::warn!(
                title = %notification.title,
                "{}",
                notification.description
            ),
        }
    }
}
