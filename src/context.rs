//! Engine and notification context for Holocron.
//!
//! Provides the AlbumEngine instance and the toast queue to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let engine = use_engine();
//! let notifications = use_notifications();
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use holocron_core::AlbumEngine;
use tokio::sync::RwLock;
use ulid::Ulid;

/// Shared engine type for context.
///
/// The engine is wrapped in Arc<RwLock<>> to allow:
/// - Multiple components to read concurrently
/// - Safe mutation when needed
pub type SharedEngine = Arc<RwLock<Option<AlbumEngine>>>;

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Hook to access the AlbumEngine from context.
///
/// Returns a Signal containing the shared engine state.
pub fn use_engine() -> Signal<SharedEngine> {
    use_context::<Signal<SharedEngine>>()
}

/// Hook to check if the engine is initialized.
///
/// Returns a reactive signal that updates when engine state changes.
pub fn use_engine_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Severity of a toast notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    /// CSS class for the toast container
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast toast-success",
            NotificationKind::Error => "toast toast-error",
            NotificationKind::Warning => "toast toast-warning",
            NotificationKind::Info => "toast toast-info",
        }
    }
}

/// A transient toast message
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: Ulid,
    pub message: String,
    pub kind: NotificationKind,
}

/// How long a toast stays on screen
const NOTIFICATION_TIMEOUT: Duration = Duration::from_millis(3_500);

/// Hook to access the toast queue from context.
pub fn use_notifications() -> Signal<Vec<Notification>> {
    use_context::<Signal<Vec<Notification>>>()
}

/// Push a toast and schedule its removal.
pub fn push_notification(
    mut notifications: Signal<Vec<Notification>>,
    message: impl Into<String>,
    kind: NotificationKind,
) {
    let notification = Notification {
        id: Ulid::new(),
        message: message.into(),
        kind,
    };
    let id = notification.id;
    notifications.write().push(notification);

    spawn(async move {
        tokio::time::sleep(NOTIFICATION_TIMEOUT).await;
        notifications.write().retain(|n| n.id != id);
    });
}
