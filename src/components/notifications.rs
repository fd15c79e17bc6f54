//! Toast Notifications Component
//!
//! Renders the shared toast queue in a fixed corner stack. Toasts enqueue
//! themselves via `context::push_notification` and disappear on their own.

use dioxus::prelude::*;

use crate::context::use_notifications;

/// Toast stack overlay
#[component]
pub fn Notifications() -> Element {
    let notifications = use_notifications();

    rsx! {
        div { class: "toast-stack",
            for notification in notifications() {
                div {
                    key: "{notification.id}",
                    class: notification.kind.class(),
                    "{notification.message}"
                }
            }
        }
    }
}
