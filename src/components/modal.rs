//! Modal Component
//!
//! Overlay dialog; a click outside the body closes it.

use dioxus::prelude::*;

/// Modal dialog
///
/// # Example
///
/// ```rust
/// rsx! {
///     Modal {
///         show: show_modal(),
///         title: "Pack #1".to_string(),
///         on_close: move |_| show_modal.set(false),
///         p { "content" }
///     }
/// }
/// ```
#[component]
pub fn Modal(
    /// Whether to show the modal
    show: bool,
    /// Title line; empty hides the header
    #[props(default = String::new())]
    title: String,
    /// Extra class for the modal body (sizing)
    #[props(default = None)]
    class: Option<String>,
    /// Callback when modal is closed
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !show {
        return rsx! {};
    }

    let body_class = match class {
        Some(extra) => format!("modal-body {}", extra),
        None => "modal-body".to_string(),
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: body_class,
                onclick: move |e| e.stop_propagation(),

                if !title.is_empty() {
                    h2 { class: "modal-title", "{title}" }
                }

                button {
                    class: "modal-close",
                    onclick: move |_| on_close.call(()),
                    "x"
                }

                {children}
            }
        }
    }
}
