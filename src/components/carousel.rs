//! Carousel Component
//!
//! Index-based strip with prev/next controls; shows a window of items and
//! wraps around at the ends.

use dioxus::prelude::*;

/// How many cards are visible at once
const WINDOW: usize = 4;

#[component]
pub fn Carousel(items: Vec<Element>) -> Element {
    let mut start = use_signal(|| 0usize);

    let total = items.len();
    let has_controls = total > WINDOW;

    let visible: Vec<Element> = if total <= WINDOW {
        items.clone()
    } else {
        (0..WINDOW)
            .map(|offset| items[(start() + offset) % total].clone())
            .collect()
    };

    rsx! {
        div { class: "carousel",
            if has_controls {
                button {
                    class: "carousel-control",
                    onclick: move |_| {
                        start.set((start() + total - 1) % total);
                    },
                    "<"
                }
            }

            div { class: "carousel-strip",
                for item in visible {
                    div { class: "carousel-item", {item} }
                }
            }

            if has_controls {
                button {
                    class: "carousel-control",
                    onclick: move |_| {
                        start.set((start() + 1) % total);
                    },
                    ">"
                }
            }
        }
    }
}
