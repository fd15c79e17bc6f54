//! Home Page
//!
//! Landing page: what the archive holds, how far the album is, and the two
//! entry points (shop and album).

use dioxus::prelude::*;
use holocron_core::AlbumProgress;

use crate::app::Route;
use crate::components::{NavHeader, NavLocation};
use crate::context::{use_engine, use_engine_ready};

#[component]
pub fn Home() -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();

    let mut progress: Signal<Option<AlbumProgress>> = use_signal(|| None);
    let mut counts: Signal<Option<(u32, u32, u32)>> = use_signal(|| None);

    use_effect(move || {
        if engine_ready() {
            spawn(async move {
                let shared = engine();
                let guard = shared.read().await;
                if let Some(ref eng) = *guard {
                    match eng.progress() {
                        Ok(p) => progress.set(Some(p)),
                        Err(e) => tracing::error!("failed to load progress: {}", e),
                    }
                    // Live totals are nice to have; the page works without them
                    match eng.section_counts().await {
                        Ok(c) => counts.set(Some(c)),
                        Err(e) => tracing::warn!("failed to load archive counts: {}", e),
                    }
                }
            });
        }
    });

    rsx! {
        NavHeader { current: NavLocation::Home }

        main { class: "page",
            section { class: "hero",
                h1 { class: "hero-title", "Holocron" }
                p { class: "hero-tagline",
                    "Buy card packs, reveal what is inside, and fill your album with "
                    "films, characters, and starships from a galaxy far, far away."
                }

                div { class: "hero-actions",
                    Link { class: "btn btn--primary", to: Route::Packs {}, "Open the shop" }
                    Link { class: "btn btn--ghost", to: Route::Album {}, "View your album" }
                }
            }

            if let Some(p) = progress() {
                section { class: "home-progress",
                    h2 { "Your album" }
                    p { "{p.collected} of {p.total} cards collected ({p.percent()}%)" }
                    div { class: "progress-track",
                        div {
                            class: "progress-fill",
                            style: "width: {p.percent()}%;",
                        }
                    }
                }
            }

            section { class: "home-archive",
                h2 { "The archive" }
                match counts() {
                    Some((films, people, starships)) => rsx! {
                        div { class: "archive-stats",
                            div { class: "archive-stat",
                                span { class: "archive-stat-number", "{films}" }
                                span { class: "archive-stat-label", "Films" }
                            }
                            div { class: "archive-stat",
                                span { class: "archive-stat-number", "{people}" }
                                span { class: "archive-stat-label", "Characters" }
                            }
                            div { class: "archive-stat",
                                span { class: "archive-stat-number", "{starships}" }
                                span { class: "archive-stat-label", "Starships" }
                            }
                        }
                    },
                    None => rsx! {
                        p { class: "archive-loading", "Reaching the archives..." }
                    },
                }
            }
        }
    }
}
