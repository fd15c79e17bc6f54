use std::sync::Arc;

use dioxus::prelude::*;
use tokio::sync::RwLock;

use crate::components::Notifications;
use crate::context::{get_data_dir, Notification, SharedEngine};
use crate::pages::{Album, Home, Packs};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Home page with collection stats
/// - `/packs` - Pack shop
/// - `/album` - The collected album
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/packs")]
    Packs {},
    #[route("/album")]
    Album {},
}

/// Root application component.
///
/// Provides global styles, engine context, notifications, and routing.
#[component]
pub fn App() -> Element {
    // Initialize shared engine state
    let engine: Signal<SharedEngine> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut engine_ready: Signal<bool> = use_signal(|| false);
    let notifications: Signal<Vec<Notification>> = use_signal(Vec::new);

    // Provide engine and notification context to all child components
    use_context_provider(|| engine);
    use_context_provider(|| engine_ready);
    use_context_provider(|| notifications);

    // Initialize engine on mount
    use_effect(move || {
        spawn(async move {
            let data_dir = get_data_dir();
            match holocron_core::AlbumEngine::new(&data_dir) {
                Ok(eng) => {
                    let shared = engine();
                    let mut guard = shared.write().await;
                    *guard = Some(eng);
                    drop(guard);
                    engine_ready.set(true);
                    tracing::info!("AlbumEngine initialized");
                }
                Err(e) => {
                    tracing::error!("Failed to initialize AlbumEngine: {}", e);
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Notifications {}
        Router::<Route> {}
    }
}
