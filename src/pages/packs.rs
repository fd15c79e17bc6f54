//! Packs Page
//!
//! The shop: four packs, the wallet balance, and a live cooldown ticker.
//! The ticker polls once a second and clears the stored cooldown the moment
//! it expires so the packs unlock without a restart.

use std::time::Duration;

use dioxus::prelude::*;
use holocron_core::{format_cooldown, PackId, PACK_COST};

use crate::components::cards::PackCard;
use crate::components::{NavHeader, NavLocation};
use crate::context::{use_engine, use_engine_ready};

#[component]
pub fn Packs() -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();

    let mut points: Signal<u32> = use_signal(|| 0);
    let mut active_pack: Signal<Option<PackId>> = use_signal(|| None);
    let mut cooldown: Signal<u64> = use_signal(|| 0);
    let mut refresh_tick: Signal<u32> = use_signal(|| 0);

    // Wallet and pack state, reloaded after every purchase/finish
    use_effect(move || {
        let _ = refresh_tick();
        if engine_ready() {
            spawn(async move {
                let shared = engine();
                let guard = shared.read().await;
                if let Some(ref eng) = *guard {
                    match eng.points() {
                        Ok(balance) => points.set(balance),
                        Err(e) => tracing::error!("failed to load points: {}", e),
                    }
                    match eng.pack_state() {
                        Ok(state) => active_pack.set(state.active_pack_id),
                        Err(e) => tracing::error!("failed to load pack state: {}", e),
                    }
                    match eng.cooldown_seconds() {
                        Ok(secs) => cooldown.set(secs),
                        Err(e) => tracing::error!("failed to load cooldown: {}", e),
                    }
                }
            });
        }
    });

    // One-second ticker; clears the cooldown in storage when it hits zero
    use_effect(move || {
        if engine_ready() {
            spawn(async move {
                loop {
                    tokio::time::sleep(Duration::from_secs(1)).await;

                    let shared = engine();
                    let guard = shared.read().await;
                    let Some(ref eng) = *guard else { continue };

                    let secs = match eng.cooldown_seconds() {
                        Ok(secs) => secs,
                        Err(e) => {
                            tracing::warn!("cooldown poll failed: {}", e);
                            continue;
                        }
                    };

                    if secs == 0 && cooldown() > 0 {
                        if let Err(e) = eng.clear_cooldown() {
                            tracing::warn!("failed to clear cooldown: {}", e);
                        }
                    }
                    cooldown.set(secs);
                }
            });
        }
    });

    let on_change = move |_| {
        refresh_tick += 1;
    };

    rsx! {
        NavHeader { current: NavLocation::Packs }

        main { class: "page",
            div { class: "shop-header",
                h1 { "Pack shop" }
                p { class: "shop-wallet", "Balance: {points()} points" }
            }

            p { class: "shop-blurb",
                "Every pack costs {PACK_COST} points and holds 5 random cards. "
                "Buying a pack starts a one-minute cooldown on the whole shop."
            }

            if cooldown() > 0 && active_pack().is_none() {
                p { class: "shop-cooldown",
                    "Next pack available in {format_cooldown(cooldown())}"
                }
            }

            div { class: "shop-grid",
                for pack_id in PackId::ALL {
                    PackCard {
                        key: "{pack_id}",
                        pack_id,
                        points: points(),
                        active_pack: active_pack(),
                        cooldown_seconds: cooldown(),
                        on_change,
                    }
                }
            }
        }
    }
}
