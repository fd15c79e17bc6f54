//! Pack Card Component
//!
//! One pack in the shop. Orchestrates the purchase: gate checks with
//! friendly toasts, the buy call into the engine, and the reveal modal.

use dioxus::prelude::*;
use holocron_core::{
    format_cooldown, is_pack_locked, AlbumError, OpenedPack, PackId, PACK_CONFIGS, PACK_COST,
};

use super::PackRevealModal;
use crate::components::Modal;
use crate::context::{push_notification, use_engine, use_notifications, NotificationKind};

#[component]
pub fn PackCard(
    pack_id: PackId,
    /// Live wallet balance (owned by the Packs page)
    points: u32,
    /// Currently active pack, if any
    active_pack: Option<PackId>,
    /// Seconds left on the shop cooldown
    cooldown_seconds: u64,
    /// Parent refresh after any purchase/finish
    on_change: EventHandler<()>,
) -> Element {
    let engine = use_engine();
    let notifications = use_notifications();

    let mut show_info = use_signal(|| false);
    let mut buying = use_signal(|| false);
    let mut opened: Signal<Option<OpenedPack>> = use_signal(|| None);

    let is_current_active = active_pack == Some(pack_id);
    let locked_by_cooldown = is_pack_locked(pack_id, active_pack, cooldown_seconds);
    let another_pack_active = active_pack.is_some() && !is_current_active;
    let can_buy = points >= PACK_COST;
    let disable_purchase = !can_buy || locked_by_cooldown || another_pack_active || buying();
    let card_disabled = locked_by_cooldown || another_pack_active || buying();
    let show_cooldown_badge = !is_current_active && cooldown_seconds > 0;

    let handle_buy = move |_| {
        if locked_by_cooldown {
            push_notification(
                notifications,
                format!(
                    "This pack will be available in {}.",
                    format_cooldown(cooldown_seconds)
                ),
                NotificationKind::Warning,
            );
            return;
        }

        if let Some(active) = active_pack {
            if active != pack_id {
                push_notification(
                    notifications,
                    format!("You are already opening pack {}.", active),
                    NotificationKind::Warning,
                );
                return;
            }
        }

        if !can_buy {
            push_notification(
                notifications,
                "Not enough points to buy this pack.",
                NotificationKind::Error,
            );
            return;
        }

        buying.set(true);

        spawn(async move {
            let shared = engine();
            let guard = shared.read().await;
            if let Some(ref eng) = *guard {
                match eng.purchase_pack(pack_id).await {
                    Ok(pack) => {
                        show_info.set(false);
                        opened.set(Some(pack));
                        push_notification(
                            notifications,
                            format!("Pack {} purchased for {} points.", pack_id, PACK_COST),
                            NotificationKind::Success,
                        );
                    }
                    Err(AlbumError::PackLocked { remaining_secs }) => {
                        push_notification(
                            notifications,
                            format!(
                                "Wait out the timer before opening another pack ({}).",
                                format_cooldown(remaining_secs)
                            ),
                            NotificationKind::Warning,
                        );
                    }
                    Err(AlbumError::InsufficientPoints { .. }) => {
                        push_notification(
                            notifications,
                            "Not enough points to buy this pack.",
                            NotificationKind::Error,
                        );
                    }
                    Err(AlbumError::NotEnoughCards(section)) => {
                        push_notification(
                            notifications,
                            format!(
                                "Not enough {} to fill this pack. Try again later.",
                                section.label().to_lowercase()
                            ),
                            NotificationKind::Error,
                        );
                    }
                    Err(e) => {
                        tracing::warn!("pack purchase failed: {}", e);
                        push_notification(
                            notifications,
                            "Could not fetch the pack contents. Try again.",
                            NotificationKind::Error,
                        );
                    }
                }
            }
            buying.set(false);
            on_change.call(());
        });
    };

    // Closing the reveal finishes the pack in the store
    let handle_reveal_close = move |_| {
        opened.set(None);
        spawn(async move {
            let shared = engine();
            let guard = shared.read().await;
            if let Some(ref eng) = *guard {
                if let Err(e) = eng.finish_pack() {
                    tracing::error!("failed to finish pack: {}", e);
                }
            }
            on_change.call(());
        });
    };

    let lock_note = match (active_pack, locked_by_cooldown || another_pack_active) {
        (Some(active), true) => Some(format!("Finish pack {} before opening another one.", active)),
        (None, true) => Some(format!(
            "This pack will be available in {}.",
            format_cooldown(cooldown_seconds)
        )),
        _ => None,
    };

    let buy_label = if buying() {
        "Contacting the archives...".to_string()
    } else if !can_buy {
        "Not enough points".to_string()
    } else if locked_by_cooldown || another_pack_active {
        "Available soon".to_string()
    } else {
        format!("Buy for {} points", PACK_COST)
    };

    rsx! {
        div {
            class: if card_disabled { "pack-card pack-card--disabled" } else { "pack-card" },
            onclick: move |_| {
                if !card_disabled {
                    show_info.set(true);
                }
            },

            if show_cooldown_badge {
                span { class: "badge badge--cooldown", {format_cooldown(cooldown_seconds)} }
            }
            if is_current_active {
                span { class: "badge badge--active", "In progress" }
            }

            div { class: "pack-card-emblem", "\u{1F4E6}" }
            h3 { class: "pack-card-title", "Pack {pack_id}" }
            p { class: "pack-card-size", "5 cards" }
            p { class: "pack-card-cost", "{PACK_COST} points" }
        }

        Modal {
            show: show_info(),
            title: format!("Pack {}", pack_id),
            on_close: move |_| show_info.set(false),

            p { class: "pack-info-teaser",
                "The contents of this pack are secret. They are revealed on purchase."
            }

            if let Some(note) = lock_note.clone() {
                p { class: "pack-info-warning", {note} }
            }

            div { class: "pack-info-configs",
                p { "Possible configurations (every pack holds exactly 5 cards):" }
                ul {
                    for config in PACK_CONFIGS {
                        li { key: "{config.id}", "Config {config.id}: {config.label}" }
                    }
                }
            }

            p { class: "pack-info-wallet", "Cost: {PACK_COST} points. Your balance: {points}." }

            button {
                class: "btn btn--primary btn--wide",
                disabled: disable_purchase,
                onclick: handle_buy,
                {buy_label}
            }
        }

        if let Some(pack) = opened() {
            PackRevealModal {
                opened: pack,
                on_close: handle_reveal_close,
            }
        }
    }
}
