//! Pack Reveal Modal
//!
//! Shows the cards of a freshly opened pack after a short suspense pause.
//! Every card is either accepted into the album or discarded; once all five
//! are decided the modal closes itself and the pack is finished.

use std::collections::HashMap;
use std::time::Duration;

use dioxus::prelude::*;
use holocron_core::{CardDetail, OpenedPack, RevealedCard};

use super::{rarity_class, rarity_label, FilmCard, PersonCard, StarshipCard};
use crate::components::Modal;
use crate::context::{push_notification, use_engine, use_notifications, NotificationKind};

/// Delay before the cards flip face up
const REVEAL_DELAY: Duration = Duration::from_millis(1_200);

/// What happened to a revealed card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CardFate {
    Added,
    AlreadyOwned,
    Discarded,
}

impl CardFate {
    fn label(&self) -> &'static str {
        match self {
            CardFate::Added => "Added to album",
            CardFate::AlreadyOwned => "Already in album",
            CardFate::Discarded => "Discarded",
        }
    }
}

#[component]
pub fn PackRevealModal(opened: OpenedPack, on_close: EventHandler<()>) -> Element {
    let engine = use_engine();
    let notifications = use_notifications();

    let mut show_cards = use_signal(|| false);
    // Decisions keyed by card URL
    let mut fates: Signal<HashMap<String, CardFate>> = use_signal(HashMap::new);

    let total = opened.cards.len();

    // Suspense pause, then flip
    use_hook(|| {
        spawn(async move {
            tokio::time::sleep(REVEAL_DELAY).await;
            show_cards.set(true);
        });
    });

    // Duplicates are decided for the user up front
    let cards_for_check = opened.cards.clone();
    use_hook(move || {
        spawn(async move {
            let shared = engine();
            let guard = shared.read().await;
            if let Some(ref eng) = *guard {
                for card in &cards_for_check {
                    match eng.is_collected(card.section, card.id) {
                        Ok(true) => {
                            fates.write().insert(card.url.clone(), CardFate::AlreadyOwned);
                        }
                        Ok(false) => {}
                        Err(e) => {
                            tracing::warn!("collected check failed: {}", e);
                        }
                    }
                }
            }
        });
    });

    // Close once every card is decided
    use_effect(move || {
        if show_cards() && fates.read().len() == total {
            spawn(async move {
                tokio::time::sleep(Duration::from_millis(800)).await;
                on_close.call(());
            });
        }
    });

    let handle_accept = move |card: RevealedCard| {
        spawn(async move {
            let shared = engine();
            let guard = shared.read().await;
            if let Some(ref eng) = *guard {
                match eng.add_sticker(&card.to_sticker()) {
                    Ok(true) => {
                        fates.write().insert(card.url.clone(), CardFate::Added);
                        push_notification(
                            notifications,
                            format!("{} added to your album.", card.name),
                            NotificationKind::Success,
                        );
                    }
                    Ok(false) => {
                        fates.write().insert(card.url.clone(), CardFate::AlreadyOwned);
                        push_notification(
                            notifications,
                            format!("{} is already in your album.", card.name),
                            NotificationKind::Info,
                        );
                    }
                    Err(e) => {
                        tracing::error!("failed to add sticker: {}", e);
                        push_notification(
                            notifications,
                            "Could not save the card. Try again.",
                            NotificationKind::Error,
                        );
                    }
                }
            }
        });
    };

    let handle_discard = move |card: RevealedCard| {
        fates.write().insert(card.url.clone(), CardFate::Discarded);
        push_notification(
            notifications,
            format!("{} discarded.", card.name),
            NotificationKind::Info,
        );
    };

    rsx! {
        Modal {
            show: true,
            title: format!("Pack {} - Config {}", opened.pack_id, opened.config.id),
            class: Some("modal-body--wide".to_string()),
            on_close: move |_| on_close.call(()),

            if !show_cards() {
                div { class: "reveal-suspense",
                    div { class: "reveal-glow" }
                    p { "Opening your pack..." }
                }
            } else {
                div { class: "reveal-grid",
                    for card in opened.cards.clone() {
                        RevealSlot {
                            key: "{card.url}",
                            card: card.clone(),
                            fate: fates.read().get(&card.url).copied(),
                            on_accept: handle_accept,
                            on_discard: handle_discard,
                        }
                    }
                }

                p { class: "reveal-hint",
                    "Decide on every card. Closing this window discards the rest."
                }
            }
        }
    }
}

/// One card in the reveal grid with its accept/discard controls
#[component]
fn RevealSlot(
    card: RevealedCard,
    fate: Option<CardFate>,
    on_accept: EventHandler<RevealedCard>,
    on_discard: EventHandler<RevealedCard>,
) -> Element {
    let accept_card = card.clone();
    let discard_card = card.clone();

    rsx! {
        div { class: "reveal-slot",
            span { class: rarity_class(card.special), {rarity_label(card.special)} }

            match &card.detail {
                CardDetail::Person(person) => rsx! {
                    PersonCard { person: person.clone(), special: card.special }
                },
                CardDetail::Film(film) => rsx! {
                    FilmCard { film: film.clone(), special: card.special }
                },
                CardDetail::Starship(starship) => rsx! {
                    StarshipCard { starship: starship.clone(), special: card.special }
                },
            }

            if let Some(fate) = fate {
                p { class: "reveal-fate", {fate.label()} }
            } else {
                div { class: "reveal-actions",
                    button {
                        class: "btn btn--primary",
                        onclick: move |_| on_accept.call(accept_card.clone()),
                        "Keep"
                    }
                    button {
                        class: "btn btn--ghost",
                        onclick: move |_| on_discard.call(discard_card.clone()),
                        "Discard"
                    }
                }
            }
        }
    }
}
