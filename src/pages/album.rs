//! Album Page
//!
//! The collection itself: per-section progress bars and a carousel of the
//! collected cards in each section, plus the reset action.

use dioxus::prelude::*;
use holocron_core::{
    AlbumProgress, CardDetail, Film, Person, Section, Starship, Sticker,
};

use crate::components::cards::{card_class, FilmCard, PersonCard, StarshipCard};
use crate::components::{Carousel, Modal, NavHeader, NavLocation};
use crate::context::{
    push_notification, use_engine, use_engine_ready, use_notifications, NotificationKind,
};

/// A collected sticker with its (best effort) full record
type AlbumCard = (Sticker, Option<CardDetail>);

#[component]
pub fn Album() -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();
    let notifications = use_notifications();

    let mut progress: Signal<Option<AlbumProgress>> = use_signal(|| None);
    let mut sections: Signal<Vec<(Section, Vec<AlbumCard>)>> = use_signal(Vec::new);
    let mut show_reset = use_signal(|| false);
    let mut refresh_tick: Signal<u32> = use_signal(|| 0);

    use_effect(move || {
        let _ = refresh_tick();
        if engine_ready() {
            spawn(async move {
                let shared = engine();
                let guard = shared.read().await;
                let Some(ref eng) = *guard else { return };

                match eng.progress() {
                    Ok(p) => progress.set(Some(p)),
                    Err(e) => tracing::error!("failed to load progress: {}", e),
                }

                let mut loaded = Vec::with_capacity(Section::ALL.len());
                for section in Section::ALL {
                    let stickers = match eng.list_stickers(section) {
                        Ok(stickers) => stickers,
                        Err(e) => {
                            tracing::error!("failed to list {} stickers: {}", section, e);
                            continue;
                        }
                    };

                    let mut cards = Vec::with_capacity(stickers.len());
                    for sticker in stickers {
                        let detail = fetch_detail(eng, &sticker).await;
                        cards.push((sticker, detail));
                    }
                    loaded.push((section, cards));
                }
                sections.set(loaded);
            });
        }
    });

    let handle_reset = move |_| {
        show_reset.set(false);
        spawn(async move {
            let shared = engine();
            let guard = shared.read().await;
            if let Some(ref eng) = *guard {
                match eng.reset_album() {
                    Ok(()) => {
                        push_notification(
                            notifications,
                            "Album reset. Your starting balance is back.",
                            NotificationKind::Success,
                        );
                        refresh_tick += 1;
                    }
                    Err(e) => {
                        tracing::error!("failed to reset album: {}", e);
                        push_notification(
                            notifications,
                            "Could not reset the album.",
                            NotificationKind::Error,
                        );
                    }
                }
            }
        });
    };

    rsx! {
        NavHeader { current: NavLocation::Album }

        main { class: "page",
            div { class: "album-header",
                h1 { "Your album" }
                if let Some(p) = progress() {
                    p { class: "album-summary",
                        "{p.collected} / {p.total} cards ({p.percent()}%)"
                    }
                }
                button {
                    class: "btn btn--danger",
                    onclick: move |_| show_reset.set(true),
                    "Reset album"
                }
            }

            if let Some(p) = progress() {
                for sp in p.sections.clone() {
                    section { key: "{sp.section}", class: "album-section",
                        div { class: "album-section-header",
                            h2 { {sp.section.label()} }
                            span { class: "album-section-count",
                                "{sp.collected} / {sp.total}"
                            }
                        }
                        div { class: "progress-track",
                            div {
                                class: "progress-fill",
                                style: "width: {sp.percent()}%;",
                            }
                        }

                        {render_section(&sections.read(), sp.section)}
                    }
                }
            } else {
                p { class: "album-loading", "Loading your album..." }
            }
        }

        Modal {
            show: show_reset(),
            title: "Reset album".to_string(),
            on_close: move |_| show_reset.set(false),

            p {
                "This wipes every collected card and restores the starting "
                "balance. There is no undo."
            }
            div { class: "modal-actions",
                button {
                    class: "btn btn--danger",
                    onclick: handle_reset,
                    "Reset everything"
                }
                button {
                    class: "btn btn--ghost",
                    onclick: move |_| show_reset.set(false),
                    "Keep my album"
                }
            }
        }
    }
}

/// Full record for a sticker, from the cached API. `None` means the archive
/// was unreachable; the sticker still renders with its stored name.
async fn fetch_detail(
    eng: &holocron_core::AlbumEngine,
    sticker: &Sticker,
) -> Option<CardDetail> {
    let result = match sticker.section {
        Section::People => eng
            .api()
            .fetch_resource_by_url::<Person>(&sticker.url)
            .await
            .map(CardDetail::Person),
        Section::Films => eng
            .api()
            .fetch_resource_by_url::<Film>(&sticker.url)
            .await
            .map(CardDetail::Film),
        Section::Starships => eng
            .api()
            .fetch_resource_by_url::<Starship>(&sticker.url)
            .await
            .map(CardDetail::Starship),
    };

    match result {
        Ok(detail) => Some(detail),
        Err(e) => {
            tracing::warn!(url = %sticker.url, "detail fetch failed: {}", e);
            None
        }
    }
}

/// Carousel of collected cards for one section.
fn render_section(sections: &[(Section, Vec<AlbumCard>)], section: Section) -> Element {
    let cards = sections
        .iter()
        .find(|(s, _)| *s == section)
        .map(|(_, cards)| cards.as_slice())
        .unwrap_or(&[]);

    if cards.is_empty() {
        return rsx! {
            p { class: "album-empty", "Nothing collected here yet. Open a pack!" }
        };
    }

    let items: Vec<Element> = cards.iter().map(|(sticker, detail)| {
        match detail {
            Some(CardDetail::Person(person)) => rsx! {
                PersonCard { person: person.clone(), special: sticker.special }
            },
            Some(CardDetail::Film(film)) => rsx! {
                FilmCard { film: film.clone(), special: sticker.special }
            },
            Some(CardDetail::Starship(starship)) => rsx! {
                StarshipCard { starship: starship.clone(), special: sticker.special }
            },
            None => rsx! {
                div { class: card_class(sticker.special),
                    h3 { class: "card-name", "{sticker.name}" }
                    p { class: "card-offline", "Details unavailable offline" }
                }
            },
        }
    }).collect();

    rsx! {
        Carousel { items }
    }
}
