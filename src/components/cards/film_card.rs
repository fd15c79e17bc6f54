//! Film card

use dioxus::prelude::*;
use holocron_core::{Film, SpecialClass};

use super::card_class;

#[component]
pub fn FilmCard(film: Film, special: Option<SpecialClass>) -> Element {
    rsx! {
        div { class: card_class(special),
            div { class: "card-emblem", "\u{1F3AC}" }
            h3 { class: "card-name", "{film.title}" }
            ul { class: "card-attributes",
                li { "Episode {film.episode_id}" }
                li { "Director: {film.director}" }
                li { "Released: {film.release_date}" }
            }
        }
    }
}
