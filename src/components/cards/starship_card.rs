//! Starship card

use dioxus::prelude::*;
use holocron_core::{SpecialClass, Starship};

use super::card_class;

#[component]
pub fn StarshipCard(starship: Starship, special: Option<SpecialClass>) -> Element {
    rsx! {
        div { class: card_class(special),
            div { class: "card-emblem", "\u{1F680}" }
            h3 { class: "card-name", "{starship.name}" }
            ul { class: "card-attributes",
                li { "Model: {starship.model}" }
                li { "Class: {starship.starship_class}" }
                li { "Crew: {starship.crew}" }
            }
        }
    }
}
