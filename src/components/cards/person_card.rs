//! Character card

use dioxus::prelude::*;
use holocron_core::{Person, SpecialClass};

use super::card_class;

#[component]
pub fn PersonCard(person: Person, special: Option<SpecialClass>) -> Element {
    rsx! {
        div { class: card_class(special),
            div { class: "card-emblem", "\u{1F464}" }
            h3 { class: "card-name", "{person.name}" }
            ul { class: "card-attributes",
                li { "Birth year: {person.birth_year}" }
                li { "Gender: {person.gender}" }
                li { "Height: {person.height}" }
                li { "Eyes: {person.eye_color}" }
            }
        }
    }
}
