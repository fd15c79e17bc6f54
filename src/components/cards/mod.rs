//! Card components for Holocron.

mod film_card;
mod pack_card;
mod pack_reveal;
mod person_card;
mod starship_card;

pub use film_card::FilmCard;
pub use pack_card::PackCard;
pub use pack_reveal::PackRevealModal;
pub use person_card::PersonCard;
pub use starship_card::StarshipCard;

use holocron_core::SpecialClass;

/// CSS class for a card frame given its rarity
pub fn card_class(special: Option<SpecialClass>) -> &'static str {
    match special {
        Some(SpecialClass::Gold) => "card card--gold",
        Some(SpecialClass::Limited) => "card card--limited",
        None => "card",
    }
}

/// Badge label for a rarity
pub fn rarity_label(special: Option<SpecialClass>) -> &'static str {
    match special {
        Some(SpecialClass::Gold) => "Special - Gold",
        Some(SpecialClass::Limited) => "Special - Limited",
        None => "Regular",
    }
}

/// Badge class for a rarity
pub fn rarity_class(special: Option<SpecialClass>) -> &'static str {
    match special {
        Some(SpecialClass::Gold) => "badge badge--gold",
        Some(SpecialClass::Limited) => "badge badge--limited",
        None => "badge",
    }
}
