//! Static album shape: slot counts and default-special ids per section.

use crate::types::{Section, SpecialClass};

/// Shape of one album section
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    pub section: Section,
    /// Number of slots in the section (slot ids run 1..=total)
    pub total: u32,
    /// Slots that are seeded gold (1..=special_until)
    pub special_until: u32,
}

const FILMS: SectionSpec = SectionSpec {
    section: Section::Films,
    total: 6,
    special_until: 6,
};

const PEOPLE: SectionSpec = SectionSpec {
    section: Section::People,
    total: 82,
    special_until: 20,
};

const STARSHIPS: SectionSpec = SectionSpec {
    section: Section::Starships,
    total: 36,
    special_until: 10,
};

/// Look up the shape of a section
pub fn section_spec(section: Section) -> SectionSpec {
    match section {
        Section::Films => FILMS,
        Section::People => PEOPLE,
        Section::Starships => STARSHIPS,
    }
}

/// Total slots across the whole album
pub fn album_total() -> u32 {
    Section::ALL.iter().map(|s| section_spec(*s).total).sum()
}

/// Whether a slot is seeded special out of the box
pub fn is_default_special(section: Section, id: u32) -> bool {
    let spec = section_spec(section);
    id >= 1 && id <= spec.special_until
}

/// The seeded rarity for a slot: gold for default-special slots, none otherwise
pub fn default_special(section: Section, id: u32) -> Option<SpecialClass> {
    if is_default_special(section, id) {
        Some(SpecialClass::Gold)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_totals() {
        assert_eq!(section_spec(Section::Films).total, 6);
        assert_eq!(section_spec(Section::People).total, 82);
        assert_eq!(section_spec(Section::Starships).total, 36);
        assert_eq!(album_total(), 124);
    }

    #[test]
    fn test_default_special_ranges() {
        assert!(is_default_special(Section::Films, 1));
        assert!(is_default_special(Section::Films, 6));
        assert!(is_default_special(Section::People, 20));
        assert!(!is_default_special(Section::People, 21));
        assert!(is_default_special(Section::Starships, 10));
        assert!(!is_default_special(Section::Starships, 11));
        assert!(!is_default_special(Section::People, 0));
    }

    #[test]
    fn test_default_special_is_gold() {
        assert_eq!(
            default_special(Section::Starships, 3),
            Some(SpecialClass::Gold)
        );
        assert_eq!(default_special(Section::Starships, 30), None);
    }
}
