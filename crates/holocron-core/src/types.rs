//! Core types for Holocron

use serde::{Deserialize, Serialize};

/// Album section a card belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Films,
    People,
    Starships,
}

impl Section {
    /// All sections in album order
    pub const ALL: [Section; 3] = [Section::Films, Section::People, Section::Starships];

    /// Stable key used for storage and API paths
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Films => "films",
            Section::People => "people",
            Section::Starships => "starships",
        }
    }

    /// Human-readable section label
    pub fn label(&self) -> &'static str {
        match self {
            Section::Films => "Films",
            Section::People => "Characters",
            Section::Starships => "Starships",
        }
    }

    /// Parse from the stable key
    pub fn from_str_key(s: &str) -> Option<Self> {
        match s {
            "films" => Some(Section::Films),
            "people" => Some(Section::People),
            "starships" => Some(Section::Starships),
            _ => None,
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rarity tag a card slot can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialClass {
    Gold,
    Limited,
}

impl SpecialClass {
    pub fn label(&self) -> &'static str {
        match self {
            SpecialClass::Gold => "Gold",
            SpecialClass::Limited => "Limited",
        }
    }
}

impl std::fmt::Display for SpecialClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecialClass::Gold => write!(f, "gold"),
            SpecialClass::Limited => write!(f, "limited"),
        }
    }
}

/// Identifier of a purchasable pack (1..=4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackId(pub u8);

impl PackId {
    /// All packs offered in the shop
    pub const ALL: [PackId; 4] = [PackId(1), PackId(2), PackId(3), PackId(4)];

    /// Validate a raw pack number
    pub fn new(n: u8) -> Option<Self> {
        if (1..=4).contains(&n) {
            Some(Self(n))
        } else {
            None
        }
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for PackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A collected card as stored in the album
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
    /// Slot number within the section (1-based, from the record URL)
    pub id: u32,
    pub section: Section,
    /// Display name (film title, character or ship name)
    pub name: String,
    /// Canonical record URL at the API
    pub url: String,
    /// Rarity assigned to the slot at collection time
    pub special: Option<SpecialClass>,
    /// Unix timestamp (seconds) of collection
    pub collected_at: i64,
}

impl Sticker {
    pub fn new(
        id: u32,
        section: Section,
        name: impl Into<String>,
        url: impl Into<String>,
        special: Option<SpecialClass>,
    ) -> Self {
        Self {
            id,
            section,
            name: name.into(),
            url: url.into(),
            special,
            collected_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// One page of a paginated API listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcePage<T> {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Character record from the API (field subset)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub mass: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub hair_color: String,
    #[serde(default)]
    pub eye_color: String,
    #[serde(default)]
    pub birth_year: String,
    pub url: String,
}

/// Film record from the API (field subset)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    #[serde(default)]
    pub episode_id: u32,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub producer: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub opening_crawl: String,
    pub url: String,
}

/// Starship record from the API (field subset)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Starship {
    pub name: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub crew: String,
    #[serde(default)]
    pub passengers: String,
    #[serde(default)]
    pub starship_class: String,
    pub url: String,
}

/// Common surface over the three record kinds, used by pack generation
pub trait Resource: Clone {
    fn section() -> Section;
    fn url(&self) -> &str;
    fn display_name(&self) -> &str;
}

impl Resource for Person {
    fn section() -> Section {
        Section::People
    }
    fn url(&self) -> &str {
        &self.url
    }
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Resource for Film {
    fn section() -> Section {
        Section::Films
    }
    fn url(&self) -> &str {
        &self.url
    }
    fn display_name(&self) -> &str {
        &self.title
    }
}

impl Resource for Starship {
    fn section() -> Section {
        Section::Starships
    }
    fn url(&self) -> &str {
        &self.url
    }
    fn display_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_roundtrip() {
        for section in Section::ALL {
            assert_eq!(Section::from_str_key(section.as_str()), Some(section));
        }
        assert_eq!(Section::from_str_key("planets"), None);
    }

    #[test]
    fn test_pack_id_range() {
        assert_eq!(PackId::new(1), Some(PackId(1)));
        assert_eq!(PackId::new(4), Some(PackId(4)));
        assert_eq!(PackId::new(0), None);
        assert_eq!(PackId::new(5), None);
    }

    #[test]
    fn test_pack_id_display() {
        assert_eq!(format!("{}", PackId(3)), "#3");
    }

    #[test]
    fn test_sticker_new_sets_timestamp() {
        let sticker = Sticker::new(
            7,
            Section::People,
            "Beru Whitesun Lars",
            "https://swapi.dev/api/people/7/",
            None,
        );
        assert_eq!(sticker.id, 7);
        assert!(sticker.collected_at > 0);
        assert!(sticker.special.is_none());
    }

    #[test]
    fn test_special_class_serde_lowercase() {
        let json = serde_json::to_string(&SpecialClass::Gold).unwrap();
        assert_eq!(json, "\"gold\"");
        let back: SpecialClass = serde_json::from_str("\"limited\"").unwrap();
        assert_eq!(back, SpecialClass::Limited);
    }
}
