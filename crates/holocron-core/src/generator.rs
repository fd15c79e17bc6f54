//! Random pack content generation.
//!
//! A pack always holds 5 cards drawn from one of two configurations. Cards
//! are drawn without replacement across the whole pack, keyed by record URL.

use std::collections::HashSet;

use rand::Rng;

use crate::types::{Film, Person, Resource, Starship};

/// Cards per pack, fixed across configurations
pub const PACK_SIZE: u32 = 5;

/// Which pack configuration was drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackConfigId {
    A,
    B,
}

impl std::fmt::Display for PackConfigId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackConfigId::A => write!(f, "A"),
            PackConfigId::B => write!(f, "B"),
        }
    }
}

/// Cards per section for one configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCounts {
    pub films: u32,
    pub people: u32,
    pub starships: u32,
}

/// One of the possible pack layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackConfig {
    pub id: PackConfigId,
    pub label: &'static str,
    pub counts: SectionCounts,
}

/// The two layouts a pack can come in
pub const PACK_CONFIGS: [PackConfig; 2] = [
    PackConfig {
        id: PackConfigId::A,
        label: "1 film, 3 characters, 1 starship",
        counts: SectionCounts {
            films: 1,
            people: 3,
            starships: 1,
        },
    },
    PackConfig {
        id: PackConfigId::B,
        label: "3 characters, 2 starships",
        counts: SectionCounts {
            films: 0,
            people: 3,
            starships: 2,
        },
    },
];

/// Pick a configuration uniformly at random.
pub fn pick_config<R: Rng + ?Sized>(rng: &mut R) -> PackConfig {
    PACK_CONFIGS[rng.random_range(0..PACK_CONFIGS.len())]
}

/// Full listings the generator draws from
#[derive(Debug, Clone, Default)]
pub struct Collections {
    pub films: Vec<Film>,
    pub people: Vec<Person>,
    pub starships: Vec<Starship>,
}

/// The cards selected for one pack
#[derive(Debug, Clone, Default)]
pub struct PackContent {
    pub films: Vec<Film>,
    pub people: Vec<Person>,
    pub starships: Vec<Starship>,
}

impl PackContent {
    pub fn len(&self) -> usize {
        self.films.len() + self.people.len() + self.starships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Draw `count` distinct items, skipping URLs already used in this pack.
///
/// Returns `None` when the remaining pool cannot fill the request.
pub fn select_random_items<T: Resource, R: Rng + ?Sized>(
    items: &[T],
    count: u32,
    used_urls: &mut HashSet<String>,
    rng: &mut R,
) -> Option<Vec<T>> {
    if count == 0 {
        return Some(Vec::new());
    }

    let mut pool: Vec<&T> = items
        .iter()
        .filter(|item| !used_urls.contains(item.url()))
        .collect();
    if (pool.len() as u32) < count {
        return None;
    }

    let mut selection = Vec::with_capacity(count as usize);
    while (selection.len() as u32) < count {
        let index = rng.random_range(0..pool.len());
        let chosen = pool.swap_remove(index);
        used_urls.insert(chosen.url().to_string());
        selection.push(chosen.clone());
    }

    Some(selection)
}

/// Generate a pack for a configuration, or `None` when any section runs dry.
pub fn generate_pack_content<R: Rng + ?Sized>(
    config: &PackConfig,
    collections: &Collections,
    rng: &mut R,
) -> Option<PackContent> {
    let mut used_urls = HashSet::new();

    let films = select_random_items(&collections.films, config.counts.films, &mut used_urls, rng)?;
    let people =
        select_random_items(&collections.people, config.counts.people, &mut used_urls, rng)?;
    let starships = select_random_items(
        &collections.starships,
        config.counts.starships,
        &mut used_urls,
        rng,
    )?;

    Some(PackContent {
        films,
        people,
        starships,
    })
}
