//! Main AlbumEngine - the primary entry point for Holocron
//!
//! AlbumEngine coordinates Storage, the API client, and the album/pack
//! stores for:
//! - Persistent album state (stickers, rarity rolls, points)
//! - Pack purchase gating (active pack, cooldown)
//! - Pack generation and detail re-fetch from the card API
//!
//! # Example
//!
//! ```ignore
//! use holocron_core::AlbumEngine;
//!
//! let engine = AlbumEngine::new("~/.holocron/data")?;
//!
//! let opened = engine.purchase_pack(PackId(1)).await?;
//! for card in &opened.cards {
//!     engine.add_sticker(&card.to_sticker())?;
//! }
//! engine.finish_pack()?;
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::album::{Album, AlbumProgress, PACK_COST};
use crate::api::{resource_id_from_url, ApiClient};
use crate::error::{AlbumError, AlbumResult};
use crate::generator::{
    generate_pack_content, pick_config, Collections, PackConfig, PackContent,
};
use crate::packs::{PackState, PackTracker};
use crate::storage::Storage;
use crate::types::{Film, PackId, Person, Section, SpecialClass, Starship, Sticker};

/// Full record behind a revealed card
#[derive(Debug, Clone, PartialEq)]
pub enum CardDetail {
    Person(Person),
    Film(Film),
    Starship(Starship),
}

/// One card out of an opened pack, ready for the accept/discard decision
#[derive(Debug, Clone, PartialEq)]
pub struct RevealedCard {
    pub section: Section,
    pub id: u32,
    pub name: String,
    pub url: String,
    pub special: Option<SpecialClass>,
    pub detail: CardDetail,
}

impl RevealedCard {
    /// The sticker this card becomes when accepted into the album.
    pub fn to_sticker(&self) -> Sticker {
        Sticker::new(
            self.id,
            self.section,
            self.name.clone(),
            self.url.clone(),
            self.special,
        )
    }
}

/// Result of a successful pack purchase
#[derive(Debug, Clone, PartialEq)]
pub struct OpenedPack {
    pub pack_id: PackId,
    pub config: PackConfig,
    pub cards: Vec<RevealedCard>,
}

/// Main entry point for Holocron
///
/// AlbumEngine manages:
/// - Persistent storage of the album and pack state
/// - The points wallet
/// - Pack purchases against the card API
pub struct AlbumEngine {
    album: Album,
    packs: PackTracker,
    api: ApiClient,
    data_dir: PathBuf,
}

impl AlbumEngine {
    /// Create a new AlbumEngine with the given data directory
    ///
    /// This will:
    /// - Create the data directory if it doesn't exist
    /// - Initialize the storage database and seed the wallet
    pub fn new(data_dir: impl AsRef<Path>) -> AlbumResult<Self> {
        Self::with_api(data_dir, ApiClient::new())
    }

    /// Engine against a custom API endpoint (tests, mirrors).
    pub fn with_api(data_dir: impl AsRef<Path>, api: ApiClient) -> AlbumResult<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;

        let storage = Storage::new(data_dir.join("holocron.redb"))?;
        let album = Album::new(storage.clone())?;
        let packs = PackTracker::new(storage);

        info!(data_dir = %data_dir.display(), "album engine initialized");
        Ok(Self {
            album,
            packs,
            api,
            data_dir,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    fn now_ms() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Album Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Current points balance.
    pub fn points(&self) -> AlbumResult<u32> {
        self.album.points()
    }

    /// Accept a card into the album. Returns `false` for an already filled
    /// slot.
    pub fn add_sticker(&self, sticker: &Sticker) -> AlbumResult<bool> {
        self.album.add_sticker(sticker)
    }

    pub fn is_collected(&self, section: Section, id: u32) -> AlbumResult<bool> {
        self.album.is_collected(section, id)
    }

    pub fn list_stickers(&self, section: Section) -> AlbumResult<Vec<Sticker>> {
        self.album.list_stickers(section)
    }

    pub fn special_class_for(&self, section: Section, id: u32) -> AlbumResult<Option<SpecialClass>> {
        self.album.special_class_for(section, id)
    }

    pub fn progress(&self) -> AlbumResult<AlbumProgress> {
        self.album.progress()
    }

    /// Wipe the album and restore the starting balance.
    pub fn reset_album(&self) -> AlbumResult<()> {
        self.album.reset()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Pack State
    // ═══════════════════════════════════════════════════════════════════════

    /// Current pack state (expired cooldowns dropped).
    pub fn pack_state(&self) -> AlbumResult<PackState> {
        self.packs.state(Self::now_ms())
    }

    /// Seconds left on the purchase cooldown.
    pub fn cooldown_seconds(&self) -> AlbumResult<u64> {
        self.packs.cooldown_seconds(Self::now_ms())
    }

    /// Drop the cooldown (called when a ticker reaches zero).
    pub fn clear_cooldown(&self) -> AlbumResult<()> {
        self.packs.clear_cooldown(Self::now_ms())
    }

    /// Close the reveal of the active pack.
    pub fn finish_pack(&self) -> AlbumResult<()> {
        self.packs.finish_pack(Self::now_ms())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Collections
    // ═══════════════════════════════════════════════════════════════════════

    /// Full listings of all three sections (served from the API cache after
    /// the first load).
    pub async fn collections(&self) -> AlbumResult<Collections> {
        let films = self.api.fetch_all_films().await?;
        let people = self.api.fetch_all_people().await?;
        let starships = self.api.fetch_all_starships().await?;
        Ok(Collections {
            films,
            people,
            starships,
        })
    }

    /// Record counts as reported by the API (films, people, starships).
    pub async fn section_counts(&self) -> AlbumResult<(u32, u32, u32)> {
        let films = self.api.get_films().await?;
        let people = self.api.get_people().await?;
        let starships = self.api.get_starships().await?;
        Ok((films.count, people.count, starships.count))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Pack Purchase
    // ═══════════════════════════════════════════════════════════════════════

    /// Buy and open a pack.
    ///
    /// Gates the purchase on points and the pack store, generates random
    /// content, re-fetches each card for fresh details, then deducts the
    /// cost. The pack stays active until the caller finishes the reveal via
    /// [`AlbumEngine::finish_pack`]. Any failure after the pack was opened
    /// releases it again so persisted state never wedges.
    pub async fn purchase_pack(&self, pack_id: PackId) -> AlbumResult<OpenedPack> {
        let points = self.album.points()?;
        if points < PACK_COST {
            return Err(AlbumError::InsufficientPoints {
                have: points,
                need: PACK_COST,
            });
        }

        let now = Self::now_ms();
        let state = self.packs.state(now)?;
        if let Some(active) = state.active_pack_id {
            if active != pack_id {
                return Err(AlbumError::PackInProgress(active));
            }
        }

        if !self.packs.open_pack(pack_id, now)? {
            let remaining_secs = self.packs.cooldown_seconds(now)?;
            return Err(AlbumError::PackLocked { remaining_secs });
        }

        // The pack is now recorded as active; from here every failure has to
        // release it again.
        match self.open_pack_contents(pack_id).await {
            Ok(opened) => Ok(opened),
            Err(e) => {
                warn!(pack = %pack_id, error = %e, "pack purchase failed, releasing pack");
                if let Err(release) = self.packs.finish_pack(Self::now_ms()) {
                    warn!(error = %release, "failed to release pack after error");
                }
                Err(e)
            }
        }
    }

    async fn open_pack_contents(&self, pack_id: PackId) -> AlbumResult<OpenedPack> {
        let collections = self.collections().await?;

        let config = pick_config(&mut rand::rng());
        debug!(pack = %pack_id, config = %config.id, "pack configuration drawn");

        let content = generate_pack_content(&config, &collections, &mut rand::rng())
            .ok_or_else(|| AlbumError::NotEnoughCards(short_section(&config, &collections)))?;

        let content = self.fetch_pack_details(content).await?;

        if !self.album.spend_points(PACK_COST)? {
            let have = self.album.points()?;
            return Err(AlbumError::InsufficientPoints {
                have,
                need: PACK_COST,
            });
        }

        let cards = self.reveal_cards(content)?;
        info!(pack = %pack_id, cards = cards.len(), "pack purchased");
        Ok(OpenedPack {
            pack_id,
            config,
            cards,
        })
    }

    /// Re-fetch every selected record by URL so the reveal shows fresh data.
    async fn fetch_pack_details(&self, content: PackContent) -> AlbumResult<PackContent> {
        let mut films = Vec::with_capacity(content.films.len());
        for film in &content.films {
            films.push(self.api.fetch_resource_by_url(&film.url).await?);
        }

        let mut people = Vec::with_capacity(content.people.len());
        for person in &content.people {
            people.push(self.api.fetch_resource_by_url(&person.url).await?);
        }

        let mut starships = Vec::with_capacity(content.starships.len());
        for starship in &content.starships {
            starships.push(self.api.fetch_resource_by_url(&starship.url).await?);
        }

        Ok(PackContent {
            films,
            people,
            starships,
        })
    }

    fn reveal_cards(&self, content: PackContent) -> AlbumResult<Vec<RevealedCard>> {
        let mut cards = Vec::with_capacity(content.len());

        for person in content.people {
            let id = resource_id_from_url(&person.url)?;
            cards.push(RevealedCard {
                section: Section::People,
                id,
                name: person.name.clone(),
                url: person.url.clone(),
                special: self.album.special_class_for(Section::People, id)?,
                detail: CardDetail::Person(person),
            });
        }

        for film in content.films {
            let id = resource_id_from_url(&film.url)?;
            cards.push(RevealedCard {
                section: Section::Films,
                id,
                name: film.title.clone(),
                url: film.url.clone(),
                special: self.album.special_class_for(Section::Films, id)?,
                detail: CardDetail::Film(film),
            });
        }

        for starship in content.starships {
            let id = resource_id_from_url(&starship.url)?;
            cards.push(RevealedCard {
                section: Section::Starships,
                id,
                name: starship.name.clone(),
                url: starship.url.clone(),
                special: self.album.special_class_for(Section::Starships, id)?,
                detail: CardDetail::Starship(starship),
            });
        }

        Ok(cards)
    }
}

/// The first section whose pool cannot fill a configuration.
fn short_section(config: &PackConfig, collections: &Collections) -> Section {
    if (collections.films.len() as u32) < config.counts.films {
        Section::Films
    } else if (collections.people.len() as u32) < config.counts.people {
        Section::People
    } else {
        Section::Starships
    }
}
