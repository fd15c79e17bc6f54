//! Holocron Core Library
//!
//! Collectible-card album engine over a public REST card API.
//!
//! ## Overview
//!
//! Holocron lets a user buy randomized card packs with virtual points and
//! collect the cards in a persistent album. The album, the points wallet,
//! and the pack cooldown live in an embedded redb database; card data comes
//! from a SWAPI-compatible REST API through a per-URL response cache.
//!
//! ## Quick Start
//!
//! ```ignore
//! use holocron_core::{AlbumEngine, PackId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = AlbumEngine::new("~/.holocron/data")?;
//!
//!     // Buy a pack
//!     let opened = engine.purchase_pack(PackId(1)).await?;
//!
//!     // Keep every card
//!     for card in &opened.cards {
//!         engine.add_sticker(&card.to_sticker())?;
//!     }
//!     engine.finish_pack()?;
//!
//!     println!("{} / {} collected", engine.progress()?.collected, engine.progress()?.total);
//!     Ok(())
//! }
//! ```

pub mod album;
pub mod api;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod generator;
pub mod packs;
pub mod special;
pub mod storage;
pub mod types;

// Re-exports
pub use album::{Album, AlbumProgress, SectionProgress, PACK_COST, STARTING_POINTS};
pub use api::{resource_id_from_url, ApiClient, DEFAULT_API_URL};
pub use engine::{AlbumEngine, CardDetail, OpenedPack, RevealedCard};
pub use error::{AlbumError, AlbumResult};
pub use generator::{
    Collections, PackConfig, PackConfigId, PackContent, SectionCounts, PACK_CONFIGS, PACK_SIZE,
};
pub use packs::{
    format_cooldown, is_pack_locked, remaining_seconds, PackState, PackTracker, COOLDOWN_MS,
};
pub use storage::Storage;
pub use types::*;
