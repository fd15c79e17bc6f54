//! Persistent storage using redb.
//!
//! This module provides ACID-compliant storage for:
//! - Collected stickers (one JSON blob per album slot)
//! - Per-slot special-class assignments
//! - The points wallet
//! - Pack purchase state (active pack, cooldown)

use crate::error::AlbumError;
use crate::packs::PackState;
use crate::types::{Section, SpecialClass, Sticker};
use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;

// Table definitions
const STICKERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("stickers");
const SPECIALS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("special_assignments");
const WALLET_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("wallet");
const PACK_STATE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("pack_state");

/// Wallet storage key (there is a single points balance)
const POINTS_KEY: &str = "points";

/// Pack state storage key (there is a single global pack state)
const PACK_STATE_KEY: &str = "state";

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

/// Key of an album slot within the sticker/special tables
fn slot_key(section: Section, id: u32) -> String {
    format!("{}/{}", section.as_str(), id)
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// This will:
    /// - Create the database directory if it doesn't exist
    /// - Initialize the database file
    /// - Create all required tables
    pub fn new(path: impl AsRef<Path>) -> Result<Self, AlbumError> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Open/create database
        let db = Database::create(path)?;

        // Initialize all tables
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(STICKERS_TABLE)?;
            let _ = write_txn.open_table(SPECIALS_TABLE)?;
            let _ = write_txn.open_table(WALLET_TABLE)?;
            let _ = write_txn.open_table(PACK_STATE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Sticker Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Save a sticker into its album slot.
    ///
    /// If the slot is already filled it will be overwritten; callers that
    /// need "first write wins" check [`Storage::load_sticker`] first.
    pub fn save_sticker(&self, sticker: &Sticker) -> Result<(), AlbumError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(STICKERS_TABLE)?;
            let data = serde_json::to_vec(sticker)
                .map_err(|e| AlbumError::Serialization(e.to_string()))?;
            let key = slot_key(sticker.section, sticker.id);
            table.insert(key.as_str(), data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load the sticker in a slot, if collected.
    pub fn load_sticker(&self, section: Section, id: u32) -> Result<Option<Sticker>, AlbumError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(STICKERS_TABLE)?;
        let key = slot_key(section, id);

        match table.get(key.as_str())? {
            Some(v) => {
                let sticker: Sticker = serde_json::from_slice(v.value())
                    .map_err(|e| AlbumError::Serialization(e.to_string()))?;
                Ok(Some(sticker))
            }
            None => Ok(None),
        }
    }

    /// Load all collected stickers of a section, ordered by slot id.
    pub fn list_stickers(&self, section: Section) -> Result<Vec<Sticker>, AlbumError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(STICKERS_TABLE)?;

        let prefix = format!("{}/", section.as_str());
        let mut stickers = Vec::new();
        for entry in table.iter()? {
            let (key, value) = entry?;
            if !key.value().starts_with(&prefix) {
                continue;
            }
            let sticker: Sticker = serde_json::from_slice(value.value())
                .map_err(|e| AlbumError::Serialization(e.to_string()))?;
            stickers.push(sticker);
        }
        stickers.sort_by_key(|s| s.id);
        Ok(stickers)
    }

    /// Count collected stickers of a section.
    pub fn count_stickers(&self, section: Section) -> Result<u32, AlbumError> {
        Ok(self.list_stickers(section)?.len() as u32)
    }

    /// Remove all stickers and special assignments (album reset).
    pub fn clear_album(&self) -> Result<(), AlbumError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            write_txn.delete_table(STICKERS_TABLE)?;
            write_txn.delete_table(SPECIALS_TABLE)?;
            let _ = write_txn.open_table(STICKERS_TABLE)?;
            let _ = write_txn.open_table(SPECIALS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Special Assignment Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Persist the rarity assigned to a slot.
    ///
    /// `None` is a real value: the slot was rolled and came up regular.
    pub fn save_special(
        &self,
        section: Section,
        id: u32,
        special: Option<SpecialClass>,
    ) -> Result<(), AlbumError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SPECIALS_TABLE)?;
            let data = serde_json::to_vec(&special)
                .map_err(|e| AlbumError::Serialization(e.to_string()))?;
            let key = slot_key(section, id);
            table.insert(key.as_str(), data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load the rarity assigned to a slot.
    ///
    /// The outer `None` means the slot was never rolled; `Some(None)` means
    /// it was rolled and is regular.
    pub fn load_special(
        &self,
        section: Section,
        id: u32,
    ) -> Result<Option<Option<SpecialClass>>, AlbumError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(SPECIALS_TABLE)?;
        let key = slot_key(section, id);

        match table.get(key.as_str())? {
            Some(v) => {
                let special: Option<SpecialClass> = serde_json::from_slice(v.value())
                    .map_err(|e| AlbumError::Serialization(e.to_string()))?;
                Ok(Some(special))
            }
            None => Ok(None),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Wallet Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Persist the points balance.
    pub fn save_points(&self, points: u32) -> Result<(), AlbumError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(WALLET_TABLE)?;
            let data = serde_json::to_vec(&points)
                .map_err(|e| AlbumError::Serialization(e.to_string()))?;
            table.insert(POINTS_KEY, data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load the points balance.
    ///
    /// Returns `None` when the wallet was never initialized.
    pub fn load_points(&self) -> Result<Option<u32>, AlbumError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(WALLET_TABLE)?;

        match table.get(POINTS_KEY)? {
            Some(v) => {
                let points: u32 = serde_json::from_slice(v.value())
                    .map_err(|e| AlbumError::Serialization(e.to_string()))?;
                Ok(Some(points))
            }
            None => Ok(None),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Pack State Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Persist the global pack state.
    pub fn save_pack_state(&self, state: &PackState) -> Result<(), AlbumError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PACK_STATE_TABLE)?;
            let data = serde_json::to_vec(state)
                .map_err(|e| AlbumError::Serialization(e.to_string()))?;
            table.insert(PACK_STATE_KEY, data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load the global pack state.
    ///
    /// Returns `None` if no pack was ever opened.
    pub fn load_pack_state(&self) -> Result<Option<PackState>, AlbumError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PACK_STATE_TABLE)?;

        match table.get(PACK_STATE_KEY)? {
            Some(v) => {
                let state: PackState = serde_json::from_slice(v.value())
                    .map_err(|e| AlbumError::Serialization(e.to_string()))?;
                Ok(Some(state))
            }
            None => Ok(None),
        }
    }
}
