//! Error types for Holocron

use thiserror::Error;

use crate::types::{PackId, Section};

/// Main error type for Holocron operations
#[derive(Error, Debug)]
pub enum AlbumError {
    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with something we could not use
    #[error("API error: {0}")]
    Api(String),

    /// A record URL without a trailing numeric id
    #[error("Invalid resource URL: {0}")]
    InvalidResourceUrl(String),

    /// Not enough points for a purchase
    #[error("Insufficient points: have {have}, need {need}")]
    InsufficientPoints { have: u32, need: u32 },

    /// Another pack is currently being opened
    #[error("Pack {0} is already in progress")]
    PackInProgress(PackId),

    /// Pack purchases are cooling down
    #[error("Pack locked for another {remaining_secs}s")]
    PackLocked { remaining_secs: u64 },

    /// Collection too small to fill a pack section
    #[error("Not enough cards in section {0}")]
    NotEnoughCards(Section),
}

/// Result type alias using AlbumError
pub type AlbumResult<T> = Result<T, AlbumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AlbumError::InsufficientPoints { have: 10, need: 25 };
        assert_eq!(format!("{}", err), "Insufficient points: have 10, need 25");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let album_err: AlbumError = io_err.into();
        assert!(matches!(album_err, AlbumError::Io(_)));
    }
}
