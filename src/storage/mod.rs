//! Record store — durable storage for players and match results.
//!
//! The store keeps two JSONL files under a data directory:
//! - `players.jsonl`: the registered roster, in registration order
//! - `matches.jsonl`: the full match history, in report order
//!
//! The core standings/pairing logic only ever reads, through the
//! [`RecordSource`] trait. Writes (registration, match reporting, bulk
//! reset) live on [`RecordStore`] and are consumed by the CLI glue.

use std::path::PathBuf;
use thiserror::Error;

use crate::models::{MatchResult, Player, PlayerId};

mod jsonl;
mod store;

pub use jsonl::{EntityType, JsonlReader, JsonlWriter};
pub use store::RecordStore;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown player id: {0}")]
    UnknownPlayer(PlayerId),

    #[error("A player cannot play a match against themselves")]
    SelfMatch,
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn players_path(&self) -> PathBuf {
        self.data_dir.join(EntityType::Player.filename())
    }

    pub fn matches_path(&self) -> PathBuf {
        self.data_dir.join(EntityType::Match.filename())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

/// Read-only view of the record store.
///
/// This is the only boundary the standings/pairing core depends on.
pub trait RecordSource {
    /// All registered players, in registration order.
    fn list_players(&self) -> Result<Vec<Player>, StorageError>;

    /// The full match history, in report order.
    fn list_matches(&self) -> Result<Vec<MatchResult>, StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_paths() {
        let config = StorageConfig::new(PathBuf::from("/data"));

        assert_eq!(config.players_path(), PathBuf::from("/data/players.jsonl"));
        assert_eq!(config.matches_path(), PathBuf::from("/data/matches.jsonl"));
    }

    #[test]
    fn test_storage_config_default() {
        let config = StorageConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
    }
}
