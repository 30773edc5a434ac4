//! The record store: registration, match recording, counts, and reset.

use tracing::info;

use crate::models::{MatchResult, Player, PlayerId};

use super::{EntityType, JsonlReader, JsonlWriter, RecordSource, StorageConfig, StorageError};

/// Durable store for players and match results.
///
/// Each operation opens the underlying JSONL file, performs a single
/// append or whole-file rewrite, and returns. Nothing is cached between
/// calls; readers always see the file as written.
pub struct RecordStore {
    config: StorageConfig,
}

impl RecordStore {
    /// Create a store over the given storage layout.
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Register a player, assigning the next free id.
    ///
    /// Ids ascend in registration order starting at 1, so the roster's
    /// id order doubles as its registration order.
    pub fn register_player(&self, name: &str) -> Result<Player, StorageError> {
        let players = self.list_players()?;
        let id = players
            .last()
            .map(|p| p.id.next())
            .unwrap_or_else(|| PlayerId::new(1));

        let player = Player::new(id, name.to_string());
        JsonlWriter::for_entity(&self.config, EntityType::Player).append(&player)?;

        info!("Registered player {} ({})", player.name, player.id);
        Ok(player)
    }

    /// Record the outcome of a single match between two players.
    ///
    /// Both ids must reference registered players and must differ.
    pub fn report_match(
        &self,
        winner_id: PlayerId,
        loser_id: PlayerId,
    ) -> Result<MatchResult, StorageError> {
        if winner_id == loser_id {
            return Err(StorageError::SelfMatch);
        }

        let players = self.list_players()?;
        for id in [winner_id, loser_id] {
            if !players.iter().any(|p| p.id == id) {
                return Err(StorageError::UnknownPlayer(id));
            }
        }

        let result = MatchResult::new(winner_id, loser_id);
        JsonlWriter::for_entity(&self.config, EntityType::Match).append(&result)?;

        info!("Recorded match: {} beat {}", winner_id, loser_id);
        Ok(result)
    }

    /// Number of registered players.
    pub fn count_players(&self) -> Result<usize, StorageError> {
        JsonlReader::<Player>::for_entity(&self.config, EntityType::Player).count()
    }

    /// Number of recorded matches.
    pub fn count_matches(&self) -> Result<usize, StorageError> {
        JsonlReader::<MatchResult>::for_entity(&self.config, EntityType::Match).count()
    }

    /// Remove all match records.
    pub fn clear_matches(&self) -> Result<(), StorageError> {
        JsonlWriter::<MatchResult>::for_entity(&self.config, EntityType::Match).write_all(&[])?;
        info!("Cleared all match records");
        Ok(())
    }

    /// Remove all player records, along with the matches that reference
    /// them.
    pub fn clear_players(&self) -> Result<(), StorageError> {
        self.clear_matches()?;
        JsonlWriter::<Player>::for_entity(&self.config, EntityType::Player).write_all(&[])?;
        info!("Cleared all player records");
        Ok(())
    }
}

impl RecordSource for RecordStore {
    fn list_players(&self) -> Result<Vec<Player>, StorageError> {
        JsonlReader::for_entity(&self.config, EntityType::Player).read_all()
    }

    fn list_matches(&self) -> Result<Vec<MatchResult>, StorageError> {
        JsonlReader::for_entity(&self.config, EntityType::Match).read_all()
    }
}
