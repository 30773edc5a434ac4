//! Registered player model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PlayerId;

/// A player registered for the tournament.
///
/// Players are immutable after registration and only removed by a bulk
/// reset. Names need not be unique; the id is the identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier (assigned by the record store)
    pub id: PlayerId,

    /// Player's full name (as registered, need not be unique)
    pub name: String,

    /// When this player was registered
    pub registered_at: DateTime<Utc>,
}

impl Player {
    /// Create a new Player record.
    pub fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            registered_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let player = Player::new(PlayerId::new(1), "Alice".to_string());
        assert_eq!(player.id, PlayerId::new(1));
        assert_eq!(player.name, "Alice");
    }

    #[test]
    fn test_player_names_need_not_be_unique() {
        let a = Player::new(PlayerId::new(1), "Sam Smith".to_string());
        let b = Player::new(PlayerId::new(2), "Sam Smith".to_string());
        assert_eq!(a.name, b.name);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(PlayerId::new(5), "Bob".to_string());
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player.id, deserialized.id);
        assert_eq!(player.name, deserialized.name);
    }
}
