//! Pairing model — a head-to-head assignment for the next round.

use serde::{Deserialize, Serialize};

use super::{PlayerId, StandingEntry};

/// One next-round pairing between two players.
///
/// Produced by the pairing engine from adjacent standings entries, so
/// both players carry equal or nearly-equal win records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    /// First player's id (the higher-ranked of the two)
    pub player1_id: PlayerId,

    /// First player's name
    pub player1_name: String,

    /// Second player's id
    pub player2_id: PlayerId,

    /// Second player's name
    pub player2_name: String,
}

impl Pair {
    /// Build a pair from two adjacent standings entries.
    pub fn from_entries(first: &StandingEntry, second: &StandingEntry) -> Self {
        Self {
            player1_id: first.player_id,
            player1_name: first.player_name.clone(),
            player2_id: second.player_id,
            player2_name: second.player_name.clone(),
        }
    }

    /// Whether the given player is on either side of this pair.
    pub fn contains(&self, id: PlayerId) -> bool {
        self.player1_id == id || self.player2_id == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_from_entries() {
        let first = StandingEntry::new(PlayerId::new(1), "Alice".to_string(), 2, 2);
        let second = StandingEntry::new(PlayerId::new(3), "Carol".to_string(), 2, 2);
        let pair = Pair::from_entries(&first, &second);

        assert_eq!(pair.player1_id, PlayerId::new(1));
        assert_eq!(pair.player1_name, "Alice");
        assert_eq!(pair.player2_id, PlayerId::new(3));
        assert_eq!(pair.player2_name, "Carol");
    }

    #[test]
    fn test_pair_contains() {
        let first = StandingEntry::new(PlayerId::new(1), "Alice".to_string(), 0, 0);
        let second = StandingEntry::new(PlayerId::new(2), "Bob".to_string(), 0, 0);
        let pair = Pair::from_entries(&first, &second);

        assert!(pair.contains(PlayerId::new(1)));
        assert!(pair.contains(PlayerId::new(2)));
        assert!(!pair.contains(PlayerId::new(3)));
    }

    #[test]
    fn test_pair_serialization() {
        let first = StandingEntry::new(PlayerId::new(1), "Alice".to_string(), 1, 1);
        let second = StandingEntry::new(PlayerId::new(2), "Bob".to_string(), 1, 1);
        let pair = Pair::from_entries(&first, &second);

        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: Pair = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
