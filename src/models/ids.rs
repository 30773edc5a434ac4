//! Store-assigned player identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A player's unique id, assigned sequentially by the record store.
///
/// Ids start at 1 and ascend in registration order, so sorting by id
/// recovers the order players signed up in.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u64);

impl PlayerId {
    /// Create a PlayerId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// The id the store hands out after this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_ordering_matches_registration_order() {
        let first = PlayerId::new(1);
        let second = PlayerId::new(2);
        assert!(first < second);
    }

    #[test]
    fn test_player_id_next() {
        assert_eq!(PlayerId::new(7).next(), PlayerId::new(8));
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(format!("{}", PlayerId::new(42)), "42");
    }

    #[test]
    fn test_player_id_debug() {
        assert_eq!(format!("{:?}", PlayerId::new(42)), "PlayerId(42)");
    }

    #[test]
    fn test_player_id_serialization() {
        let id = PlayerId::new(3);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "3");
        let back: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_player_id_from_u64() {
        let id = PlayerId::from(9);
        assert_eq!(id.value(), 9);
    }
}
