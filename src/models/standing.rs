//! Standing entry model — one row of the ranked standings list.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// A player's current standing, derived from the full match history.
///
/// Standings are a pure function of the roster and match history and are
/// recomputed on every request; they are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingEntry {
    /// The player this row belongs to
    pub player_id: PlayerId,

    /// Player name (as registered)
    pub player_name: String,

    /// Matches this player has won
    pub wins: u32,

    /// Matches this player has played, on either side
    pub matches_played: u32,
}

impl StandingEntry {
    /// Create a standing entry.
    pub fn new(player_id: PlayerId, player_name: String, wins: u32, matches_played: u32) -> Self {
        Self {
            player_id,
            player_name,
            wins,
            matches_played,
        }
    }

    /// Win rate as a fraction (0.0 to 1.0). Zero matches counts as 0.0.
    pub fn win_rate(&self) -> f64 {
        if self.matches_played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.matches_played)
        }
    }
}
