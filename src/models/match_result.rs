//! Match result model — the outcome of a single game between two players.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PlayerId;

/// The recorded outcome of one match.
///
/// Every match has exactly one winner and one loser; there are no draws.
/// Results are append-only and the same two players may meet more than
/// once, so duplicates are legal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// The winning player
    pub winner_id: PlayerId,

    /// The losing player
    pub loser_id: PlayerId,

    /// When this result was reported
    pub reported_at: DateTime<Utc>,
}

impl MatchResult {
    /// Create a new MatchResult.
    pub fn new(winner_id: PlayerId, loser_id: PlayerId) -> Self {
        Self {
            winner_id,
            loser_id,
            reported_at: Utc::now(),
        }
    }

    /// Whether the given player took part in this match, on either side.
    pub fn involves(&self, id: PlayerId) -> bool {
        self.winner_id == id || self.loser_id == id
    }
}
