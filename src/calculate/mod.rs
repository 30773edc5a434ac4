//! Standings and pairing computation engine.
//!
//! Computes derived results from stored tournament data:
//! - Ranked standings from the full match history
//! - Swiss next-round pairings from adjacent standings entries
//!
//! Everything here is pure computation over data already read from the
//! record store; standings are recomputed on every request and never
//! cached.

use std::cmp::Reverse;

use thiserror::Error;
use tracing::debug;

use crate::models::{MatchResult, Pair, Player, StandingEntry};
use crate::storage::{RecordSource, StorageError};

/// Errors that can occur while building next-round pairings.
#[derive(Debug, Error)]
pub enum PairingError {
    #[error("cannot pair {0} players: the roster must have an even number of players")]
    InvalidPlayerCount(usize),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Rank players by win record.
///
/// Wins count matches where the player is the recorded winner; matches
/// played count appearances on either side. Players with no matches yet
/// still appear with a 0/0 record. Entries are sorted by wins descending
/// with ties broken by ascending player id (registration order), so the
/// result is deterministic for a fixed input.
pub fn rank_players(players: &[Player], matches: &[MatchResult]) -> Vec<StandingEntry> {
    let mut standings: Vec<StandingEntry> = players
        .iter()
        .map(|player| {
            let wins = matches.iter().filter(|m| m.winner_id == player.id).count() as u32;
            let played = matches.iter().filter(|m| m.involves(player.id)).count() as u32;
            StandingEntry::new(player.id, player.name.clone(), wins, played)
        })
        .collect();

    standings.sort_by_key(|entry| (Reverse(entry.wins), entry.player_id));
    standings
}

/// Pair adjacent standings entries for the next round.
///
/// Consumes the standings two at a time in rank order, so each player
/// meets an opponent with an equal or nearly-equal record. Fails when
/// the roster has an odd number of players, since no pairing could cover
/// every player exactly once.
pub fn pair_adjacent(standings: &[StandingEntry]) -> Result<Vec<Pair>, PairingError> {
    if standings.len() % 2 != 0 {
        return Err(PairingError::InvalidPlayerCount(standings.len()));
    }

    let pairs = standings
        .chunks_exact(2)
        .map(|pair| Pair::from_entries(&pair[0], &pair[1]))
        .collect();

    Ok(pairs)
}

/// Compute current standings from the record store.
///
/// Storage failures propagate unchanged.
pub fn player_standings(source: &dyn RecordSource) -> Result<Vec<StandingEntry>, StorageError> {
    let players = source.list_players()?;
    let matches = source.list_matches()?;

    debug!(
        "Computing standings for {} players over {} matches",
        players.len(),
        matches.len()
    );
    Ok(rank_players(&players, &matches))
}

/// Compute next-round Swiss pairings from the record store.
pub fn swiss_pairings(source: &dyn RecordSource) -> Result<Vec<Pair>, PairingError> {
    let standings = player_standings(source)?;
    pair_adjacent(&standings)
}
