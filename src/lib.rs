//! # Swiss Tracker
//!
//! A local Swiss-system tournament tracker.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, match results, standings, pairings)
//! - **storage**: Record store over local JSONL files
//! - **calculate**: Standings and next-round pairing computation
//! - **config**: Configuration loading and validation
//!
//! Standings are a pure function of the roster and match history and are
//! recomputed on every request. Pairings consume standings two at a time
//! in rank order, so each player meets an opponent with an equal or
//! nearly-equal record.

pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;

pub use models::*;
