//! # oc_core - Turn-Based Cricket Match Simulation Engine
//!
//! This library provides a deterministic turn-based cricket simulation
//! engine with a JSON API for easy integration with UI shells.
//!
//! ## Features
//! - 100% deterministic matches (same seed + same actions = same result)
//! - Probability-table ball resolution with difficulty modifiers
//! - Ball-by-ball history, commentary, and batting statistics
//! - Session layer for hosting multiple concurrent matches

pub mod api;
pub mod commentary;
pub mod engine;
pub mod error;
pub mod models;
pub mod session;
pub mod stats;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{
    match_state_json, match_summary_json, new_match_json, play_ball_json, NewMatchRequest,
    NewMatchResponse, PlayBallRequest, PlayBallResponse,
};
pub use engine::state::MatchState;
pub use engine::MatchEngine;
pub use error::{MatchError, Result};
pub use models::{
    Action, BallEvent, BallOutcome, DeliveryType, Difficulty, Innings, MatchConfig, MatchSummary,
    MatchWinner, ShotType,
};
pub use session::{MatchSession, SessionManager};
pub use stats::InningsStats;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wire schema version accepted by the JSON API.
pub const SCHEMA_VERSION: u8 = 1;
