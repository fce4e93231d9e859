//! Session layer: named live matches owned by a host process.
//!
//! A `SessionManager` is plain owned state - the embedding application
//! decides where it lives and how it is shared. Session ids are stable for
//! the lifetime of the manager.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::engine::MatchEngine;
use crate::error::{MatchError, Result};
use crate::models::{Action, MatchConfig, MatchSummary};

/// One live match plus bookkeeping.
#[derive(Debug)]
pub struct MatchSession {
    pub id: String,
    pub engine: MatchEngine,
    pub started_at: DateTime<Utc>,
}

/// Owns every live match, keyed by session id.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: HashMap<String, MatchSession>,
    next_id: u64,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a match and return its id. A seed makes the match replayable.
    pub fn create(&mut self, config: MatchConfig, seed: Option<u64>) -> Result<String> {
        let engine = match seed {
            Some(seed) => MatchEngine::with_seed(config, seed)?,
            None => MatchEngine::new(config)?,
        };
        self.next_id += 1;
        let id = format!("match-{}", self.next_id);
        log::info!("session {} started ({} overs)", id, config.max_overs);
        self.sessions.insert(
            id.clone(),
            MatchSession { id: id.clone(), engine, started_at: Utc::now() },
        );
        Ok(id)
    }

    pub fn get(&self, id: &str) -> Result<&MatchSession> {
        self.sessions.get(id).ok_or_else(|| MatchError::UnknownSession(id.to_string()))
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut MatchSession> {
        self.sessions.get_mut(id).ok_or_else(|| MatchError::UnknownSession(id.to_string()))
    }

    /// Play one ball in the named session.
    pub fn play_ball(&mut self, id: &str, action: Option<Action>) -> Result<()> {
        self.get_mut(id)?.engine.play_ball(action)
    }

    pub fn summary(&self, id: &str) -> Result<Option<MatchSummary>> {
        Ok(self.get(id)?.engine.match_summary())
    }

    /// Restart the named session's match under a new configuration.
    pub fn reset(&mut self, id: &str, config: MatchConfig) -> Result<()> {
        self.get_mut(id)?.engine.reset(config)
    }

    /// Drop a session; unknown ids are not an error.
    pub fn remove(&mut self, id: &str) -> bool {
        self.sessions.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
