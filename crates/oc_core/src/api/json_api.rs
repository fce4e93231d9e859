//! String-in/string-out JSON boundary for embedding shells.
//!
//! Every request carries a `schema_version`; requests with any other
//! version are rejected before touching a session. Responses serialize the
//! engine's own types, so the wire shape follows the serde derives on the
//! models.

use serde::{Deserialize, Serialize};

use crate::commentary;
use crate::error::{MatchError, Result};
use crate::models::{Action, MatchConfig, MatchSummary};
use crate::MatchState;
use crate::session::SessionManager;
use crate::SCHEMA_VERSION;

fn check_schema(found: u8) -> Result<()> {
    if found != SCHEMA_VERSION {
        return Err(MatchError::SchemaVersion { expected: SCHEMA_VERSION, found });
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct NewMatchRequest {
    pub schema_version: u8,
    /// Fixed seed for a replayable match; omitted means entropy-seeded.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub config: MatchConfig,
}

#[derive(Debug, Serialize)]
pub struct NewMatchResponse {
    pub schema_version: u8,
    pub session_id: String,
    pub state: MatchState,
}

#[derive(Debug, Deserialize)]
pub struct PlayBallRequest {
    pub schema_version: u8,
    pub session_id: String,
    /// Absent means "pick a random valid action for the active innings".
    #[serde(default)]
    pub action: Option<Action>,
}

#[derive(Debug, Serialize)]
pub struct PlayBallResponse {
    pub schema_version: u8,
    pub state: MatchState,
    /// Commentary line for the ball just played, if one was bowled.
    pub commentary: Option<String>,
    /// Chase target while the computer bats.
    pub target: Option<u32>,
    /// Present once the match is over.
    pub summary: Option<MatchSummary>,
}

/// Start a match; returns the session id and the fresh state.
pub fn new_match_json(manager: &mut SessionManager, request_json: &str) -> Result<String> {
    let request: NewMatchRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let session_id = manager.create(request.config, request.seed)?;
    let state = manager.get(&session_id)?.engine.state().clone();
    let response =
        NewMatchResponse { schema_version: SCHEMA_VERSION, session_id, state };
    Ok(serde_json::to_string(&response)?)
}

/// Play one ball in an existing session.
pub fn play_ball_json(manager: &mut SessionManager, request_json: &str) -> Result<String> {
    let request: PlayBallRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let balls_before = manager.get(&request.session_id)?.engine.state().history.len();
    manager.play_ball(&request.session_id, request.action)?;

    let engine = &manager.get(&request.session_id)?.engine;
    let state = engine.state().clone();
    let commentary = if state.history.len() > balls_before {
        state.history.last().map(commentary::describe)
    } else {
        None
    };
    let response = PlayBallResponse {
        schema_version: SCHEMA_VERSION,
        commentary,
        target: engine.target(),
        summary: engine.match_summary(),
        state,
    };
    Ok(serde_json::to_string(&response)?)
}

/// Current state of a session as JSON.
pub fn match_state_json(manager: &SessionManager, session_id: &str) -> Result<String> {
    let state = manager.get(session_id)?.engine.state();
    Ok(serde_json::to_string(state)?)
}

/// Final summary as JSON; `null` while the match is live.
pub fn match_summary_json(manager: &SessionManager, session_id: &str) -> Result<String> {
    let summary = manager.get(session_id)?.engine.match_summary();
    Ok(serde_json::to_string(&summary)?)
}
