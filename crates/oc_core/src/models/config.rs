//! Match configuration, fixed at match start.

use serde::{Deserialize, Serialize};

use super::action::Difficulty;
use crate::error::{MatchError, Result};

pub const DEFAULT_MAX_OVERS: u16 = 5;
pub const DEFAULT_MAX_WICKETS: u8 = 10;

/// Configuration surface exposed to the presentation shell.
///
/// `max_overs` is player-adjustable (1-10 in the shell's slider, only
/// positivity is enforced here); `max_wickets` defaults to the full ten and
/// exists mostly so a zero value can be rejected before it reaches the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    #[serde(default = "default_max_overs")]
    pub max_overs: u16,
    #[serde(default = "default_max_wickets")]
    pub max_wickets: u8,
    #[serde(default)]
    pub difficulty: Difficulty,
}

fn default_max_overs() -> u16 {
    DEFAULT_MAX_OVERS
}

fn default_max_wickets() -> u8 {
    DEFAULT_MAX_WICKETS
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_overs: DEFAULT_MAX_OVERS,
            max_wickets: DEFAULT_MAX_WICKETS,
            difficulty: Difficulty::Normal,
        }
    }
}

impl MatchConfig {
    pub fn new(max_overs: u16, difficulty: Difficulty) -> Self {
        Self { max_overs, max_wickets: DEFAULT_MAX_WICKETS, difficulty }
    }

    /// Reject degenerate configurations at the boundary rather than letting
    /// them produce an engine that can never start or never end an innings.
    pub fn validate(&self) -> Result<()> {
        if self.max_overs == 0 {
            return Err(MatchError::InvalidConfig("max_overs must be at least 1".to_string()));
        }
        if self.max_wickets == 0 {
            return Err(MatchError::InvalidConfig("max_wickets must be at least 1".to_string()));
        }
        Ok(())
    }
}
