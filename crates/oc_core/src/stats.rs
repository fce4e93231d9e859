//! Derived batting statistics.
//!
//! Everything here is computed from `MatchState` and the ball history;
//! nothing feeds back into rule logic.

use serde::{Deserialize, Serialize};

use crate::models::{Action, BallEvent, Innings, ShotType};

/// Per-side batting figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningsStats {
    pub score: u32,
    pub wickets: u8,
    pub balls_faced: u32,
    pub fours: u32,
    pub sixes: u32,
}

impl InningsStats {
    /// Runs per hundred balls. Zero before the first ball is faced.
    pub fn strike_rate(&self) -> f64 {
        if self.balls_faced == 0 {
            0.0
        } else {
            f64::from(self.score) / f64::from(self.balls_faced) * 100.0
        }
    }

    /// Conventional `score/wickets` scoreboard figure.
    pub fn scoreline(&self) -> String {
        format!("{}/{}", self.score, self.wickets)
    }
}

/// Cumulative score after each ball of one side's innings, in bowling
/// order. Wicket balls contribute a flat step.
pub fn run_progression(history: &[BallEvent], innings: Innings) -> Vec<u32> {
    let mut total = 0u32;
    history
        .iter()
        .filter(|event| event.innings == innings)
        .map(|event| {
            total += u32::from(event.outcome.runs());
            total
        })
        .collect()
}

/// How often each shot was played, in declaration order of [`ShotType`].
pub fn shot_usage(history: &[BallEvent]) -> [(ShotType, u32); 5] {
    let mut counts = ShotType::ALL.map(|shot| (shot, 0u32));
    for event in history {
        if let Action::Shot(shot) = event.action {
            counts[shot as usize].1 += 1;
        }
    }
    counts
}
