//! Mutable match state, owned exclusively by the engine.

use serde::{Deserialize, Serialize};

use crate::models::{BallEvent, Innings};
use crate::stats::InningsStats;

pub const BALLS_PER_OVER: u8 = 6;

/// All mutable state of one match. The engine hands out `&MatchState` only;
/// nothing outside the engine mutates these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub player_score: u32,
    pub computer_score: u32,
    pub player_wickets: u8,
    pub computer_wickets: u8,
    /// Completed overs in the active innings.
    pub overs: u16,
    /// Balls bowled in the current over, always in [0, 5].
    pub balls: u8,
    pub current_innings: Innings,
    /// Terminal flag; monotonic - once set, no further mutation happens.
    pub game_over: bool,
    pub player_balls_faced: u32,
    pub computer_balls_faced: u32,
    pub player_fours: u32,
    pub player_sixes: u32,
    pub computer_fours: u32,
    pub computer_sixes: u32,
    /// One entry per ball bowled, append-only, chronological.
    pub history: Vec<BallEvent>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            player_score: 0,
            computer_score: 0,
            player_wickets: 0,
            computer_wickets: 0,
            overs: 0,
            balls: 0,
            current_innings: Innings::Player,
            game_over: false,
            player_balls_faced: 0,
            computer_balls_faced: 0,
            player_fours: 0,
            player_sixes: 0,
            computer_fours: 0,
            computer_sixes: 0,
            history: Vec::new(),
        }
    }

    /// Count the ball just bowled; a full over rolls `balls` back to 0 and
    /// increments `overs`, never overflowing silently.
    pub(crate) fn advance_ball(&mut self) {
        self.balls += 1;
        if self.balls == BALLS_PER_OVER {
            self.balls = 0;
            self.overs += 1;
        }
    }

    /// Switch to the computer innings; over/ball counters restart at zero.
    pub(crate) fn begin_computer_innings(&mut self) {
        self.current_innings = Innings::Computer;
        self.overs = 0;
        self.balls = 0;
    }

    /// Derived per-side batting figures.
    pub fn innings_stats(&self, innings: Innings) -> InningsStats {
        match innings {
            Innings::Player => InningsStats {
                score: self.player_score,
                wickets: self.player_wickets,
                balls_faced: self.player_balls_faced,
                fours: self.player_fours,
                sixes: self.player_sixes,
            },
            Innings::Computer => InningsStats {
                score: self.computer_score,
                wickets: self.computer_wickets,
                balls_faced: self.computer_balls_faced,
                fours: self.computer_fours,
                sixes: self.computer_sixes,
            },
        }
    }
}
