//! Final match summary, available once the match is over.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchWinner {
    Player,
    Computer,
    Tie,
}

impl MatchWinner {
    pub fn name(&self) -> &'static str {
        match self {
            MatchWinner::Player => "Player",
            MatchWinner::Computer => "Computer",
            MatchWinner::Tie => "Tie",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub winner: MatchWinner,
    /// Absolute score difference; 0 for a tie.
    pub margin: u32,
    pub player_score: u32,
    pub computer_score: u32,
    pub player_wickets: u8,
    pub computer_wickets: u8,
}

impl MatchSummary {
    /// One-line result in scoreboard style.
    pub fn headline(&self) -> String {
        match self.winner {
            MatchWinner::Player => format!("Player won by {} runs", self.margin),
            MatchWinner::Computer => format!("Computer won by {} runs", self.margin),
            MatchWinner::Tie => "Match tied".to_string(),
        }
    }
}
