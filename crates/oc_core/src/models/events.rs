//! Ball-by-ball event records.
//!
//! One `BallEvent` is appended per ball bowled; the history is append-only
//! and its insertion order is chronological. It feeds commentary and
//! analytics, never rule logic.

use serde::{Deserialize, Serialize};

use super::action::{Action, Innings};

/// Outcome of a single ball.
///
/// The batting table produces `Runs` in {0, 1, 2, 4, 6}; the bowling table's
/// runs band is uniform over 1-6, so 3 and 5 appear only on the computer
/// side. A wicket carries no runs but still consumes a ball of the over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BallOutcome {
    Runs(u8),
    Wicket,
}

impl BallOutcome {
    /// Runs credited to the batting side (0 for a wicket).
    pub fn runs(&self) -> u8 {
        match self {
            BallOutcome::Runs(r) => *r,
            BallOutcome::Wicket => 0,
        }
    }

    pub fn is_wicket(&self) -> bool {
        matches!(self, BallOutcome::Wicket)
    }
}

/// Record of one ball bowled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallEvent {
    /// Side that was batting when the ball was bowled.
    pub innings: Innings,
    /// Shot played or delivery bowled (after random fill-in, if any).
    pub action: Action,
    pub outcome: BallOutcome,
    /// Ball index within the over, 1-based.
    pub ball: u8,
    /// Over index within the innings, 1-based.
    pub over: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::action::ShotType;

    #[test]
    fn test_wicket_scores_no_runs() {
        assert_eq!(BallOutcome::Wicket.runs(), 0);
        assert!(BallOutcome::Wicket.is_wicket());
        assert_eq!(BallOutcome::Runs(4).runs(), 4);
        assert!(!BallOutcome::Runs(0).is_wicket());
    }

    #[test]
    fn test_ball_event_serde_roundtrip() {
        let event = BallEvent {
            innings: Innings::Player,
            action: Action::Shot(ShotType::Pull),
            outcome: BallOutcome::Runs(6),
            ball: 3,
            over: 2,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: BallEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
