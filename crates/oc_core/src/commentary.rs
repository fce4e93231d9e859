//! Ball-by-ball commentary lines derived from the event history.

use crate::models::{Action, BallEvent, BallOutcome};

/// Window size the original scoreboard showed.
pub const RECENT_WINDOW: usize = 10;

/// One commentary line for a ball.
///
/// Batting balls name the shot; bowling balls name the delivery, and a dot
/// or wicket gets its own call. Boundary runs are shouted on both sides.
pub fn describe(event: &BallEvent) -> String {
    match event.action {
        Action::Shot(shot) => match event.outcome.runs() {
            0 => format!("Ball {}: {} shot - No run", event.ball, shot),
            4 => format!("Ball {}: {} shot - FOUR!", event.ball, shot),
            6 => format!("Ball {}: {} shot - SIX!", event.ball, shot),
            runs => format!("Ball {}: {} shot - {} runs", event.ball, shot, runs),
        },
        Action::Delivery(delivery) => match event.outcome {
            BallOutcome::Wicket => format!("Ball {}: {} ball - WICKET!", event.ball, delivery),
            BallOutcome::Runs(0) => format!("Ball {}: {} ball - Dot ball", event.ball, delivery),
            BallOutcome::Runs(4) => format!("Ball {}: {} ball - FOUR!", event.ball, delivery),
            BallOutcome::Runs(6) => format!("Ball {}: {} ball - SIX!", event.ball, delivery),
            BallOutcome::Runs(runs) => {
                format!("Ball {}: {} ball - {} runs", event.ball, delivery, runs)
            }
        },
    }
}

/// The last `n` commentary lines, oldest first.
pub fn recent(history: &[BallEvent], n: usize) -> Vec<String> {
    let start = history.len().saturating_sub(n);
    history[start..].iter().map(describe).collect()
}
