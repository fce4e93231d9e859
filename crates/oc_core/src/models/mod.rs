pub mod action;
pub mod config;
pub mod events;
pub mod match_result;

pub use action::{Action, DeliveryType, Difficulty, Innings, ShotType};
pub use config::{MatchConfig, DEFAULT_MAX_OVERS, DEFAULT_MAX_WICKETS};
pub use events::{BallEvent, BallOutcome};
pub use match_result::{MatchSummary, MatchWinner};
