pub mod json_api;

pub use json_api::{
    match_state_json, match_summary_json, new_match_json, play_ball_json, NewMatchRequest,
    NewMatchResponse, PlayBallRequest, PlayBallResponse,
};
