//! Match engine: authoritative owner of `MatchState`.
//!
//! The engine is the only component that mutates match state. One
//! `play_ball` call resolves exactly one ball; callers re-read the state
//! afterwards. The random source is injected so outcome resolution is
//! deterministic under a fixed seed - production wiring uses `ChaCha8Rng`,
//! tests can supply a scripted generator.

pub mod probability;
pub mod state;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{MatchError, Result};
use crate::models::{
    Action, BallEvent, BallOutcome, Innings, MatchConfig, MatchSummary, MatchWinner,
};
use crate::stats::InningsStats;
use probability::OutcomeTables;
use state::MatchState;

/// Turn-based cricket match engine.
///
/// Lifetime is one match: created fresh on a new-game request, fully
/// replaced (not incrementally patched) by [`MatchEngine::reset`], discarded
/// with the session.
#[derive(Debug)]
pub struct MatchEngine<R: Rng = ChaCha8Rng> {
    config: MatchConfig,
    tables: &'static OutcomeTables,
    state: MatchState,
    rng: R,
}

impl MatchEngine<ChaCha8Rng> {
    /// Engine with an entropy-seeded RNG.
    pub fn new(config: MatchConfig) -> Result<Self> {
        Self::from_rng(config, ChaCha8Rng::from_entropy())
    }

    /// Deterministic engine: the same seed replays the same match given the
    /// same action sequence.
    pub fn with_seed(config: MatchConfig, seed: u64) -> Result<Self> {
        Self::from_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> MatchEngine<R> {
    /// Engine over a caller-supplied random source.
    pub fn from_rng(config: MatchConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tables: probability::tables_for(config.difficulty),
            state: MatchState::new(),
            config,
            rng,
        })
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    /// Chase target shown while the computer bats: one more than the player
    /// total.
    pub fn target(&self) -> Option<u32> {
        if self.state.current_innings == Innings::Computer && !self.state.game_over {
            Some(self.state.player_score + 1)
        } else {
            None
        }
    }

    pub fn innings_stats(&self, innings: Innings) -> InningsStats {
        self.state.innings_stats(innings)
    }

    /// Play one ball.
    ///
    /// `None` picks uniformly at random from the set valid for the active
    /// innings (the simulated opponent auto-bats this way). An action from
    /// the wrong set is rejected before any mutation. Calls after the match
    /// has ended are a guaranteed no-op, not an error.
    pub fn play_ball(&mut self, action: Option<Action>) -> Result<()> {
        if self.state.game_over {
            return Ok(());
        }

        match self.state.current_innings {
            Innings::Player => {
                let shot = match action {
                    Some(Action::Shot(shot)) => shot,
                    Some(other) => {
                        return Err(MatchError::InvalidAction {
                            innings: Innings::Player,
                            action: other,
                        })
                    }
                    None => probability::random_shot(&mut self.rng),
                };

                let runs = self.tables.resolve_shot(shot, &mut self.rng);
                self.state.player_score += runs as u32;
                self.state.player_balls_faced += 1;
                match runs {
                    4 => self.state.player_fours += 1,
                    6 => self.state.player_sixes += 1,
                    _ => {}
                }
                self.push_event(Action::Shot(shot), BallOutcome::Runs(runs));
                log::debug!("player {} shot: {} runs", shot.name(), runs);
            }
            Innings::Computer => {
                let delivery = match action {
                    Some(Action::Delivery(delivery)) => delivery,
                    Some(other) => {
                        return Err(MatchError::InvalidAction {
                            innings: Innings::Computer,
                            action: other,
                        })
                    }
                    None => probability::random_delivery(&mut self.rng),
                };

                let outcome = self.tables.resolve_delivery(delivery, &mut self.rng);
                match outcome {
                    BallOutcome::Wicket => {
                        // A wicket consumes a ball of the over but is not
                        // counted as a ball faced.
                        self.state.computer_wickets += 1;
                    }
                    BallOutcome::Runs(runs) => {
                        self.state.computer_score += runs as u32;
                        self.state.computer_balls_faced += 1;
                        match runs {
                            4 => self.state.computer_fours += 1,
                            6 => self.state.computer_sixes += 1,
                            _ => {}
                        }
                    }
                }
                self.push_event(Action::Delivery(delivery), outcome);
                log::debug!("{} ball: {:?}", delivery.name(), outcome);
            }
        }

        self.state.advance_ball();
        self.check_game_end();
        Ok(())
    }

    fn push_event(&mut self, action: Action, outcome: BallOutcome) {
        self.state.history.push(BallEvent {
            innings: self.state.current_innings,
            action,
            outcome,
            ball: self.state.balls + 1,
            over: self.state.overs + 1,
        });
    }

    /// Innings/match termination, evaluated after every ball.
    fn check_game_end(&mut self) {
        match self.state.current_innings {
            Innings::Player => {
                // NOTE: nothing currently increments player_wickets, so the
                // wicket arm is unreachable today. It is kept deliberately -
                // the termination rule is symmetric even though the scoring
                // path is not.
                if self.state.overs >= self.config.max_overs
                    || self.state.player_wickets >= self.config.max_wickets
                {
                    self.state.begin_computer_innings();
                    log::info!(
                        "player innings closed at {}; computer chasing {}",
                        self.state.player_score,
                        self.state.player_score + 1
                    );
                }
            }
            Innings::Computer => {
                // The chase stops the instant the target is exceeded.
                if self.state.overs >= self.config.max_overs
                    || self.state.computer_wickets >= self.config.max_wickets
                    || self.state.computer_score > self.state.player_score
                {
                    self.state.game_over = true;
                    log::info!(
                        "match over: player {}/{} computer {}/{}",
                        self.state.player_score,
                        self.state.player_wickets,
                        self.state.computer_score,
                        self.state.computer_wickets
                    );
                }
            }
        }
    }

    /// Final result, absent while the match is still live.
    pub fn match_summary(&self) -> Option<MatchSummary> {
        if !self.state.game_over {
            return None;
        }

        let (winner, margin) = if self.state.player_score > self.state.computer_score {
            (MatchWinner::Player, self.state.player_score - self.state.computer_score)
        } else if self.state.computer_score > self.state.player_score {
            (MatchWinner::Computer, self.state.computer_score - self.state.player_score)
        } else {
            (MatchWinner::Tie, 0)
        };

        Some(MatchSummary {
            winner,
            margin,
            player_score: self.state.player_score,
            computer_score: self.state.computer_score,
            player_wickets: self.state.player_wickets,
            computer_wickets: self.state.computer_wickets,
        })
    }

    /// Replace the match with a fresh one under `config`. History is fully
    /// cleared; the observable state matches a newly constructed engine.
    pub fn reset(&mut self, config: MatchConfig) -> Result<()> {
        config.validate()?;
        self.tables = probability::tables_for(config.difficulty);
        self.config = config;
        self.state = MatchState::new();
        Ok(())
    }
}
