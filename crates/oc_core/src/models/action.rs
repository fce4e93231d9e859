//! Action vocabulary for one ball of play.
//!
//! The player's side always bats with a shot choice; the computer's side is
//! resolved through a bowling-delivery outcome table. Declaration order of
//! the enums is the resolution/selection order and must not be reordered.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Batting shot, chosen each ball during the player innings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotType {
    Defensive,
    Drive,
    Pull,
    Sweep,
    Aggressive,
}

impl ShotType {
    pub const ALL: [ShotType; 5] = [
        ShotType::Defensive,
        ShotType::Drive,
        ShotType::Pull,
        ShotType::Sweep,
        ShotType::Aggressive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShotType::Defensive => "Defensive",
            ShotType::Drive => "Drive",
            ShotType::Pull => "Pull",
            ShotType::Sweep => "Sweep",
            ShotType::Aggressive => "Aggressive",
        }
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Defensive" | "defensive" => Ok(ShotType::Defensive),
            "Drive" | "drive" => Ok(ShotType::Drive),
            "Pull" | "pull" => Ok(ShotType::Pull),
            "Sweep" | "sweep" => Ok(ShotType::Sweep),
            "Aggressive" | "aggressive" => Ok(ShotType::Aggressive),
            _ => Err(format!("Unknown shot type: {}", s)),
        }
    }
}

/// Bowling delivery, chosen each ball during the computer innings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryType {
    Fast,
    Spin,
    Yorker,
    Bouncer,
}

impl DeliveryType {
    pub const ALL: [DeliveryType; 4] = [
        DeliveryType::Fast,
        DeliveryType::Spin,
        DeliveryType::Yorker,
        DeliveryType::Bouncer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DeliveryType::Fast => "Fast",
            DeliveryType::Spin => "Spin",
            DeliveryType::Yorker => "Yorker",
            DeliveryType::Bouncer => "Bouncer",
        }
    }
}

impl fmt::Display for DeliveryType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeliveryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fast" | "fast" => Ok(DeliveryType::Fast),
            "Spin" | "spin" => Ok(DeliveryType::Spin),
            "Yorker" | "yorker" => Ok(DeliveryType::Yorker),
            "Bouncer" | "bouncer" => Ok(DeliveryType::Bouncer),
            _ => Err(format!("Unknown delivery type: {}", s)),
        }
    }
}

/// One user-selected action: a shot while batting, a delivery while bowling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Shot(ShotType),
    Delivery(DeliveryType),
}

/// Which side is currently batting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Innings {
    Player,
    Computer,
}

impl Innings {
    pub fn name(&self) -> &'static str {
        match self {
            Innings::Player => "player",
            Innings::Computer => "computer",
        }
    }
}

/// Batting difficulty. Perturbs the shot outcome tables, not the bowling
/// tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" | "Easy" => Ok(Difficulty::Easy),
            "normal" | "Normal" => Ok(Difficulty::Normal),
            "hard" | "Hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Unknown difficulty: {}", s)),
        }
    }
}
