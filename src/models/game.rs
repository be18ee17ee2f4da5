//! Game (a single match against a rival) and its Outcome.

use crate::models::rival::{Rival, RivalId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a game.
pub type GameId = Uuid;

/// How a game ended, from the recorded team's point of view.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Win,
    Lose,
    Even,
}

impl Outcome {
    pub fn from_points(point_gain: u32, point_reduce: u32) -> Self {
        use std::cmp::Ordering::*;
        match point_gain.cmp(&point_reduce) {
            Greater => Outcome::Win,
            Less => Outcome::Lose,
            Equal => Outcome::Even,
        }
    }
}

/// Validated input for creating a game. `rival_name` is filled in from the rival on create.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameParams {
    pub rival: RivalId,
    pub field: String,
    pub game_date: DateTime<Utc>,
    pub point_gain: u32,
    pub point_reduce: u32,
    #[serde(default)]
    pub remark: String,
}

/// Validated input for editing an existing game. The rival never changes.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameUpdateParams {
    pub field: String,
    pub game_date: DateTime<Utc>,
    pub point_gain: u32,
    pub point_reduce: u32,
    #[serde(default)]
    pub remark: String,
}

/// A played game.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub rival: RivalId,
    /// Rival's name when the game was recorded. Not kept in sync with later renames.
    pub rival_name: String,
    pub field: String,
    pub game_date: DateTime<Utc>,
    pub point_gain: u32,
    pub point_reduce: u32,
    pub remark: String,
}

impl Game {
    /// Build a game against `rival`, capturing its current name.
    pub fn create(params: GameParams, rival: &Rival) -> Self {
        Self {
            id: Uuid::new_v4(),
            rival: rival.id,
            rival_name: rival.team_name.clone(),
            field: params.field,
            game_date: params.game_date,
            point_gain: params.point_gain,
            point_reduce: params.point_reduce,
            remark: params.remark,
        }
    }

    pub fn apply(&mut self, params: GameUpdateParams) {
        self.field = params.field;
        self.game_date = params.game_date;
        self.point_gain = params.point_gain;
        self.point_reduce = params.point_reduce;
        self.remark = params.remark;
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_points(self.point_gain, self.point_reduce)
    }

    /// Score for display, e.g. `"3 - 1"`.
    pub fn score(&self) -> String {
        format!("{} - {}", self.point_gain, self.point_reduce)
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.game_date.format("%Y/%-m/%d"), self.rival_name)
    }
}
