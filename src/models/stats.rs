//! Stats: one player's counters for one game.

use crate::models::game::GameId;
use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a stats line.
pub type StatsId = Uuid;

/// Normalized, ready-to-store stats for one player in one game.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StatsParams {
    pub game: GameId,
    pub player: PlayerId,
    pub goals: u32,
    pub assists: u32,
    pub passes: u32,
    pub intercepts: u32,
    pub dribbles: u32,
    pub tackles: u32,
    pub remark: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub id: StatsId,
    pub game: GameId,
    pub player: PlayerId,
    pub goals: u32,
    pub assists: u32,
    pub passes: u32,
    pub intercepts: u32,
    pub dribbles: u32,
    pub tackles: u32,
    pub remark: String,
}

impl Stats {
    pub fn create(params: StatsParams) -> Self {
        Self {
            id: Uuid::new_v4(),
            game: params.game,
            player: params.player,
            goals: params.goals,
            assists: params.assists,
            passes: params.passes,
            intercepts: params.intercepts,
            dribbles: params.dribbles,
            tackles: params.tackles,
            remark: params.remark,
        }
    }
}
