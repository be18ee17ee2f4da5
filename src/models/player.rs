//! Player data structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in stats and lookups).
pub type PlayerId = Uuid;

/// Validated input for creating or updating a player.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerParams {
    pub name: String,
    pub jersey_number: u32,
    #[serde(default)]
    pub remark: String,
}

/// A player on the recorded team. Cumulative numbers come from `summarize_stats`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub jersey_number: u32,
    pub remark: String,
}

impl Player {
    /// Create a new player from validated params.
    pub fn create(params: PlayerParams) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: params.name,
            jersey_number: params.jersey_number,
            remark: params.remark,
        }
    }

    /// Overwrite the editable fields, keeping the id.
    pub fn apply(&mut self, params: PlayerParams) {
        self.name = params.name;
        self.jersey_number = params.jersey_number;
        self.remark = params.remark;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
