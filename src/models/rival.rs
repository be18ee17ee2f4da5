//! Rival: an opposing team.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a rival.
pub type RivalId = Uuid;

/// Validated input for creating or updating a rival.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RivalParams {
    pub team_name: String,
    pub home: String,
    #[serde(default)]
    pub remark: String,
}

/// An opposing team the recorded team has played against.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Rival {
    pub id: RivalId,
    /// Display name, unique across rivals.
    pub team_name: String,
    pub home: String,
    pub remark: String,
}

impl Rival {
    pub fn create(params: RivalParams) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_name: params.team_name,
            home: params.home,
            remark: params.remark,
        }
    }

    /// Overwrite the editable fields, keeping the id.
    pub fn apply(&mut self, params: RivalParams) {
        self.team_name = params.team_name;
        self.home = params.home;
        self.remark = params.remark;
    }
}

impl std::fmt::Display for Rival {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.team_name)
    }
}
