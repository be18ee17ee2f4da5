//! Submitted forms for rivals, players and games, and their required-field checks.

use crate::models::{
    GameParams, GameUpdateParams, PlayerParams, RecordError, RivalId, RivalParams,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RivalForm {
    pub team_name: Option<String>,
    pub home: Option<String>,
    pub remark: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerForm {
    pub name: Option<String>,
    pub jersey_number: Option<i64>,
    pub remark: Option<String>,
}

/// The game half of the "new game" form.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameForm {
    pub rival: Option<RivalId>,
    pub field: Option<String>,
    pub game_date: Option<DateTime<Utc>>,
    pub point_gain: Option<i64>,
    pub point_reduce: Option<i64>,
    pub remark: Option<String>,
}

/// Editing a game: everything but the rival.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameUpdateForm {
    pub field: Option<String>,
    pub game_date: Option<DateTime<Utc>>,
    pub point_gain: Option<i64>,
    pub point_reduce: Option<i64>,
    pub remark: Option<String>,
}

impl RivalForm {
    pub fn validate(self) -> Result<RivalParams, RecordError> {
        Ok(RivalParams {
            team_name: required_text("team_name", self.team_name)?,
            home: required_text("home", self.home)?,
            remark: self.remark.unwrap_or_default(),
        })
    }
}

impl PlayerForm {
    pub fn validate(self) -> Result<PlayerParams, RecordError> {
        Ok(PlayerParams {
            name: required_text("name", self.name)?,
            jersey_number: required_number("jersey_number", self.jersey_number)?,
            remark: self.remark.unwrap_or_default(),
        })
    }
}

impl GameForm {
    pub fn validate(self) -> Result<GameParams, RecordError> {
        let rival = self.rival.ok_or(RecordError::MissingField {
            entry: None,
            field: "rival",
        })?;
        Ok(GameParams {
            rival,
            field: required_text("field", self.field)?,
            game_date: self.game_date.ok_or(RecordError::MissingField {
                entry: None,
                field: "game_date",
            })?,
            point_gain: required_number("point_gain", self.point_gain)?,
            point_reduce: required_number("point_reduce", self.point_reduce)?,
            remark: self.remark.unwrap_or_default(),
        })
    }
}

impl GameUpdateForm {
    pub fn validate(self) -> Result<GameUpdateParams, RecordError> {
        Ok(GameUpdateParams {
            field: required_text("field", self.field)?,
            game_date: self.game_date.ok_or(RecordError::MissingField {
                entry: None,
                field: "game_date",
            })?,
            point_gain: required_number("point_gain", self.point_gain)?,
            point_reduce: required_number("point_reduce", self.point_reduce)?,
            remark: self.remark.unwrap_or_default(),
        })
    }
}

/// Present and not blank; returned trimmed.
fn required_text(field: &'static str, value: Option<String>) -> Result<String, RecordError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(RecordError::MissingField { entry: None, field }),
    }
}

fn required_number(field: &'static str, value: Option<i64>) -> Result<u32, RecordError> {
    let value = value.ok_or(RecordError::MissingField { entry: None, field })?;
    u32::try_from(value).map_err(|_| RecordError::OutOfRange {
        entry: None,
        field,
        value,
    })
}
