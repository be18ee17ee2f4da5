//! RecordError: everything that can reject a submission or a lookup.

use crate::models::game::GameId;
use crate::models::player::PlayerId;
use crate::models::rival::RivalId;
use serde::Serialize;

/// Coarse category of a [`RecordError`], used to decide how the error is reported.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Attributable to one field (optionally of one batch entry).
    Field,
    /// Two entries of one stats batch name the same player. Reported for the whole batch.
    DuplicatePlayer,
    /// A referenced rival, player or game does not exist.
    ReferenceNotFound,
    /// Writing an export failed.
    Export,
}

/// Errors that can occur while validating or storing records.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RecordError {
    /// A required field is absent or blank. `entry` is the batch slot for stats entries.
    MissingField {
        entry: Option<usize>,
        field: &'static str,
    },
    /// A counter or score is negative or too large.
    OutOfRange {
        entry: Option<usize>,
        field: &'static str,
        value: i64,
    },
    /// A rival or player with this name already exists (names are unique).
    DuplicateName { field: &'static str, name: String },
    /// The same player appears in more than one entry of a stats batch.
    DuplicatePlayer(PlayerId),
    RivalNotFound(RivalId),
    PlayerNotFound(PlayerId),
    GameNotFound(GameId),
    /// CSV export could not be written.
    Export(String),
}

impl RecordError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RecordError::MissingField { .. }
            | RecordError::OutOfRange { .. }
            | RecordError::DuplicateName { .. } => ErrorKind::Field,
            RecordError::DuplicatePlayer(_) => ErrorKind::DuplicatePlayer,
            RecordError::RivalNotFound(_)
            | RecordError::PlayerNotFound(_)
            | RecordError::GameNotFound(_) => ErrorKind::ReferenceNotFound,
            RecordError::Export(_) => ErrorKind::Export,
        }
    }

    /// Name of the offending field, for field-level errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            RecordError::MissingField { field, .. }
            | RecordError::OutOfRange { field, .. }
            | RecordError::DuplicateName { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Batch slot index the error belongs to, if it came from a stats entry.
    pub fn entry(&self) -> Option<usize> {
        match self {
            RecordError::MissingField { entry, .. } | RecordError::OutOfRange { entry, .. } => {
                *entry
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::MissingField { entry: Some(i), field } => {
                write!(f, "Stats line {}: {} is required", i + 1, field)
            }
            RecordError::MissingField { entry: None, field } => write!(f, "{} is required", field),
            RecordError::OutOfRange {
                entry: Some(i),
                field,
                value,
            } => write!(
                f,
                "Stats line {}: {} must be between 0 and {} (got {})",
                i + 1,
                field,
                u32::MAX,
                value
            ),
            RecordError::OutOfRange {
                entry: None,
                field,
                value,
            } => write!(f, "{} must be between 0 and {} (got {})", field, u32::MAX, value),
            RecordError::DuplicateName { name, .. } => {
                write!(f, "The name \"{}\" is already taken", name)
            }
            RecordError::DuplicatePlayer(_) => {
                write!(f, "The same player is entered more than once")
            }
            RecordError::RivalNotFound(_) => write!(f, "Rival not found"),
            RecordError::PlayerNotFound(_) => write!(f, "Player not found"),
            RecordError::GameNotFound(_) => write!(f, "Game not found"),
            RecordError::Export(msg) => write!(f, "Export failed: {}", msg),
        }
    }
}

impl std::error::Error for RecordError {}
