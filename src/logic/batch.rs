//! Stats batch: the per-player lines submitted together with one game.
//!
//! A batch is a list of slots. A slot without a player is blank and ignored; every
//! other slot must be well-formed, and no player may appear twice. Any problem rejects
//! the whole batch.

use crate::models::{GameId, PlayerId, RecordError, StatsParams};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default number of blank slots offered when entering a new game.
pub const DEFAULT_EXTRA_SLOTS: usize = 5;

/// How the stats part of the "new game" form is laid out.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Number of blank entries appended for a new game.
    pub extra_slots: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            extra_slots: DEFAULT_EXTRA_SLOTS,
        }
    }
}

impl BatchConfig {
    /// Blank slots for an empty "new game" form.
    pub fn blank_batch(&self) -> Vec<StatsEntry> {
        vec![StatsEntry::default(); self.extra_slots]
    }
}

/// One submitted stats line, as it arrives from the form. Every field may be absent.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsEntry {
    pub player: Option<PlayerId>,
    pub goals: Option<i64>,
    pub assists: Option<i64>,
    pub passes: Option<i64>,
    pub intercepts: Option<i64>,
    pub dribbles: Option<i64>,
    pub tackles: Option<i64>,
    pub remark: Option<String>,
}

/// A stats line that names a player.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilledEntry {
    pub player: PlayerId,
    pub goals: Option<i64>,
    pub assists: Option<i64>,
    pub passes: Option<i64>,
    pub intercepts: Option<i64>,
    pub dribbles: Option<i64>,
    pub tackles: Option<i64>,
    pub remark: Option<String>,
}

/// A batch slot is either unused or filled in for one player.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EntrySlot {
    Blank,
    Filled(FilledEntry),
}

impl StatsEntry {
    /// Entry for `player` with every counter left out.
    pub fn for_player(player: PlayerId) -> Self {
        Self {
            player: Some(player),
            ..Self::default()
        }
    }

    pub fn classify(self) -> EntrySlot {
        match self.player {
            None => EntrySlot::Blank,
            Some(player) => EntrySlot::Filled(FilledEntry {
                player,
                goals: self.goals,
                assists: self.assists,
                passes: self.passes,
                intercepts: self.intercepts,
                dribbles: self.dribbles,
                tackles: self.tackles,
                remark: self.remark,
            }),
        }
    }
}

impl FilledEntry {
    /// Check the counters of the entry at batch position `index` and build its params.
    /// Absent counters become 0; negative or oversized ones are rejected.
    pub fn normalize(self, index: usize, game: GameId) -> Result<StatsParams, RecordError> {
        Ok(StatsParams {
            game,
            player: self.player,
            goals: counter(index, "goals", self.goals)?,
            assists: counter(index, "assists", self.assists)?,
            passes: counter(index, "passes", self.passes)?,
            intercepts: counter(index, "intercepts", self.intercepts)?,
            dribbles: counter(index, "dribbles", self.dribbles)?,
            tackles: counter(index, "tackles", self.tackles)?,
            remark: self.remark.unwrap_or_default(),
        })
    }
}

fn counter(index: usize, field: &'static str, value: Option<i64>) -> Result<u32, RecordError> {
    let value = value.unwrap_or(0);
    u32::try_from(value).map_err(|_| RecordError::OutOfRange {
        entry: Some(index),
        field,
        value,
    })
}

/// Validate a submitted batch for `game` and return one params set per filled slot,
/// in submission order.
///
/// Any player named by more than one filled slot fails the batch with
/// [`RecordError::DuplicatePlayer`], whatever else is wrong with it. Otherwise the first
/// malformed entry fails it. Blank slots are skipped, so an all-blank batch yields an
/// empty list.
pub fn validate_and_normalize_batch(
    entries: Vec<StatsEntry>,
    game: GameId,
) -> Result<Vec<StatsParams>, RecordError> {
    let filled: Vec<(usize, FilledEntry)> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry.classify() {
            EntrySlot::Blank => None,
            EntrySlot::Filled(f) => Some((index, f)),
        })
        .collect();

    let mut seen = HashSet::with_capacity(filled.len());
    if let Some((_, dup)) = filled.iter().find(|(_, f)| !seen.insert(f.player)) {
        log::warn!("Rejected stats batch: player {} entered twice", dup.player);
        return Err(RecordError::DuplicatePlayer(dup.player));
    }

    let mut params = Vec::with_capacity(filled.len());
    for (index, f) in filled {
        let p = f.normalize(index, game).inspect_err(|e| {
            log::warn!("Rejected stats batch: {}", e);
        })?;
        log::debug!("Stats line {} accepted for player {}", index + 1, p.player);
        params.push(p);
    }
    Ok(params)
}
