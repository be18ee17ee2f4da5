//! CSV export of the player table.

use crate::logic::detail::player_rows;
use crate::models::{RecordBook, RecordError};
use serde::Serialize;

#[derive(Serialize)]
struct PlayerCsvRow<'a> {
    name: &'a str,
    jersey_number: u32,
    games: u64,
    goals: u64,
    assists: u64,
    passes: u64,
    intercepts: u64,
    dribbles: u64,
    tackles: u64,
}

/// Every player with cumulative stats, one row each, with a header row.
pub fn players_csv(book: &RecordBook) -> Result<String, RecordError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in player_rows(book) {
        let s = row.summary;
        wtr.serialize(PlayerCsvRow {
            name: &row.player.name,
            jersey_number: row.player.jersey_number,
            games: s.games,
            goals: s.goals,
            assists: s.assists,
            passes: s.passes,
            intercepts: s.intercepts,
            dribbles: s.dribbles,
            tackles: s.tackles,
        })
        .map_err(|e| RecordError::Export(e.to_string()))?;
    }
    if book.players.is_empty() {
        wtr.write_record([
            "name",
            "jersey_number",
            "games",
            "goals",
            "assists",
            "passes",
            "intercepts",
            "dribbles",
            "tackles",
        ])
        .map_err(|e| RecordError::Export(e.to_string()))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| RecordError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| RecordError::Export(e.to_string()))
}
