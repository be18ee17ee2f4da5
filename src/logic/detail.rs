//! List and detail views: records paired with their summaries.

use crate::logic::summary::{summarize_games, summarize_stats, GameSummary, StatsSummary};
use crate::models::{
    Game, GameId, Outcome, Player, PlayerId, RecordBook, RecordError, Rival, RivalId, Stats,
};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RivalRow<'a> {
    pub rival: &'a Rival,
    pub summary: GameSummary,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RivalDetail<'a> {
    pub rival: &'a Rival,
    /// Newest first.
    pub games: Vec<&'a Game>,
    pub summary: GameSummary,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerRow<'a> {
    pub player: &'a Player,
    pub summary: StatsSummary,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerDetail<'a> {
    pub player: &'a Player,
    pub stats: Vec<&'a Stats>,
    pub summary: StatsSummary,
}

/// One stats line of a game, with the player's current name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatsLine<'a> {
    pub player_name: &'a str,
    #[serde(flatten)]
    pub stats: &'a Stats,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameDetail<'a> {
    pub game: &'a Game,
    pub label: String,
    pub outcome: Outcome,
    pub score: String,
    pub stats: Vec<StatsLine<'a>>,
    /// Team totals for this game.
    pub summary: StatsSummary,
}

pub fn rival_rows(book: &RecordBook) -> Vec<RivalRow<'_>> {
    book.rivals
        .iter()
        .map(|rival| RivalRow {
            rival,
            summary: summarize_games(book.games_for_rival(rival.id)),
        })
        .collect()
}

pub fn rival_detail(book: &RecordBook, id: RivalId) -> Result<RivalDetail<'_>, RecordError> {
    let rival = book.rival(id)?;
    let games = book.games_for_rival(id);
    let summary = summarize_games(games.iter().copied());
    Ok(RivalDetail {
        rival,
        games,
        summary,
    })
}

pub fn player_rows(book: &RecordBook) -> Vec<PlayerRow<'_>> {
    book.players
        .iter()
        .map(|player| PlayerRow {
            player,
            summary: summarize_stats(book.stats_for_player(player.id)),
        })
        .collect()
}

pub fn player_detail(book: &RecordBook, id: PlayerId) -> Result<PlayerDetail<'_>, RecordError> {
    let player = book.player(id)?;
    let stats = book.stats_for_player(id);
    let summary = summarize_stats(stats.iter().copied());
    Ok(PlayerDetail {
        player,
        stats,
        summary,
    })
}

pub fn game_detail(book: &RecordBook, id: GameId) -> Result<GameDetail<'_>, RecordError> {
    let game = book.game(id)?;
    let stats = book.stats_for_game(id);
    let summary = summarize_stats(stats.iter().copied());
    let mut lines = Vec::with_capacity(stats.len());
    for s in stats {
        lines.push(StatsLine {
            player_name: book.player(s.player)?.name.as_str(),
            stats: s,
        });
    }
    Ok(GameDetail {
        game,
        label: game.to_string(),
        outcome: game.outcome(),
        score: game.score(),
        stats: lines,
        summary,
    })
}
