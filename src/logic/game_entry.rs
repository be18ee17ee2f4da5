//! Entering and editing games: the game form plus its stats batch, stored all or nothing.

use crate::logic::batch::{validate_and_normalize_batch, StatsEntry};
use crate::logic::forms::{GameForm, GameUpdateForm};
use crate::models::{Game, GameId, RecordBook, RecordError, Stats};

/// Record a new game and its stats lines.
///
/// 1. Validate the game form and resolve its rival (the rival's name is copied onto the game).
/// 2. Validate the stats batch against the new game.
/// 3. Store the game and one stats line per filled slot.
///
/// Any failure leaves `book` unchanged.
pub fn record_game(
    book: &mut RecordBook,
    form: GameForm,
    entries: Vec<StatsEntry>,
) -> Result<GameId, RecordError> {
    let params = form.validate()?;
    let rival = book.rival(params.rival)?;
    let game = Game::create(params, rival);

    let stats: Vec<Stats> = validate_and_normalize_batch(entries, game.id)?
        .into_iter()
        .map(Stats::create)
        .collect();

    book.insert_game_with_stats(game, stats)
}

/// Edit an existing game's field, date, score and remark.
pub fn update_game(
    book: &mut RecordBook,
    id: GameId,
    form: GameUpdateForm,
) -> Result<&Game, RecordError> {
    let params = form.validate()?;
    book.update_game(id, params)
}
