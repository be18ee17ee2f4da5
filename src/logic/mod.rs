//! Record-keeping logic: stats batches, summaries, forms, game entry, views and export.

mod batch;
mod detail;
mod export;
mod forms;
mod game_entry;
mod summary;

pub use batch::{
    validate_and_normalize_batch, BatchConfig, EntrySlot, FilledEntry, StatsEntry,
    DEFAULT_EXTRA_SLOTS,
};
pub use detail::{
    game_detail, player_detail, player_rows, rival_detail, rival_rows, GameDetail, PlayerDetail,
    PlayerRow, RivalDetail, RivalRow, StatsLine,
};
pub use export::players_csv;
pub use forms::{GameForm, GameUpdateForm, PlayerForm, RivalForm};
pub use game_entry::{record_game, update_game};
pub use summary::{summarize_games, summarize_stats, win_rate, GameSummary, StatsSummary};
