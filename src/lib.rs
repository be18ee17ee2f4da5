//! Team record keeper: library with models, business logic and configuration.

pub mod config;
pub mod logic;
pub mod models;

pub use config::{AppConfig, Credentials};
pub use logic::{
    game_detail, player_detail, player_rows, players_csv, record_game, rival_detail, rival_rows,
    summarize_games, summarize_stats, update_game, validate_and_normalize_batch, BatchConfig,
    EntrySlot, GameForm, GameSummary, GameUpdateForm, PlayerForm, RivalForm, StatsEntry,
    StatsSummary,
};
pub use models::{
    ErrorKind, Game, GameId, GameParams, GameUpdateParams, Outcome, Player, PlayerId,
    PlayerParams, RecordBook, RecordError, Rival, RivalId, RivalParams, Stats, StatsId,
    StatsParams,
};
