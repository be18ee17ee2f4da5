//! Data structures for the record book: rivals, players, games, stats.

mod error;
mod game;
mod player;
mod record_book;
mod rival;
mod stats;

pub use error::{ErrorKind, RecordError};
pub use game::{Game, GameId, GameParams, GameUpdateParams, Outcome};
pub use player::{Player, PlayerId, PlayerParams};
pub use record_book::RecordBook;
pub use rival::{Rival, RivalId, RivalParams};
pub use stats::{Stats, StatsId, StatsParams};
