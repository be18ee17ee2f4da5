//! RecordBook: every rival, player, game and stats line, in insertion order.

use crate::models::error::RecordError;
use crate::models::game::{Game, GameId, GameUpdateParams};
use crate::models::player::{Player, PlayerId, PlayerParams};
use crate::models::rival::{Rival, RivalId, RivalParams};
use crate::models::stats::Stats;
use serde::{Deserialize, Serialize};

/// In-memory record store. Names of rivals and players are unique (exact match after trimming).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RecordBook {
    pub rivals: Vec<Rival>,
    pub players: Vec<Player>,
    /// Games in the order they were recorded (oldest first).
    pub games: Vec<Game>,
    pub stats: Vec<Stats>,
}

impl RecordBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rival(&self, id: RivalId) -> Result<&Rival, RecordError> {
        self.rivals
            .iter()
            .find(|r| r.id == id)
            .ok_or(RecordError::RivalNotFound(id))
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, RecordError> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .ok_or(RecordError::PlayerNotFound(id))
    }

    pub fn game(&self, id: GameId) -> Result<&Game, RecordError> {
        self.games
            .iter()
            .find(|g| g.id == id)
            .ok_or(RecordError::GameNotFound(id))
    }

    /// Add a rival. The team name must differ from every other rival's.
    pub fn add_rival(&mut self, params: RivalParams) -> Result<&Rival, RecordError> {
        self.check_rival_name(&params.team_name, None)?;
        let rival = Rival::create(params);
        log::info!("Created rival {} ({})", rival.team_name, rival.id);
        self.rivals.push(rival);
        Ok(&self.rivals[self.rivals.len() - 1])
    }

    /// Edit a rival. Games already recorded keep the rival name they were created with.
    pub fn update_rival(&mut self, id: RivalId, params: RivalParams) -> Result<&Rival, RecordError> {
        self.check_rival_name(&params.team_name, Some(id))?;
        let rival = self
            .rivals
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RecordError::RivalNotFound(id))?;
        rival.apply(params);
        log::info!("Updated rival {} ({})", rival.team_name, rival.id);
        Ok(&*rival)
    }

    /// Add a player. The name must differ from every other player's.
    pub fn add_player(&mut self, params: PlayerParams) -> Result<&Player, RecordError> {
        self.check_player_name(&params.name, None)?;
        let player = Player::create(params);
        log::info!("Created player {} ({})", player.name, player.id);
        self.players.push(player);
        Ok(&self.players[self.players.len() - 1])
    }

    pub fn update_player(
        &mut self,
        id: PlayerId,
        params: PlayerParams,
    ) -> Result<&Player, RecordError> {
        self.check_player_name(&params.name, Some(id))?;
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RecordError::PlayerNotFound(id))?;
        player.apply(params);
        log::info!("Updated player {} ({})", player.name, player.id);
        Ok(&*player)
    }

    /// Store a game together with its stats lines, or nothing at all.
    ///
    /// Every stats line must belong to `game` and name an existing player. Checks run
    /// before anything is inserted, so a failure leaves the book untouched.
    pub fn insert_game_with_stats(
        &mut self,
        game: Game,
        stats: Vec<Stats>,
    ) -> Result<GameId, RecordError> {
        self.rival(game.rival)?;
        for s in &stats {
            if s.game != game.id {
                return Err(RecordError::GameNotFound(s.game));
            }
            self.player(s.player)?;
        }
        let id = game.id;
        log::info!("Created game {} with {} stats line(s)", game, stats.len());
        self.games.push(game);
        self.stats.extend(stats);
        Ok(id)
    }

    pub fn update_game(
        &mut self,
        id: GameId,
        params: GameUpdateParams,
    ) -> Result<&Game, RecordError> {
        let game = self
            .games
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(RecordError::GameNotFound(id))?;
        game.apply(params);
        log::info!("Updated game {} ({})", game, game.id);
        Ok(&*game)
    }

    /// Games for the index page: most recently recorded first.
    pub fn games_newest_first(&self) -> Vec<&Game> {
        self.games.iter().rev().collect()
    }

    pub fn games_for_rival(&self, rival: RivalId) -> Vec<&Game> {
        self.games.iter().rev().filter(|g| g.rival == rival).collect()
    }

    pub fn stats_for_game(&self, game: GameId) -> Vec<&Stats> {
        self.stats.iter().filter(|s| s.game == game).collect()
    }

    pub fn stats_for_player(&self, player: PlayerId) -> Vec<&Stats> {
        self.stats.iter().filter(|s| s.player == player).collect()
    }

    fn check_rival_name(&self, name: &str, except: Option<RivalId>) -> Result<(), RecordError> {
        let taken = self
            .rivals
            .iter()
            .filter(|r| Some(r.id) != except)
            .any(|r| r.team_name == name.trim());
        if taken {
            return Err(RecordError::DuplicateName {
                field: "team_name",
                name: name.trim().to_string(),
            });
        }
        Ok(())
    }

    fn check_player_name(&self, name: &str, except: Option<PlayerId>) -> Result<(), RecordError> {
        let taken = self
            .players
            .iter()
            .filter(|p| Some(p.id) != except)
            .any(|p| p.name == name.trim());
        if taken {
            return Err(RecordError::DuplicateName {
                field: "name",
                name: name.trim().to_string(),
            });
        }
        Ok(())
    }
}
