//! Game lifecycle services: creating games, reading them back, rolling.

use time::OffsetDateTime;
use tracing::{debug, info};

use crate::domain::game::{validate_player_names, GameId, PlayerId};
use crate::domain::snapshot::{player_snapshot, snapshot, GameSnapshot, PlayerSnapshot};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::games::GameStore;

/// Game domain service.
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    /// Validate the names and start a game with one empty sheet per player.
    pub fn create_game(
        &self,
        store: &dyn GameStore,
        names: &[String],
    ) -> Result<GameSnapshot, DomainError> {
        let names = validate_player_names(names)?;
        let game = store.create(&names, OffsetDateTime::now_utc());

        info!(game_id = %game.id, players = game.players.len(), "Game created");
        Ok(snapshot(&game))
    }

    pub fn get_game(
        &self,
        store: &dyn GameStore,
        game_id: GameId,
    ) -> Result<GameSnapshot, DomainError> {
        store.find(game_id).map(|g| snapshot(&g)).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
        })
    }

    /// Record `pins` for one player and return their rescored sheet.
    ///
    /// A rejected roll leaves the stored sheet untouched.
    pub fn roll(
        &self,
        store: &dyn GameStore,
        game_id: GameId,
        player_id: PlayerId,
        pins: i32,
    ) -> Result<PlayerSnapshot, DomainError> {
        let result = store.update_player(game_id, player_id, &mut |player| {
            player.roll(pins).map_err(DomainError::from)
        });

        match result {
            Ok(player) => {
                let snap = player_snapshot(&player);
                debug!(
                    game_id = %game_id,
                    player_id = %player_id,
                    pins,
                    total_score = snap.total_score,
                    current_frame = ?snap.current_frame,
                    "Roll recorded"
                );
                Ok(snap)
            }
            Err(err) => {
                info!(
                    game_id = %game_id,
                    player_id = %player_id,
                    pins,
                    error = %err,
                    "Roll rejected"
                );
                Err(err)
            }
        }
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}
