//! Game repository interface used by the service layer.

use time::OffsetDateTime;

use crate::domain::game::{Game, GameId, Player, PlayerId};
use crate::errors::domain::DomainError;

/// Storage for games and their players.
///
/// Implementations must serialise `update_player` calls for the same game so
/// that a roll's record, rescore and save happen against one consistent sheet.
pub trait GameStore: Send + Sync {
    /// Persist a new game with one player per name, assigning fresh ids.
    fn create(&self, names: &[String], created_at: OffsetDateTime) -> Game;

    fn find(&self, game_id: GameId) -> Option<Game>;

    fn exists(&self, game_id: GameId) -> bool {
        self.find(game_id).is_some()
    }

    /// Apply `f` to one player while holding the game's lock and keep the
    /// change if `f` succeeds. Returns the player as stored afterwards.
    ///
    /// Fails with `NotFound` when the game or the player (within that game)
    /// does not exist.
    fn update_player(
        &self,
        game_id: GameId,
        player_id: PlayerId,
        f: &mut dyn FnMut(&mut Player) -> Result<(), DomainError>,
    ) -> Result<Player, DomainError>;
}
