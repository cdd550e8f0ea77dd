//! In-memory game store.
//!
//! Each game sits behind its own mutex, so rolls for one game are processed
//! one at a time while other games proceed independently.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use time::OffsetDateTime;

use crate::domain::game::{Game, GameId, Player, PlayerId};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::games::GameStore;

/// Games live for the life of the process: nothing is ever evicted, so
/// memory grows with every game created. `len` reports how many are held.
#[derive(Debug)]
pub struct InMemoryGames {
    games: RwLock<HashMap<GameId, Arc<Mutex<Game>>>>,
    next_game_id: AtomicI64,
    next_player_id: AtomicI64,
}

impl InMemoryGames {
    pub fn new() -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
            next_game_id: AtomicI64::new(1),
            next_player_id: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.games.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.read().is_empty()
    }

    fn entry(&self, game_id: GameId) -> Option<Arc<Mutex<Game>>> {
        self.games.read().get(&game_id).cloned()
    }
}

impl Default for InMemoryGames {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStore for InMemoryGames {
    fn create(&self, names: &[String], created_at: OffsetDateTime) -> Game {
        let id = GameId(self.next_game_id.fetch_add(1, Ordering::Relaxed));
        let mut game = Game::new(id, created_at);
        for name in names {
            let player_id = PlayerId(self.next_player_id.fetch_add(1, Ordering::Relaxed));
            game.players.push(Player::new(player_id, id, name.clone()));
        }

        self.games
            .write()
            .insert(id, Arc::new(Mutex::new(game.clone())));
        game
    }

    fn find(&self, game_id: GameId) -> Option<Game> {
        self.entry(game_id).map(|g| g.lock().clone())
    }

    fn exists(&self, game_id: GameId) -> bool {
        self.games.read().contains_key(&game_id)
    }

    fn update_player(
        &self,
        game_id: GameId,
        player_id: PlayerId,
        f: &mut dyn FnMut(&mut Player) -> Result<(), DomainError>,
    ) -> Result<Player, DomainError> {
        let entry = self.entry(game_id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
        })?;

        let mut game = entry.lock();
        let player = game.player_mut(player_id).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {player_id} not found in game {game_id}"),
            )
        })?;

        f(player)?;
        Ok(player.clone())
    }
}
