//! Games and the players bowling in them.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::errors::RollError;
use crate::domain::frame::{new_frames, Frames};
use crate::domain::rolls::record_roll;
use crate::domain::scoring::{apply_scores, compute_scores};
use crate::errors::domain::{DomainError, ValidationKind};

pub const MAX_PLAYER_NAME_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub i64);

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: GameId,
    pub created_at: OffsetDateTime,
    /// Players in lane order.
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    /// Owning game, for lookups only.
    pub game_id: GameId,
    pub name: String,
    pub frames: Frames,
}

impl Game {
    pub fn new(id: GameId, created_at: OffsetDateTime) -> Self {
        Self {
            id,
            created_at,
            players: Vec::new(),
        }
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn player_mut(&mut self, player_id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    /// True once every player has finished all ten frames.
    pub fn is_finished(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(Player::is_finished)
    }
}

impl Player {
    /// A player with ten empty frames.
    pub fn new(id: PlayerId, game_id: GameId, name: impl Into<String>) -> Self {
        Self {
            id,
            game_id,
            name: name.into(),
            frames: new_frames(),
        }
    }

    /// Record one roll and refresh every frame's cumulative score.
    ///
    /// On error the sheet is left exactly as it was.
    pub fn roll(&mut self, pins: i32) -> Result<(), RollError> {
        let mut updated = record_roll(&self.frames, pins)?;
        let scores = compute_scores(&updated);
        apply_scores(&mut updated, &scores);
        self.frames = updated;
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        crate::domain::rolls::is_finished(&self.frames)
    }
}

/// Trim and check the names a new game is created with.
pub fn validate_player_names(names: &[String]) -> Result<Vec<String>, DomainError> {
    if names.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerName,
            "A game needs at least one player",
        ));
    }

    names
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let name = raw.trim();
            if name.is_empty() {
                return Err(DomainError::validation(
                    ValidationKind::InvalidPlayerName,
                    format!("Player name at position {} is blank", i + 1),
                ));
            }
            if name.chars().count() > MAX_PLAYER_NAME_LEN {
                return Err(DomainError::validation(
                    ValidationKind::InvalidPlayerName,
                    format!("Player name at position {} exceeds {MAX_PLAYER_NAME_LEN} characters", i + 1),
                ));
            }
            Ok(name.to_string())
        })
        .collect()
}
