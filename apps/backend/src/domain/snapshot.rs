//! Public, serialisable view of a game's scoreboard.

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use tracing::warn;

use crate::domain::frame::{Frame, Frames};
use crate::domain::game::{Game, GameId, Player, PlayerId};
use crate::domain::rolls::{current_frame, is_finished};
use crate::domain::scoring::{apply_scores, compute_scores, total_score};

pub const UNKNOWN_DATE: &str = "unknown";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame_number: u8,
    pub roll1: Option<u8>,
    pub roll2: Option<u8>,
    pub roll3: Option<u8>,
    pub score: Option<u16>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub game_id: GameId,
    pub name: String,
    pub frames: Vec<FrameSnapshot>,
    pub total_score: u16,
    /// Frame the next roll lands in; absent once the player is done.
    pub current_frame: Option<u8>,
    pub is_finished: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub id: GameId,
    /// RFC 3339 creation time.
    pub date_played: String,
    pub players: Vec<PlayerSnapshot>,
    pub is_finished: bool,
}

impl From<&Frame> for FrameSnapshot {
    fn from(f: &Frame) -> Self {
        Self {
            frame_number: f.frame_no,
            roll1: f.roll1,
            roll2: f.roll2,
            roll3: f.roll3,
            score: f.score,
        }
    }
}

/// Snapshot a single player. Scores are recomputed from the rolls so the
/// view never depends on whether stored scores are current.
pub fn player_snapshot(player: &Player) -> PlayerSnapshot {
    let frames = scored(&player.frames);
    PlayerSnapshot {
        id: player.id,
        game_id: player.game_id,
        name: player.name.clone(),
        frames: frames.iter().map(FrameSnapshot::from).collect(),
        total_score: total_score(&frames),
        current_frame: current_frame(&frames),
        is_finished: is_finished(&frames),
    }
}

pub fn snapshot(game: &Game) -> GameSnapshot {
    GameSnapshot {
        id: game.id,
        date_played: date_played(game),
        players: game.players.iter().map(player_snapshot).collect(),
        is_finished: game.is_finished(),
    }
}

fn scored(frames: &Frames) -> Frames {
    let mut out = *frames;
    apply_scores(&mut out, &compute_scores(frames));
    out
}

/// RFC 3339 creation time. Offsets with a seconds component cannot be
/// written in RFC 3339; those are logged and reported as `"unknown"`.
fn date_played(game: &Game) -> String {
    game.created_at.format(&Rfc3339).unwrap_or_else(|e| {
        warn!(
            game_id = %game.id,
            created_at = %game.created_at,
            error = %e,
            "Cannot format game date as RFC 3339"
        );
        UNKNOWN_DATE.to_string()
    })
}
