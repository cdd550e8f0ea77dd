//! Domain layer: pure bowling rules, no I/O.

pub mod errors;
pub mod frame;
pub mod game;
pub mod rolls;
pub mod rules;
pub mod scoring;
pub mod snapshot;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_rolls;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use errors::RollError;
pub use frame::{is_complete, new_frames, Frame, Frames};
pub use game::{validate_player_names, Game, GameId, Player, PlayerId};
pub use rolls::{current_frame, is_finished, record_roll};
pub use scoring::{apply_scores, compute_scores, total_score, FrameScore};
pub use snapshot::{player_snapshot, snapshot, FrameSnapshot, GameSnapshot, PlayerSnapshot};
