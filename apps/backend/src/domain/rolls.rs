//! Applying a single roll to a player's sheet.

use crate::domain::errors::RollError;
use crate::domain::frame::{is_complete, Frame, Frames};
use crate::domain::rules::{valid_pin_range, PINS_PER_FRAME};

/// Record `pins` in the first incomplete frame.
///
/// Returns a new sheet with exactly one roll slot filled; `frames` itself is
/// never modified. Scores are not touched here, see
/// [`crate::domain::scoring::compute_scores`].
pub fn record_roll(frames: &Frames, pins: i32) -> Result<Frames, RollError> {
    if !valid_pin_range().contains(&pins) {
        return Err(RollError::InvalidPinCount(pins));
    }
    let pins = u8::try_from(pins).map_err(|_| RollError::InvalidPinCount(pins))?;

    let idx = frames
        .iter()
        .position(|f| !is_complete(f))
        .ok_or(RollError::GameAlreadyComplete)?;

    let mut updated = *frames;
    fill_next_slot(&mut updated[idx], pins)?;
    Ok(updated)
}

/// Frame number that the next roll will land in, `None` once finished.
pub fn current_frame(frames: &Frames) -> Option<u8> {
    frames.iter().find(|f| !is_complete(f)).map(|f| f.frame_no)
}

pub fn is_finished(frames: &Frames) -> bool {
    frames.iter().all(is_complete)
}

fn fill_next_slot(frame: &mut Frame, pins: u8) -> Result<(), RollError> {
    let invalid = RollError::InvalidRoll {
        frame_no: frame.frame_no,
        pins,
    };

    match (frame.roll1, frame.roll2, frame.roll3) {
        (None, _, _) => frame.roll1 = Some(pins),
        (Some(r1), None, _) => {
            // A tenth-frame strike resets the rack for the second ball.
            let fresh_rack = frame.is_last() && r1 == PINS_PER_FRAME;
            if !fresh_rack && r1 + pins > PINS_PER_FRAME {
                return Err(invalid);
            }
            frame.roll2 = Some(pins);
        }
        (Some(r1), Some(r2), None) if frame.is_last() && earns_bonus_ball(r1, r2) => {
            frame.roll3 = Some(pins);
        }
        _ => return Err(invalid),
    }
    Ok(())
}

/// The tenth frame's third ball is earned by a strike or spare in its first
/// two; any in-range pin count is then accepted.
fn earns_bonus_ball(r1: u8, r2: u8) -> bool {
    r1 == PINS_PER_FRAME || r1 + r2 == PINS_PER_FRAME
}
