//! Running score computation with strike and spare lookahead.

use serde::{Deserialize, Serialize};

use crate::domain::frame::{is_complete, Frame, Frames};
use crate::domain::rules::{FRAMES_PER_GAME, PINS_PER_FRAME};

/// Cumulative score through one frame; `None` until every roll its bonus
/// depends on has been recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameScore {
    pub frame_no: u8,
    pub score: Option<u16>,
}

/// Recompute every frame's cumulative score from frame 1.
///
/// Stops at the first frame whose value cannot be resolved yet; that frame
/// and everything after it stay `None`.
pub fn compute_scores(frames: &Frames) -> [FrameScore; FRAMES_PER_GAME] {
    let mut out: [FrameScore; FRAMES_PER_GAME] = std::array::from_fn(|i| FrameScore {
        frame_no: frames[i].frame_no,
        score: None,
    });

    let mut running: u16 = 0;
    for (i, slot) in out.iter_mut().enumerate() {
        let Some(value) = frame_value(frames, i) else {
            break;
        };
        running += value;
        slot.score = Some(running);
    }
    out
}

/// Copy computed scores into the sheet for the caller to persist.
pub fn apply_scores(frames: &mut Frames, scores: &[FrameScore; FRAMES_PER_GAME]) {
    for (frame, s) in frames.iter_mut().zip(scores) {
        frame.score = s.score;
    }
}

/// Highest resolved cumulative score (0 before anything resolves).
pub fn total_score(frames: &Frames) -> u16 {
    compute_scores(frames)
        .iter()
        .filter_map(|s| s.score)
        .last()
        .unwrap_or(0)
}

fn frame_value(frames: &Frames, i: usize) -> Option<u16> {
    let frame = &frames[i];
    let r1 = frame.roll1?;

    if frame.is_last() {
        if !is_complete(frame) {
            return None;
        }
        return Some(frame.rolls().map(u16::from).sum());
    }

    let ten = u16::from(PINS_PER_FRAME);
    if frame.is_strike() {
        return strike_bonus(frames, i).map(|bonus| ten + bonus);
    }

    let r2 = frame.roll2?;
    if frame.is_spare() {
        let next = frames.get(i + 1)?;
        return next.roll1.map(|b| ten + u16::from(b));
    }
    Some(u16::from(r1) + u16::from(r2))
}

/// Next two balls after the strike in frame index `i` (frames 1-9).
fn strike_bonus(frames: &Frames, i: usize) -> Option<u16> {
    let next: &Frame = frames.get(i + 1)?;
    let first = next.roll1?;

    // A strike in frames 1-8 followed by another strike borrows the first
    // ball of the frame after; the tenth frame supplies both balls itself.
    let second = if next.is_strike() && !next.is_last() {
        frames.get(i + 2)?.roll1?
    } else {
        next.roll2?
    };

    Some(u16::from(first) + u16::from(second))
}
