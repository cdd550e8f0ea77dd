//! Frame data and completion classification.
//!
//! Roll slots are `Option<u8>`: `None` means the ball has not been thrown,
//! `Some(0)` is a gutter ball. The two are never interchangeable.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{FRAMES_PER_GAME, LAST_FRAME, PINS_PER_FRAME};

/// One of the ten scoring units on a player's sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// 1-based frame number.
    pub frame_no: u8,
    pub roll1: Option<u8>,
    pub roll2: Option<u8>,
    /// Only ever set on the tenth frame.
    pub roll3: Option<u8>,
    /// Cumulative score through this frame, once its bonus is resolvable.
    pub score: Option<u16>,
}

/// A player's full sheet, indexed by `frame_no - 1`.
pub type Frames = [Frame; FRAMES_PER_GAME];

impl Frame {
    pub const fn empty(frame_no: u8) -> Self {
        Self {
            frame_no,
            roll1: None,
            roll2: None,
            roll3: None,
            score: None,
        }
    }

    pub const fn is_last(&self) -> bool {
        self.frame_no == LAST_FRAME
    }

    /// All ten pins on the first ball.
    pub fn is_strike(&self) -> bool {
        self.roll1 == Some(PINS_PER_FRAME)
    }

    /// All ten pins across the first two balls, without a strike.
    pub fn is_spare(&self) -> bool {
        match (self.roll1, self.roll2) {
            (Some(r1), Some(r2)) => r1 < PINS_PER_FRAME && r1 + r2 == PINS_PER_FRAME,
            _ => false,
        }
    }

    /// Recorded rolls in slot order.
    pub fn rolls(&self) -> impl Iterator<Item = u8> {
        [self.roll1, self.roll2, self.roll3].into_iter().flatten()
    }

    pub fn is_started(&self) -> bool {
        self.roll1.is_some()
    }
}

/// Ten empty frames numbered 1..=10.
pub fn new_frames() -> Frames {
    std::array::from_fn(|i| Frame::empty(i as u8 + 1))
}

/// Whether `frame` has received every roll it is allowed.
///
/// Frames 1-9 close on a strike or on a second ball. The tenth frame closes
/// after two balls unless they knocked down ten or more pins, in which case
/// it waits for the bonus ball.
pub fn is_complete(frame: &Frame) -> bool {
    if frame.is_last() {
        return match (frame.roll1, frame.roll2) {
            (Some(r1), Some(r2)) if u16::from(r1) + u16::from(r2) >= u16::from(PINS_PER_FRAME) => {
                frame.roll3.is_some()
            }
            (Some(_), Some(_)) => true,
            _ => false,
        };
    }

    frame.is_strike() || frame.roll2.is_some()
}
