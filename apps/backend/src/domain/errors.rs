use thiserror::Error;

/// Why a roll was refused. The frame sheet is untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    #[error("pin count {0} is outside 0..=10")]
    InvalidPinCount(i32),
    #[error("{pins} pins is not a legal roll in frame {frame_no}")]
    InvalidRoll { frame_no: u8, pins: u8 },
    #[error("every frame is already complete")]
    GameAlreadyComplete,
}
