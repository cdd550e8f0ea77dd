use std::ops::RangeInclusive;

pub const FRAMES_PER_GAME: usize = 10;
pub const PINS_PER_FRAME: u8 = 10;

/// Frame number of the tenth frame, the only one with bonus rolls.
pub const LAST_FRAME: u8 = FRAMES_PER_GAME as u8;

/// Maximum cumulative score (twelve strikes).
pub const PERFECT_GAME: u16 = 300;

pub fn valid_pin_range() -> RangeInclusive<i32> {
    0..=i32::from(PINS_PER_FRAME)
}
