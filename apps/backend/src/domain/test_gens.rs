// Proptest generators for legal bowling roll sequences.

use proptest::prelude::*;

use crate::domain::rules::PINS_PER_FRAME;

const TEN: u8 = PINS_PER_FRAME;

/// Rolls for one of frames 1-9: a strike, or two balls totalling at most ten.
pub fn regular_frame() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        1 => Just(vec![TEN]),
        3 => (0u8..TEN)
            .prop_flat_map(|r1| (Just(r1), 0u8..=(TEN - r1)))
            .prop_map(|(r1, r2)| vec![r1, r2]),
    ]
}

/// Rolls for the tenth frame, including any earned bonus balls.
pub fn tenth_frame() -> impl Strategy<Value = Vec<u8>> {
    let open = (0u8..TEN)
        .prop_flat_map(|r1| (Just(r1), 0u8..(TEN - r1)))
        .prop_map(|(r1, r2)| vec![r1, r2]);

    let spare = (0u8..TEN, 0u8..=TEN).prop_map(|(r1, r3)| vec![r1, TEN - r1, r3]);

    let strike = (0u8..=TEN, 0u8..=TEN).prop_map(|(r2, r3)| vec![TEN, r2, r3]);

    prop_oneof![2 => open, 1 => spare, 1 => strike]
}

/// Every roll of a complete, legal game in throw order.
pub fn complete_game() -> impl Strategy<Value = Vec<u8>> {
    (proptest::collection::vec(regular_frame(), 9), tenth_frame()).prop_map(|(frames, tenth)| {
        frames.into_iter().flatten().chain(tenth).collect::<Vec<u8>>()
    })
}

/// A legal game cut off after an arbitrary number of rolls, with the full
/// game alongside it.
pub fn partial_game() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    complete_game()
        .prop_flat_map(|rolls| {
            let n = rolls.len();
            (Just(rolls), 0..=n)
        })
        .prop_map(|(rolls, k)| (rolls[..k].to_vec(), rolls))
}
