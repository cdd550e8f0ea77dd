use crate::domain::errors::RollError;
use crate::domain::frame::{is_complete, new_frames};
use crate::domain::rolls::{current_frame, is_finished, record_roll};
use crate::domain::test_state_helpers::frames_from_rolls;

const PERFECT: [i32; 12] = [10; 12];

#[test]
fn first_roll_lands_in_frame_one() {
    let frames = record_roll(&new_frames(), 4).unwrap();
    assert_eq!(frames[0].roll1, Some(4));
    assert_eq!(frames[0].roll2, None);
    assert_eq!(current_frame(&frames), Some(1));
    // Nothing else moved, including scores.
    assert_eq!(&frames[1..], &new_frames()[1..]);
    assert_eq!(frames[0].score, None);
}

#[test]
fn input_sheet_is_never_mutated() {
    let before = frames_from_rolls(&[4]);
    let snapshot = before;
    let after = record_roll(&before, 3).unwrap();
    assert_eq!(before, snapshot);
    assert_eq!(after[0].roll2, Some(3));
}

#[test]
fn zero_is_a_real_roll() {
    let frames = frames_from_rolls(&[0]);
    assert_eq!(frames[0].roll1, Some(0));
    let frames = record_roll(&frames, 0).unwrap();
    assert_eq!(frames[0].roll2, Some(0));
    assert!(is_complete(&frames[0]));
    assert_eq!(current_frame(&frames), Some(2));
}

#[test]
fn strike_moves_to_next_frame() {
    let frames = frames_from_rolls(&[10, 3]);
    assert_eq!(frames[0].roll1, Some(10));
    assert_eq!(frames[0].roll2, None);
    assert_eq!(frames[1].roll1, Some(3));
}

#[test]
fn pins_out_of_range_are_rejected_before_anything_else() {
    let done = frames_from_rolls(&PERFECT);
    for pins in [-1, 11, 100, i32::MIN, i32::MAX] {
        assert_eq!(
            record_roll(&new_frames(), pins),
            Err(RollError::InvalidPinCount(pins))
        );
        // Range is checked even when the game is over.
        assert_eq!(record_roll(&done, pins), Err(RollError::InvalidPinCount(pins)));
    }
}

#[test]
fn second_roll_cannot_exceed_remaining_pins() {
    let frames = frames_from_rolls(&[7]);
    assert_eq!(
        record_roll(&frames, 6),
        Err(RollError::InvalidRoll {
            frame_no: 1,
            pins: 6
        })
    );
    assert_eq!(frames[0].roll2, None);

    // Exactly the remaining pins is a spare and is fine.
    let frames = record_roll(&frames, 3).unwrap();
    assert!(frames[0].is_spare());
}

#[test]
fn completed_game_rejects_further_rolls() {
    for rolls in [
        PERFECT.to_vec(),
        vec![0; 20],
        [vec![3, 4].repeat(9), vec![5, 5, 5]].concat(),
    ] {
        let frames = frames_from_rolls(&rolls);
        assert!(is_finished(&frames));
        assert_eq!(current_frame(&frames), None);
        for pins in 0..=10 {
            assert_eq!(record_roll(&frames, pins), Err(RollError::GameAlreadyComplete));
        }
    }
}

#[test]
fn tenth_frame_open_gets_no_third_ball() {
    let frames = frames_from_rolls(&[[0, 0].repeat(9), vec![4, 5]].concat());
    assert!(is_finished(&frames));
    assert_eq!(frames[9].roll3, None);
    assert_eq!(record_roll(&frames, 1), Err(RollError::GameAlreadyComplete));
}

#[test]
fn tenth_frame_second_ball_respects_rack_without_strike() {
    let frames = frames_from_rolls(&[[0, 0].repeat(9), vec![6]].concat());
    assert_eq!(
        record_roll(&frames, 5),
        Err(RollError::InvalidRoll {
            frame_no: 10,
            pins: 5
        })
    );
}

#[test]
fn tenth_frame_strike_resets_rack() {
    let frames = frames_from_rolls(&[[0, 0].repeat(9), vec![10, 10, 10]].concat());
    assert_eq!(frames[9].roll1, Some(10));
    assert_eq!(frames[9].roll2, Some(10));
    assert_eq!(frames[9].roll3, Some(10));
    assert!(is_finished(&frames));
}

#[test]
fn tenth_frame_strike_earns_any_third_ball() {
    let frames = frames_from_rolls(&[[0, 0].repeat(9), vec![10, 5]].concat());
    assert!(!is_finished(&frames));
    let frames = record_roll(&frames, 6).unwrap();
    assert_eq!(frames[9].rolls().collect::<Vec<_>>(), vec![10, 5, 6]);
    assert!(is_finished(&frames));
}

#[test]
fn tenth_frame_third_ball_still_range_checked() {
    let frames = frames_from_rolls(&[[0, 0].repeat(9), vec![10, 5]].concat());
    assert_eq!(record_roll(&frames, 11), Err(RollError::InvalidPinCount(11)));
    assert_eq!(frames[9].roll3, None);
}

#[test]
fn tenth_frame_spare_gets_fresh_rack() {
    let frames = frames_from_rolls(&[[0, 0].repeat(9), vec![3, 7]].concat());
    assert!(!is_finished(&frames));
    let frames = record_roll(&frames, 10).unwrap();
    assert_eq!(frames[9].roll3, Some(10));
    assert!(is_finished(&frames));
}

#[test]
fn rejected_roll_can_be_retried_with_legal_pins() {
    let frames = frames_from_rolls(&[8]);
    assert!(record_roll(&frames, 3).is_err());
    let frames = record_roll(&frames, 2).unwrap();
    assert_eq!(frames[0].rolls().collect::<Vec<_>>(), vec![8, 2]);
}
