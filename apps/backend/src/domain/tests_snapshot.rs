use time::macros::datetime;
use time::UtcOffset;

use crate::domain::game::{Game, GameId, Player, PlayerId};
use crate::domain::snapshot::{player_snapshot, snapshot, UNKNOWN_DATE};

fn two_player_game() -> Game {
    let mut game = Game::new(GameId(3), datetime!(2024-03-01 18:30:00 UTC));
    game.players.push(Player::new(PlayerId(10), game.id, "Ann"));
    game.players.push(Player::new(PlayerId(11), game.id, "Bob"));
    game
}

#[test]
fn fresh_game_snapshot() {
    let snap = snapshot(&two_player_game());
    assert_eq!(snap.id, GameId(3));
    assert_eq!(snap.date_played, "2024-03-01T18:30:00Z");
    assert!(!snap.is_finished);
    assert_eq!(snap.players.len(), 2);

    let ann = &snap.players[0];
    assert_eq!(ann.name, "Ann");
    assert_eq!(ann.total_score, 0);
    assert_eq!(ann.current_frame, Some(1));
    assert_eq!(ann.frames.len(), 10);
    assert_eq!(ann.frames[9].frame_number, 10);
}

#[test]
fn player_snapshot_tracks_progress() {
    let mut game = two_player_game();
    let ann = game.player_mut(PlayerId(10)).unwrap();
    for pins in [10, 3, 4, 6] {
        ann.roll(pins).unwrap();
    }

    let snap = player_snapshot(game.player(PlayerId(10)).unwrap());
    assert_eq!(snap.frames[0].roll1, Some(10));
    assert_eq!(snap.frames[0].score, Some(17));
    assert_eq!(snap.frames[1].score, Some(24));
    assert_eq!(snap.frames[2].roll1, Some(6));
    assert_eq!(snap.frames[2].score, None);
    assert_eq!(snap.total_score, 24);
    assert_eq!(snap.current_frame, Some(3));
    assert!(!snap.is_finished);
}

#[test]
fn snapshot_recomputes_scores_from_rolls() {
    let mut game = two_player_game();
    let bob = game.player_mut(PlayerId(11)).unwrap();
    bob.roll(4).unwrap();
    bob.roll(4).unwrap();
    bob.frames[0].score = Some(200);

    let snap = player_snapshot(game.player(PlayerId(11)).unwrap());
    assert_eq!(snap.frames[0].score, Some(8));
}

#[test]
fn snapshot_serializes_absent_values_as_null() {
    let snap = snapshot(&two_player_game());
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["players"][0]["id"], 10);
    assert!(json["players"][0]["frames"][0]["roll1"].is_null());
    assert!(json["players"][0]["frames"][0]["score"].is_null());
    assert_eq!(json["players"][0]["current_frame"], 1);
}

#[test]
fn unformattable_date_is_reported_as_unknown() {
    let mut game = two_player_game();
    let odd_offset = UtcOffset::from_hms(1, 0, 30).unwrap();
    game.created_at = game.created_at.replace_offset(odd_offset);

    let snap = snapshot(&game);
    assert_eq!(snap.date_played, UNKNOWN_DATE);
    assert_eq!(snap.players.len(), 2);
}
