// Unit tests for error mapping - pure domain logic without HTTP
use crate::domain::errors::RollError;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_roll_errors_to_400() {
    let cases = [
        (RollError::InvalidPinCount(11), ErrorCode::InvalidPinCount),
        (
            RollError::InvalidRoll {
                frame_no: 1,
                pins: 6,
            },
            ErrorCode::InvalidRoll,
        ),
        (RollError::GameAlreadyComplete, ErrorCode::GameAlreadyComplete),
    ];

    for (roll_err, code) in cases {
        let app: AppError = DomainError::from(roll_err).into();
        assert_eq!(app.code(), code);
        assert_eq!(app.status().as_u16(), 400);
        assert_eq!(app.detail(), roll_err.to_string());
    }
}

#[test]
fn roll_error_kind_is_preserved() {
    let de: DomainError = RollError::GameAlreadyComplete.into();
    assert!(matches!(
        de,
        DomainError::Validation(ValidationKind::GameAlreadyComplete, _)
    ));
}

#[test]
fn maps_player_name_validation_to_400() {
    let de = DomainError::validation(ValidationKind::InvalidPlayerName, "blank");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidPlayerName);
    assert_eq!(app.status().as_u16(), 400);
    assert_eq!(app.detail(), "blank");
}

#[test]
fn maps_not_found_to_404() {
    let app: AppError = DomainError::not_found(NotFoundKind::Game, "no game").into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError = DomainError::not_found(NotFoundKind::Player, "no player").into();
    assert_eq!(app.code().as_str(), "PLAYER_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}
