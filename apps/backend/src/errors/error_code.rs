//! Error codes for the bowling backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Roll validation
    /// Pin count outside 0..=10
    InvalidPinCount,
    /// Pins exceed what is standing, or the ball is not earned
    InvalidRoll,
    /// Player has already finished all ten frames
    GameAlreadyComplete,

    // Request validation
    /// Blank, overlong, or missing player names
    InvalidPlayerName,
    /// Invalid game ID provided
    InvalidGameId,
    /// General bad request error
    BadRequest,

    // Resource not found
    /// Game not found
    GameNotFound,
    /// Player not found in the game
    PlayerNotFound,

    // System errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Canonical SCREAMING_SNAKE_CASE string, exactly as sent to clients.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPinCount => "INVALID_PIN_COUNT",
            Self::InvalidRoll => "INVALID_ROLL",
            Self::GameAlreadyComplete => "GAME_ALREADY_COMPLETE",

            Self::InvalidPlayerName => "INVALID_PLAYER_NAME",
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    pub const ALL: [ErrorCode; 10] = [
        Self::InvalidPinCount,
        Self::InvalidRoll,
        Self::GameAlreadyComplete,
        Self::InvalidPlayerName,
        Self::InvalidGameId,
        Self::BadRequest,
        Self::GameNotFound,
        Self::PlayerNotFound,
        Self::Internal,
        Self::ConfigError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
