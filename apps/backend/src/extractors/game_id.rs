use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use crate::domain::game;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;

/// Game id taken from the `{game_id}` path segment.
///
/// Rejects ids that are not positive integers (400) and ids with no stored
/// game behind them (404).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameIdPath(pub game::GameId);

impl GameIdPath {
    pub fn parse(raw: &str) -> Result<game::GameId, AppError> {
        let id = raw.parse::<i64>().map_err(|_| {
            AppError::bad_request(ErrorCode::InvalidGameId, format!("Invalid game id: {raw}"))
        })?;

        if id <= 0 {
            return Err(AppError::bad_request(
                ErrorCode::InvalidGameId,
                format!("Game id must be positive, got: {id}"),
            ));
        }
        Ok(game::GameId(id))
    }
}

impl FromRequest for GameIdPath {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<GameIdPath, AppError> {
    let raw = req.match_info().get("game_id").ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidGameId, "Missing game_id parameter")
    })?;
    let game_id = GameIdPath::parse(raw)?;

    let app_state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available"))?;

    if !app_state.games.exists(game_id) {
        return Err(AppError::not_found(
            ErrorCode::GameNotFound,
            format!("Game {game_id} not found"),
        ));
    }

    Ok(GameIdPath(game_id))
}
