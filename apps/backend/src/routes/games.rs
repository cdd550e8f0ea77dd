//! Game HTTP routes.

use actix_web::http::header::LOCATION;
use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;

use crate::domain::game::PlayerId;
use crate::error::AppError;
use crate::extractors::game_id::GameIdPath;
use crate::extractors::validated_json::ValidatedJson;
use crate::services::games::GameService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct RollRequest {
    #[serde(alias = "playerId")]
    pub player_id: i64,
    /// Kept signed so out-of-range values reach the domain check.
    pub pins: i32,
}

/// POST /api/game
///
/// Body is a JSON array of player names in lane order. Starts a game with one
/// empty score sheet per name.
async fn create_game(
    names: ValidatedJson<Vec<String>>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let snapshot = GameService::new().create_game(app_state.games.as_ref(), &names)?;

    Ok(HttpResponse::Created()
        .insert_header((LOCATION, format!("/api/game/{}", snapshot.id)))
        .json(snapshot))
}

/// GET /api/game/{game_id}
async fn get_game(
    game_id: GameIdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let snapshot = GameService::new().get_game(app_state.games.as_ref(), game_id.0)?;
    Ok(HttpResponse::Ok().json(snapshot))
}

/// POST /api/game/{game_id}/roll
///
/// Records one roll for a player and returns that player's rescored sheet.
async fn roll(
    game_id: GameIdPath,
    body: ValidatedJson<RollRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let RollRequest { player_id, pins } = body.into_inner();
    let player = GameService::new().roll(
        app_state.games.as_ref(),
        game_id.0,
        PlayerId(player_id),
        pins,
    )?;
    Ok(HttpResponse::Ok().json(player))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_game)));
    cfg.service(web::resource("/{game_id}").route(web::get().to(get_game)));
    cfg.service(web::resource("/{game_id}/roll").route(web::post().to(roll)));
}
