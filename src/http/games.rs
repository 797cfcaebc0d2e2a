//! Game submission endpoint.

use actix_web::{post, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;

use crate::game::types::CreateGameRequest;
use crate::service::games::{self, SubmitError};

/// POST /api/games
#[post("/games")]
pub async fn create_game(
    db: web::Data<PgPool>,
    req: web::Json<CreateGameRequest>,
) -> impl Responder {
    match games::submit(db.get_ref(), &req).await {
        Ok(game_id) => HttpResponse::Created().json(json!({ "game_id": game_id })),
        Err(e @ (SubmitError::Validation(_) | SubmitError::UnknownPlayer(_))) => {
            HttpResponse::BadRequest().json(json!({ "error": e.to_string() }))
        }
        Err(e) => {
            log::error!("game submission failed: {e:?}");
            HttpResponse::InternalServerError().json(json!({ "error": "failed to record game" }))
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_game);
}
