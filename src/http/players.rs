//! Player listing.

use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;

use crate::db::player_repo;

/// GET /api/players
#[get("/players")]
pub async fn list_players(db: web::Data<PgPool>) -> impl Responder {
    match player_repo::list_all(db.get_ref()).await {
        Ok(players) => HttpResponse::Ok().json(players),
        Err(e) => {
            log::error!("listing players failed: {e:?}");
            HttpResponse::InternalServerError().json(json!({ "error": "failed to list players" }))
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_players);
}
