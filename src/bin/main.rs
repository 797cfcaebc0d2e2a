use actix_web::{middleware::Logger, web, App, HttpServer};
use inhouse_server::{bot, http};
use sqlx::postgres::PgPoolOptions;
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Configuration
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into());

    // Postgres pool
    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to create Postgres pool");

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run migrations");

    // Telegram bot is optional; the HTTP API works without it.
    match env::var("TELEGRAM_BOT_TOKEN") {
        Ok(token) if !token.is_empty() => bot::start(db_pool.clone(), token),
        _ => log::info!("No Telegram bot token provided, bot disabled"),
    }

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(db_pool.clone()))
            .configure(http::routes::init_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
