use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use careerhub::config::{EnvConfig, CONFIG};
use careerhub::db::postgres_service::PostgresService;
use careerhub::routes::configure_routes;
use careerhub::utils::links::LinkBuilder;
use careerhub::utils::token::TokenService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    CONFIG.set(config.clone()).ok();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    let token_service = TokenService::new(config.jwt.clone());
    let link_builder = LinkBuilder::new(&config.public_url);

    log::info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(web::Data::new(token_service.clone()))
            .app_data(web::Data::new(link_builder.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
