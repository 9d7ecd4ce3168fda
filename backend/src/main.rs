mod cache;
mod clock;
mod config;
mod error;
mod search;
mod service;
mod services;
mod session_controller;
mod store;

use crate::clock::SystemClock;
use crate::config::AppConfig;
use crate::service::AssetService;
use crate::session_controller::credentials::{CredentialVerifier, StaticCredentials};
use crate::session_controller::state::SessionsState;
use crate::store::SqliteAssetStore;
use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = AppConfig::from_env();
    info!("Starting asset inventory server");

    let store = SqliteAssetStore::open(&config.database_path).map_err(|e| {
        error!(
            "Failed to open database {}: {}",
            config.database_path.display(),
            e
        );
        std::io::Error::other(e.to_string())
    })?;
    info!("Database ready at {}", config.database_path.display());

    // Cold load before accepting requests.
    let service = web::Data::new(AssetService::new(
        Arc::new(store),
        Arc::new(SystemClock),
        config.page_size,
    ));
    service.warm_up();

    let sessions = web::Data::new(SessionsState::new());
    let verifier: Arc<dyn CredentialVerifier> = Arc::new(StaticCredentials::new(
        config.admin_username.clone(),
        config.admin_password.clone(),
    ));
    let verifier = web::Data::from(verifier);

    let host = config.host.clone();
    let port = config.port;
    let static_dir = config.static_dir.clone();
    let config = web::Data::new(config);

    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(config.clone())
            .app_data(service.clone())
            .app_data(sessions.clone())
            .app_data(verifier.clone())
            .service(services::auth::configure_routes())
            .service(services::entry::configure_routes())
            .service(services::assets::configure_routes())
            .service(Files::new("/static", static_dir.clone()))
            .route("/", web::get().to(services::pages::index))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
