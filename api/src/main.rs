//! PDFolio API server entry point

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};

use pf_api::middleware::cors;
use pf_api::{configure_app, AppState};
use pf_core::services::auth::AuthService;
use pf_core::services::document::DocumentService;
use pf_core::services::generation::{GenerationParams, GenerationService};
use pf_core::services::rate_limit::RateLimiter;
use pf_core::services::token::TokenService;
use pf_infra::database::{create_pool, MySqlUserRepository};
use pf_infra::inference::HuggingFaceClient;
use pf_infra::pdf::{FileSystemStore, PrintPdfRenderer};
use pf_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(invalid_input)?;

    let pool = create_pool(&config.database).await.map_err(startup_error)?;
    let repository = Arc::new(MySqlUserRepository::new(pool));

    let auth = Arc::new(AuthService::new(repository));
    let tokens = Arc::new(TokenService::new(&config.jwt));

    let inference = HuggingFaceClient::new(&config.inference).map_err(startup_error)?;
    let generation = Arc::new(GenerationService::new(
        Arc::new(inference),
        GenerationParams {
            max_new_tokens: config.inference.max_new_tokens,
            temperature: config.inference.temperature,
            top_p: config.inference.top_p,
        },
    ));

    let documents = Arc::new(DocumentService::new(
        Arc::new(PrintPdfRenderer),
        Arc::new(FileSystemStore::new(&config.documents.output_dir)),
        config.documents.public_prefix.clone(),
    ));

    let login_limiter = Arc::new(RateLimiter::new(
        config.rate_limit.login.window_ms,
        config.rate_limit.max_tracked_keys,
    ));
    let register_limiter = Arc::new(RateLimiter::new(
        config.rate_limit.register.window_ms,
        config.rate_limit.max_tracked_keys,
    ));

    // Sweep each limiter once per window; the handles abort the tasks
    // on shutdown.
    let _login_sweeper =
        login_limiter.start_sweeper(Duration::from_millis(config.rate_limit.login.window_ms));
    let _register_sweeper = register_limiter
        .start_sweeper(Duration::from_millis(config.rate_limit.register.window_ms));

    let state = web::Data::new(AppState {
        auth,
        tokens,
        generation,
        documents,
        login_limiter,
        register_limiter,
        rate_limits: config.rate_limit.clone(),
        document_dir: PathBuf::from(&config.documents.output_dir),
    });

    let bind_address = config.server.bind_address();
    log::info!("starting server on {bind_address}");

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(cors())
            .configure(configure_app)
    })
    .bind(&bind_address)?;

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.run().await
}

fn invalid_input(message: String) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, message)
}

fn startup_error(err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
}
