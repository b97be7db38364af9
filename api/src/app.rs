//! Route table

use actix_web::web;

use crate::routes;

/// Mounts every route onto the application.
///
/// The JSON API lives under `/api/v1`; generated PDFs are served from
/// the public prefix outside the versioned scope.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(routes::auth::register))
                    .route("/login", web::post().to(routes::auth::login)),
            )
            .route("/chat", web::post().to(routes::chat::generate))
            .route("/documents", web::post().to(routes::documents::create))
            .route("/profile", web::get().to(routes::profile::get_profile))
            .route("/profile", web::put().to(routes::profile::update_profile)),
    )
    .route("/pdfs/{filename}", web::get().to(routes::documents::fetch))
    .route("/health", web::get().to(routes::health));
}
