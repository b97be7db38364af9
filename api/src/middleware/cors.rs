//! CORS policy

use actix_cors::Cors;
use actix_web::http::header;

/// Builds the CORS middleware.
///
/// `ALLOWED_ORIGINS` is a comma-separated origin list; when unset the
/// policy is permissive, which is only suitable for local development.
pub fn cors() -> Cors {
    match std::env::var("ALLOWED_ORIGINS") {
        Ok(origins) if !origins.trim().is_empty() => {
            let mut cors = Cors::default()
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec![
                    header::AUTHORIZATION,
                    header::CONTENT_TYPE,
                    header::ACCEPT,
                ])
                .supports_credentials()
                .max_age(3600);
            for origin in origins.split(',') {
                let origin = origin.trim();
                if !origin.is_empty() {
                    cors = cors.allowed_origin(origin);
                }
            }
            cors
        }
        _ => {
            log::warn!("ALLOWED_ORIGINS not set, CORS is permissive");
            Cors::permissive()
        }
    }
}
