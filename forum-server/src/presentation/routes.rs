use actix_cors::Cors;
use actix_web::{HttpResponse, Responder, web};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::infrastructure::config::AppConfig;
use crate::presentation::handlers;
use crate::presentation::utils::{json_config, path_config};

/// Mounts the forum API under `/api`. `/posts/root` is registered before
/// `/posts/{id}` so it is not taken for an id.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .app_data(path_config())
            .route("/health", web::get().to(health))
            .service(handlers::post::list_root_posts)
            .service(handlers::post::create_post)
            .service(handlers::comment::list_comments)
            .service(handlers::comment::create_comment)
            .service(handlers::post::get_post),
    );
}

pub fn build_cors(config: &AppConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::ACCEPT,
        ])
        .expose_headers(vec!["x-request-id", "server-timing"])
        .max_age(3600);

    if config.allows_any_origin() {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.cors_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}
