use actix_web::error::{InternalError, JsonPayloadError, PathError};
use actix_web::{Error, HttpMessage, HttpRequest, HttpResponse, web};
use serde_json::json;

use crate::domain::error::DomainError;
use crate::presentation::middleware::RequestId;

pub fn request_id(req: &HttpRequest) -> String {
    req.extensions()
        .get::<RequestId>()
        .map(|rid| rid.0.clone())
        .unwrap_or_else(|| "unknown".into())
}

/// Malformed bodies get the same envelope as validation failures.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req| {
        DomainError::Validation(format!("invalid request body: {}", err)).into()
    })
}

/// An id that is not a UUID cannot name an existing post.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, _req| -> Error {
        InternalError::from_response(
            err,
            HttpResponse::NotFound().json(json!({ "error": "post not found" })),
        )
        .into()
    })
}
