use reqwest::{Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForumClientError {
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Server error ({0}): {1}")]
    Server(StatusCode, String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ForumClientError {
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| body.trim().to_string());

        match status {
            StatusCode::NOT_FOUND => ForumClientError::NotFound(message),
            StatusCode::BAD_REQUEST => ForumClientError::InvalidRequest(message),
            other => ForumClientError::Server(other, message),
        }
    }

    pub(crate) async fn from_http_response(resp: Response) -> Self {
        let status = resp.status();
        match resp.text().await {
            Ok(body) => Self::from_status(status, &body),
            Err(err) => ForumClientError::RequestError(err),
        }
    }
}
