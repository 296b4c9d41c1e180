use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use std::time::Duration;
use thiserror::Error;

// Everything a request can fail with, mapped to the client-facing envelope below
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("too many requests, try again later")]
    RateLimited,

    #[error("{0}")]
    Validation(String),

    // status kept as u16 so the error stays independent of http crate versions
    #[error("upstream returned status {status}: {message}")]
    Upstream {
        status: u16,
        message: String,
        details: Option<Value>,
    },

    #[error("upstream request timed out after {0:?}")]
    Timeout(Duration),

    #[error("failed to reach upstream: {0}")]
    Transport(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            ProxyError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, "Too Many Requests", None),
            ProxyError::Validation(_) => (StatusCode::BAD_REQUEST, "Invalid Request", None),
            ProxyError::Upstream { details, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                details.clone(),
            ),
            ProxyError::Timeout(_) | ProxyError::Transport(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                None,
            ),
        };

        let mut body = json!({
            "error": error,
            "message": self.to_string(),
        });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, Json(body)).into_response()
    }
}
