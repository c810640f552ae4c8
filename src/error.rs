// ReelForge API Errors
// Copyright (c) 2026 Xing_The_Creator | ReelForge

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Client sent something we cannot use.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Video ID required")]
    MissingId,

    /// Anything that went wrong on our side. The cause is logged, never returned.
    #[error("Failed to generate video")]
    Internal(#[from] anyhow::Error),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MalformedRequest(msg) => {
                warn!("[SERVER] Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            ApiError::MissingId => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Internal(cause) => {
                error!("[SERVER] Error generating video: {:#}", cause);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
