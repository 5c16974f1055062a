use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::processor::ProcessorError;

/// Infrastructure failures. Flow-level results (bad credentials, MFA
/// prompts, profile selection) are not errors — see `outcome::KeyGenOutcome`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("processor error: {0}")]
    Processor(#[from] ProcessorError),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            AppError::Processor(e) => {
                tracing::error!("Processor request failed: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Payment processor request failed.",
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
            }
        };

        let body = Json(json!({ "success": 0, "message": msg }));

        (status, body).into_response()
    }
}
