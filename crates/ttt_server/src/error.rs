//! HTTP error mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::warn;
use ttt_core::{SessionError, SessionErrorKind};

/// Error body returned by every failing route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Human-readable reason.
    pub error: String,
}

/// A failed request: status code plus client-facing message.
#[derive(Debug, Clone, Display, Error)]
#[display("{}: {}", status, message)]
pub struct ApiError {
    /// Response status.
    pub status: StatusCode,
    /// Message placed in the error body.
    pub message: String,
}

impl ApiError {
    /// 400 with `message`.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// 500 with `message`.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        let (status, message) = match err.kind() {
            SessionErrorKind::NotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Game not found: {}", id))
            }
            SessionErrorKind::InvalidInput(msg) | SessionErrorKind::InvalidOperation(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            SessionErrorKind::Game(kind) => (StatusCode::BAD_REQUEST, kind.to_string()),
            SessionErrorKind::Store(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };
        warn!(%status, error = %err, "Request failed");
        Self { status, message }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "Rejected request body");
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}
