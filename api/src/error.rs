use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

const CORRELATION_ID: HeaderName = HeaderName::from_static("x-correlation-id");

/// Unmatched routes and server-side defects. Client-input failures on the
/// category endpoint answer with plain bodies instead.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::RouteNotFound(_) => "NotFound",
            ApiError::Internal(_) => "InternalServerError",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let correlation_id = Uuid::new_v4().to_string();
        let status = self.status();
        let body = json!({
            "error": self.kind(),
            "message": self.to_string(),
            "correlation_id": correlation_id,
        });

        let mut response = (status, Json(body)).into_response();
        if let Ok(value) = HeaderValue::from_str(&correlation_id) {
            response.headers_mut().insert(CORRELATION_ID, value);
        }
        response
    }
}

/// The request body could not be bound to the target shape.
///
/// Rendered as HTTP 400 with the raw, untranslated message as a JSON string.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("{0}")]
    Body(String),

    #[error("invalid type: {found}, expected a JSON object")]
    NotAnObject { found: &'static str },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for BindError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Request body rejected");
        (StatusCode::BAD_REQUEST, Json(self.to_string())).into_response()
    }
}
