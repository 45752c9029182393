use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::db::StoreError;
use crate::validation::ValidationError;

/// Request-boundary error taxonomy. Every variant maps to a status code and
/// a `{"error": ...}` JSON body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("malformed JSON body")]
    MalformedRequest(#[from] JsonRejection),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("invalid national id")]
    InvalidNationalId,
    #[error("a client with this national id already exists")]
    Conflict,
    #[error("client not found")]
    NotFound,
    #[error("internal server error")]
    Internal(#[source] sqlx::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict => ApiError::Conflict,
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Database(e) => ApiError::Internal(e),
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest(_)
            | ApiError::Validation(_)
            | ApiError::InvalidNationalId => StatusCode::BAD_REQUEST,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the full chain server-side; the client only sees the generic
        // message for internal faults.
        if let ApiError::Internal(source) = &self {
            error!("store failure: {source}");
        }

        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
