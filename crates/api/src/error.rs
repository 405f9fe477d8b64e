//! HTTP mapping of inventory failures
//!
//! Bridges the core's typed failures onto status codes and a JSON error
//! body. The core knows nothing about HTTP; all mapping decisions live
//! here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use boxoffice_core::Error;
use serde::Serialize;

/// Error payload returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable failure description.
    pub error: String,
}

/// Transport-side error carrying the status it should answer with.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// A 500 for failures outside the inventory taxonomy (e.g. a worker
    /// that could not complete).
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// The status this error answers with.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match &err {
            Error::EventNotFound(_) => StatusCode::NOT_FOUND,
            Error::InsufficientTickets { .. } => StatusCode::CONFLICT,
        };
        Self {
            status,
            message: err.to_string(),
        }
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
