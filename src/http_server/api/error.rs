use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorClass, ErrorCode};

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: ErrorCode,
}

impl From<&Error> for ErrorBody {
    fn from(err: &Error) -> Self {
        Self {
            error: err.to_string(),
            code: err.code(),
        }
    }
}

/// Wraps a library error so handlers can return it with `?`.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(Error::InvalidRequest(rejection.body_text()))
    }
}

/// `Json` extractor whose failures answer with the usual `{error, code}` body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.class() {
            ErrorClass::Input => StatusCode::BAD_REQUEST,
            // The check ran; the negative answer is still an answer.
            ErrorClass::Mismatch => StatusCode::OK,
            ErrorClass::Capacity => StatusCode::SERVICE_UNAVAILABLE,
            ErrorClass::Delivery => StatusCode::BAD_GATEWAY,
            ErrorClass::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = %self.0.code(), "request failed: {}", self.0);
        } else {
            tracing::debug!(code = %self.0.code(), "request rejected: {}", self.0);
        }
        (status, Json(ErrorBody::from(&self.0))).into_response()
    }
}
