use crate::errors::{DownloadError, ExtractionError};

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{event, Level};

const DOWNLOAD_FAILED: &str = "Download failed";

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Error returned by the handlers, rendered as `{"error": message}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    #[cfg(test)]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[cfg(test)]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ExtractionError> for ApiError {
    fn from(err: ExtractionError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<DownloadError> for ApiError {
    fn from(err: DownloadError) -> Self {
        match err {
            DownloadError::FileNotFound { .. } => Self::internal(DOWNLOAD_FAILED),
            err => Self::bad_request(err.to_string()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(err: QueryRejection) -> Self {
        Self::bad_request(err.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            event!(Level::ERROR, status = %self.status, error = %self.message, "Request failed");
        } else {
            event!(Level::WARN, status = %self.status, error = %self.message, "Request rejected");
        }

        (self.status, Json(ErrorBody { error: &self.message })).into_response()
    }
}
