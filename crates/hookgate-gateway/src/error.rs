use axum::extract::rejection::{BytesRejection, FailedToBufferBody};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Failures that stop an intercepted request before any hook runs
#[derive(Debug, Error)]
pub enum InterceptError {
    #[error("Request body exceeds the {limit} byte limit")]
    BodyTooLarge { limit: usize },

    #[error("Error reading request: {0}")]
    BodyTruncated(String),

    #[error("Error reading request: {0}")]
    BodyRead(String),
}

impl InterceptError {
    pub fn from_rejection(rejection: BytesRejection, limit: usize) -> Self {
        match rejection {
            BytesRejection::FailedToBufferBody(FailedToBufferBody::LengthLimitError(_)) => {
                Self::BodyTooLarge { limit }
            }
            BytesRejection::FailedToBufferBody(FailedToBufferBody::UnknownBodyError(e)) => {
                Self::BodyTruncated(e.body_text())
            }
            other => Self::BodyRead(other.body_text()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::BodyTruncated(_) => StatusCode::BAD_REQUEST,
            Self::BodyRead(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for InterceptError {
    fn into_response(self) -> Response {
        let status = self.status();
        error!(status = status.as_u16(), error = %self, "Failed to read intercepted request");
        (status, self.to_string()).into_response()
    }
}
