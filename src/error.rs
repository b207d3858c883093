use crate::models::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

pub const RATE_LIMITED_MESSAGE: &str = "Rate limit exceeded. Please try again in a moment.";
pub const QUOTA_EXHAUSTED_MESSAGE: &str =
    "AI credits depleted. Please add more credits to your workspace.";
pub const UPSTREAM_ERROR_MESSAGE: &str = "AI gateway error";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Unsupported model: {0}")]
    UnsupportedModel(String),

    #[error("{}", RATE_LIMITED_MESSAGE)]
    UpstreamRateLimited,

    #[error("{}", QUOTA_EXHAUSTED_MESSAGE)]
    UpstreamQuotaExhausted,

    /// `detail` is for operators only and never reaches the caller.
    #[error("{}", UPSTREAM_ERROR_MESSAGE)]
    UpstreamProtocolError { detail: String },

    #[error("{0} is not configured")]
    ConfigurationError(&'static str),
}

impl ChatError {
    pub fn protocol(detail: impl Into<String>) -> Self {
        ChatError::UpstreamProtocolError {
            detail: detail.into(),
        }
    }

    /// Maps a non-2xx upstream status to an error kind.
    pub fn from_upstream_status(status: StatusCode, body: &str) -> Self {
        match status {
            StatusCode::TOO_MANY_REQUESTS => ChatError::UpstreamRateLimited,
            StatusCode::PAYMENT_REQUIRED => ChatError::UpstreamQuotaExhausted,
            other => ChatError::protocol(format!("status {}: {}", other, body)),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ChatError::UpstreamRateLimited => StatusCode::TOO_MANY_REQUESTS,
            ChatError::UpstreamQuotaExhausted => StatusCode::PAYMENT_REQUIRED,
            ChatError::UnsupportedModel(_)
            | ChatError::UpstreamProtocolError { .. }
            | ChatError::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
