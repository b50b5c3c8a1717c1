// Error handling for handlers and HTTP middleware layers

use axum::{
    BoxError,
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use std::error::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::error;

pub const ENCODE_FAILURE_BODY: &str = "Failed to encode response";
const PLAIN_TEXT: &str = "text/plain; charset=utf-8";

/// Failures a handler can surface to the client
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to encode response body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("{self}");

        match self {
            ApiError::Encode(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(CONTENT_TYPE, PLAIN_TEXT)],
                ENCODE_FAILURE_BODY,
            )
                .into_response(),
        }
    }
}

/// Maps errors raised by tower layers to HTTP responses
pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    // 408 if the request took too long
    if err.is::<Elapsed>() || find_cause::<Elapsed>(&*err).is_some() {
        return StatusCode::REQUEST_TIMEOUT;
    }

    error!("Unhandled layer error: {err}");

    // Otherwise, 500
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Helper function to find specific error type in error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}
