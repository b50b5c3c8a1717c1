// Start of file: /src/api/fallback.rs

use axum::{
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
};

pub const NOT_FOUND_BODY: &str = "404 page not found";

// Any path other than /ping
pub async fn fallback_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        NOT_FOUND_BODY,
    )
}

// End of file: /src/api/fallback.rs
