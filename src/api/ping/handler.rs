// Start of file: /src/api/ping/handler.rs

// Handler for the /ping health-check endpoint

use axum::{
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::api::ping::models::PingResponse;
use crate::utils::error_handler::ApiError;

const APPLICATION_JSON: &str = "application/json";

/// Answers any method with `{"message":"pong","server_time":...}`
#[instrument]
pub async fn ping_handler() -> Result<Response, ApiError> {
    let response: PingResponse = PingResponse::now();
    debug!(server_time = %response.server_time, "Answering ping");

    encode_json(&response)
}

/// Serializes `value` into a 200 JSON response; a serializer error becomes [`ApiError::Encode`]
pub fn encode_json<T: Serialize>(value: &T) -> Result<Response, ApiError> {
    let body: Vec<u8> = serde_json::to_vec(value)?;

    Ok((StatusCode::OK, [(CONTENT_TYPE, APPLICATION_JSON)], body).into_response())
}


// End of file: /src/api/ping/handler.rs
