// Start of file: /src/utils/request_logger.rs

use std::time::{Duration, Instant};
use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use tracing::{info, warn, Instrument};

/*
    * Wraps each request in a span and logs its outcome once the
    * response is ready: status code and elapsed milliseconds.
*/
pub async fn log_request(req: Request, next: Next) -> Response {
    let start_time: Instant = Instant::now();

    let span = tracing::info_span!(
        "request",
        method = %req.method(),
        path = %req.uri().path(),
    );

    async move {
        let response: Response = next.run(req).await;
        let duration_ms: u64 = saturating_millis(start_time.elapsed());
        let status: u16 = response.status().as_u16();

        if response.status().is_server_error() {
            warn!(status, duration_ms, "Request failed");
        } else {
            info!(status, duration_ms, "Request completed");
        }

        response
    }
    .instrument(span)
    .await
}

// Durations past u64::MAX milliseconds are clamped instead of wrapping
fn saturating_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}


// End of file: /src/utils/request_logger.rs
