// Ping payload returned by the health-check endpoint

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const PONG: &str = "pong";

/// Fixed-shape health-check body. Built per request and dropped once serialized.
#[derive(Debug, Clone, Serialize)]
pub struct PingResponse {
    pub message: String,
    // chrono serializes DateTime<Utc> as RFC3339
    pub server_time: DateTime<Utc>,
}

impl PingResponse {
    /// Captures the current server time
    pub fn now() -> Self {
        Self {
            message: PONG.to_string(),
            server_time: Utc::now(),
        }
    }
}
