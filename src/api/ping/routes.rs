// Start of file: /src/api/ping/routes.rs

/*
    * Registers `/ping` for every HTTP method.
    * With CORS enabled the route is wrapped in `cors_middleware`,
    * which answers OPTIONS preflights itself.
*/

use axum::{
    Router,
    middleware::from_fn,
    routing::{any, MethodRouter},
};

use crate::api::middleware::cors::cors_middleware;
use crate::api::ping::handler::ping_handler;

pub const PING_PATH: &str = "/ping";

pub fn ping_routes(cors_enabled: bool) -> Router {
    let ping: MethodRouter = if cors_enabled {
        any(ping_handler).layer(from_fn(cors_middleware))
    } else {
        any(ping_handler)
    };

    Router::new().route(PING_PATH, ping)
}

// End of file: /src/api/ping/routes.rs
