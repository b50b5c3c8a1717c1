// Start of file: /src/api/mod.rs

/*
    * HTTP surface of the service. Each feature folder owns its
    * handler, payload models and routes.
*/

pub mod fallback;
pub mod middleware;
pub mod ping;

// End of file: /src/api/mod.rs
