// Start of file: /src/utils/mod.rs

/*
    * Re-exports for cross-cutting utilities: error mapping and
    * request logging.
*/

pub mod error_handler;
pub mod request_logger;

// End of file: /src/utils/mod.rs
