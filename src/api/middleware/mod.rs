// Start of file: /src/api/middleware/mod.rs

pub mod cors;

// End of file: /src/api/middleware/mod.rs
