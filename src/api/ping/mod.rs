// Health-check endpoint: payload, handler and route registration

pub mod handler;
pub mod models;
pub mod routes;
