//! HTTP server implementation

pub mod builder;
pub mod routes;
pub mod server;
pub mod state;
