//! Quiz HTTP API Module
//! Routes, handlers and wire types for the browser client

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use handlers::AppState;
pub use routes::create_router;
pub use types::*;
