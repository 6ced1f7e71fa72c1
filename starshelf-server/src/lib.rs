//! starshelf-server: HTTP API for a personal collection of bookmarked
//! repositories
//!
//! In-memory storage plus axum routes for CRUD, filtering, free-text
//! search, and aggregate stats.

pub mod error;
pub mod models;
pub mod routes;
pub mod server;
pub mod store;

pub use error::{ServerError, ServerResult};
pub use server::{run_server, ServerArgs};
pub use store::Store;
