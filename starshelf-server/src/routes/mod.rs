//! Route handlers for starshelf-server
//!
//! Organized by resource type:
//! - repos: CRUD, filtering, and substring search over the collection
//! - stats: aggregate counts
//! - health: liveness message and health probe

pub mod health;
pub mod repos;
pub mod stats;

pub use health::*;
pub use repos::*;
pub use stats::*;
