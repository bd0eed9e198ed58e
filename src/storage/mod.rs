//! Persistence Layer
//!
//! SQLite-backed storage behind a simple load/save port. The matching core
//! is unaware of this module; only the CLI commands touch it.

pub mod store;

pub use store::{PoolConfig, ProfileStore, SharedStore};
