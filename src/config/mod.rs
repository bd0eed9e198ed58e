//! Configuration
//!
//! Layered configuration: built-in defaults, global and project TOML files,
//! and environment overrides.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{Config, LlmConfig, StorageConfig, TeamConfig};
