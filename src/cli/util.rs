//! CLI Common Utilities
//!
//! Shared initialization and context management for CLI commands.

use std::sync::Arc;

use crate::config::{Config, ConfigLoader};
use crate::enrichment::{OllamaOracle, OracleConfig, SharedOracle};
use crate::storage::{ProfileStore, SharedStore};
use crate::types::Result;

/// Command execution context
///
/// Provides unified access to the resources CLI commands need: the merged
/// configuration and the profile store.
pub struct CommandContext {
    pub config: Config,
    pub store: SharedStore,
}

impl CommandContext {
    /// Load config and open the store at its configured path.
    pub fn load() -> Result<Self> {
        let config = ConfigLoader::load()?;
        let store = ProfileStore::open(&config.storage.path)?;
        Ok(Self {
            config,
            store: Arc::new(store),
        })
    }

    /// Build the enrichment oracle from configuration.
    ///
    /// Returns `None` when enrichment is disabled; callers fall back to the
    /// deterministic path.
    pub fn oracle(&self) -> Result<Option<SharedOracle>> {
        if self.config.llm.disabled {
            return Ok(None);
        }

        match self.config.llm.provider.as_str() {
            "ollama" => {
                let oracle = OllamaOracle::new(OracleConfig {
                    api_base: self.config.llm.api_base.clone(),
                    model: self.config.llm.model.clone(),
                    timeout_secs: self.config.llm.timeout_secs,
                    temperature: self.config.llm.temperature,
                })?;
                Ok(Some(Arc::new(oracle)))
            }
            other => Err(crate::types::ForgeError::Config(format!(
                "unknown LLM provider '{}' (supported: ollama)",
                other
            ))),
        }
    }
}

/// Split a comma-separated skill list into trimmed, non-empty entries.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
