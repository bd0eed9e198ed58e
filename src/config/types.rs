//! Configuration Types
//!
//! All configuration structures with sensible defaults. Scoring weights are
//! deliberately absent: they are fixed design constants, not configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::network::DEFAULT_TIMEOUT_SECS;
use crate::constants::team::DEFAULT_TEAM_SIZE;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Enrichment oracle settings
    pub llm: LlmConfig,

    /// Storage settings
    pub storage: StorageConfig,

    /// Team formation settings
    pub team: TeamConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            llm: LlmConfig::default(),
            storage: StorageConfig::default(),
            team: TeamConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> crate::types::Result<()> {
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(crate::types::ForgeError::Config(format!(
                "LLM temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }

        if self.llm.timeout_secs == 0 {
            return Err(crate::types::ForgeError::Config(
                "LLM timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.team.default_size < 2 {
            return Err(crate::types::ForgeError::Config(format!(
                "team default_size must be at least 2, got {}",
                self.team.default_size
            )));
        }

        Ok(())
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider type; "ollama" is the only built-in
    pub provider: String,

    /// API base URL (defaults to the provider's local endpoint)
    pub api_base: Option<String>,

    /// Model name (provider-specific)
    pub model: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Sampling temperature (0.0 = deterministic)
    pub temperature: f32,

    /// Skip enrichment entirely and use deterministic fallbacks
    pub disabled: bool,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "ollama".to_string(),
            api_base: None,
            model: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            temperature: 0.2,
            disabled: false,
        }
    }
}

// =============================================================================
// Storage Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file path
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".teamforge/teamforge.db"),
        }
    }
}

// =============================================================================
// Team Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamConfig {
    /// Default team size including the reference member
    pub default_size: usize,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_TEAM_SIZE,
        }
    }
}
