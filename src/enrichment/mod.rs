//! Enrichment Oracle Abstraction
//!
//! The oracle is an external best-effort collaborator: it classifies
//! experience, assigns roles, and writes narrative reasoning. The core
//! tolerates its absence, its errors, and its malformed output — every
//! consumer must have a deterministic fallback.
//!
//! ## Modules
//!
//! - `ollama`: local Ollama-backed oracle (the default implementation)
//! - `prompts`: prompt builders for the two oracle operations
//! - `response`: defensive parsing of untrusted model JSON

mod ollama;
pub mod prompts;
pub mod response;

pub use ollama::OllamaOracle;
pub use response::{ProfileInsights, TeamAdvice, extract_json};

use std::sync::Arc;

use async_trait::async_trait;

use crate::constants::network::DEFAULT_TIMEOUT_SECS;
use crate::types::{Profile, Result};

/// Shared oracle handle for async contexts
pub type SharedOracle = Arc<dyn EnrichmentOracle>;

/// External enrichment service contract
///
/// Both operations are single request-response exchanges with a bounded
/// timeout. Errors are ordinary `ForgeError::Oracle` values; implementations
/// must never panic on malformed model output.
#[async_trait]
pub trait EnrichmentOracle: Send + Sync {
    /// Narrative analysis of one profile.
    async fn analyze_profile(&self, profile: &Profile) -> Result<ProfileInsights>;

    /// Reasoning, role assignments, and strengths for a selected team.
    async fn recommend_team(
        &self,
        reference: &Profile,
        candidates: &[&Profile],
        required_skills: &[String],
    ) -> Result<TeamAdvice>;

    /// Implementation name for logging.
    fn name(&self) -> &str;
}

/// Configuration for oracle implementations
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// API base URL
    pub api_base: Option<String>,
    /// Model name
    pub model: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Sampling temperature (0.0 = deterministic)
    pub temperature: f32,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            model: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            temperature: 0.2,
        }
    }
}
