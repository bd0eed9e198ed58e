//! Ollama Enrichment Oracle
//!
//! Oracle implementation backed by a locally-running Ollama instance. Each
//! operation is one prompt → one JSON completion, with a bounded timeout
//! and `format: "json"` so the model is steered toward parseable output.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::response::{ProfileInsights, TeamAdvice, extract_json};
use super::{EnrichmentOracle, OracleConfig, prompts};
use crate::types::{ForgeError, Profile, Result};

const DEFAULT_API_BASE: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "phi3:mini";

/// Ollama-backed enrichment oracle
pub struct OllamaOracle {
    api_base: String,
    model: String,
    temperature: f32,
    client: reqwest::Client,
}

impl OllamaOracle {
    pub fn new(config: OracleConfig) -> Result<Self> {
        let api_base = check_endpoint(
            config
                .api_base
                .as_deref()
                .unwrap_or(DEFAULT_API_BASE),
        )?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ForgeError::Oracle(format!("HTTP client construction failed: {}", e)))?;

        Ok(Self {
            api_base,
            model: config.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: config.temperature,
            client,
        })
    }

    /// Run one prompt through `/api/generate` and parse the completion as a
    /// JSON object.
    async fn complete(&self, prompt: String) -> Result<serde_json::Value> {
        let url = format!("{}/api/generate", self.api_base);
        let request = GenerateRequest {
            model: &self.model,
            prompt: &prompt,
            stream: false,
            format: "json",
            options: GenerateOptions {
                temperature: self.temperature,
            },
        };

        debug!("Posting generate request to {}", url);
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.classify_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ForgeError::Oracle(format!(
                "Ollama returned {}: {}",
                status, body
            )));
        }

        let completion: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ForgeError::Oracle(format!("unreadable Ollama response: {}", e)))?;

        extract_json(&completion.response)
    }

    fn classify_send_error(&self, e: reqwest::Error) -> ForgeError {
        if e.is_connect() {
            ForgeError::Oracle(format!(
                "cannot reach Ollama at {} (start it with: ollama serve)",
                self.api_base
            ))
        } else if e.is_timeout() {
            ForgeError::Oracle(format!("Ollama request timed out: {}", e))
        } else {
            ForgeError::Oracle(format!("Ollama request failed: {}", e))
        }
    }

    /// Probe `/api/tags` and report whether the configured model is pulled.
    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/api/tags", self.api_base);
        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("Ollama unreachable: {}", e);
                return Ok(false);
            }
        };
        if !response.status().is_success() {
            warn!("Ollama tag listing failed: {}", response.status());
            return Ok(false);
        }

        let tags: TagsResponse = match response.json().await {
            Ok(t) => t,
            // Reachable but unparseable tag list still counts as alive
            Err(_) => return Ok(true),
        };

        let base_name = self.model.trim_end_matches(":latest");
        let pulled = tags
            .models
            .iter()
            .any(|m| m.name == self.model || m.name.starts_with(base_name));
        if pulled {
            info!("Ollama ready with model {}", self.model);
        } else {
            warn!(
                "model '{}' not pulled (run: ollama pull {})",
                self.model, self.model
            );
        }
        Ok(pulled)
    }
}

/// Reject endpoints that are not plain http(s) URLs; warn when the host is
/// not local, since profile text is sent in prompts.
fn check_endpoint(endpoint: &str) -> Result<String> {
    let url = url::Url::parse(endpoint)
        .map_err(|e| ForgeError::Config(format!("bad Ollama endpoint '{}': {}", endpoint, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ForgeError::Config(format!(
            "Ollama endpoint scheme must be http or https, got '{}'",
            url.scheme()
        )));
    }

    if let Some(host) = url.host_str()
        && !matches!(host, "localhost" | "127.0.0.1" | "::1")
    {
        warn!("Ollama endpoint host '{}' is not local", host);
    }

    Ok(url.to_string().trim_end_matches('/').to_string())
}

#[async_trait]
impl EnrichmentOracle for OllamaOracle {
    async fn analyze_profile(&self, profile: &Profile) -> Result<ProfileInsights> {
        info!(
            "Analyzing profile {} with model {}",
            profile.handle, self.model
        );
        let value = self.complete(prompts::profile_analysis(profile)).await?;
        ProfileInsights::from_value(&value)
    }

    async fn recommend_team(
        &self,
        reference: &Profile,
        candidates: &[&Profile],
        required_skills: &[String],
    ) -> Result<TeamAdvice> {
        info!(
            "Requesting team opinion for {} over {} candidates",
            reference.handle,
            candidates.len()
        );
        let prompt = prompts::team_recommendation(reference, candidates, required_skills);
        let value = self.complete(prompt).await?;
        TeamAdvice::from_value(&value)
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

// Wire types for the Ollama HTTP API

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    format: &'a str,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    models: Vec<TaggedModel>,
}

#[derive(Debug, Deserialize)]
struct TaggedModel {
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let oracle = OllamaOracle::new(OracleConfig::default()).expect("default config is valid");
        assert_eq!(oracle.api_base, DEFAULT_API_BASE);
        assert_eq!(oracle.model, DEFAULT_MODEL);
        assert_eq!(oracle.name(), "ollama");
    }

    #[test]
    fn test_endpoint_validation() {
        assert!(check_endpoint("http://localhost:11434").is_ok());
        assert!(check_endpoint("ftp://localhost:11434").is_err());
        assert!(check_endpoint("not a url").is_err());

        // Trailing slash removed
        let base = check_endpoint("http://localhost:11434/").unwrap();
        assert_eq!(base, "http://localhost:11434");
    }
}
