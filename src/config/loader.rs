//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/teamforge/config.toml)
//! 3. Project config (.teamforge/config.toml)
//! 4. Environment variables (TEAMFORGE_* prefix)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::Config;
use crate::types::{ForgeError, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with the full resolution chain:
    /// defaults → global → project → env vars
    pub fn load() -> Result<Config> {
        let mut sources = Figment::from(Serialized::defaults(Config::default()));

        if let Some(global) = Self::global_config_path()
            && global.exists()
        {
            debug!("Merging global config {}", global.display());
            sources = sources.merge(Toml::file(&global));
        }

        let project = Self::project_config_path();
        if project.exists() {
            debug!("Merging project config {}", project.display());
            sources = sources.merge(Toml::file(&project));
        }

        // e.g. TEAMFORGE_LLM_MODEL -> llm.model
        sources = sources.merge(Env::prefixed("TEAMFORGE_").split("_").lowercase(true));

        let config: Config = sources
            .extract()
            .map_err(|e| ForgeError::Config(format!("configuration error: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file only (plus defaults).
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let config: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| ForgeError::Config(format!("configuration error: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Global config directory (~/.config/teamforge/)
    pub fn global_dir() -> Option<PathBuf> {
        let config_root = env::var("XDG_CONFIG_HOME").map(PathBuf::from).ok();
        config_root
            .or_else(|| env::var("HOME").ok().map(|h| PathBuf::from(h).join(".config")))
            .map(|root| root.join("teamforge"))
    }

    /// Global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join("config.toml"))
    }

    /// Project config file path
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(".teamforge/config.toml")
    }

    /// Project data directory
    pub fn project_dir() -> PathBuf {
        PathBuf::from(".teamforge")
    }

    /// Write the default configuration to the project config file.
    pub fn init_project(force: bool) -> Result<PathBuf> {
        let path = Self::project_config_path();
        if path.exists() && !force {
            return Err(ForgeError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(&Config::default())
            .map_err(|e| ForgeError::Config(format!("failed to serialize defaults: {}", e)))?;
        std::fs::write(&path, toml)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [llm]
            model = "llama3:latest"
            timeout_secs = 30
            "#,
        )
        .unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.llm.model.as_deref(), Some("llama3:latest"));
        assert_eq!(config.llm.timeout_secs, 30);
        // Untouched sections keep their defaults
        assert_eq!(config.llm.provider, "ollama");
        assert_eq!(config.team.default_size, 4);
    }

    #[test]
    fn test_invalid_file_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[llm]\ntimeout_secs = 0\n").unwrap();

        assert!(ConfigLoader::load_from_file(&path).is_err());
    }
}
