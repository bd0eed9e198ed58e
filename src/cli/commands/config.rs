//! Config Command
//!
//! Show, locate, and initialize configuration.

use crate::cli::ui::Output;
use crate::config::ConfigLoader;
use crate::types::{ForgeError, Result};

/// Show the merged effective configuration.
pub fn show(json: bool) -> Result<()> {
    let config = ConfigLoader::load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        let toml = toml::to_string_pretty(&config)
            .map_err(|e| ForgeError::Config(format!("failed to render config: {}", e)))?;
        println!("{}", toml);
    }
    Ok(())
}

/// Show configuration file paths.
pub fn path() -> Result<()> {
    println!("Configuration paths:");
    println!();

    if let Some(global) = ConfigLoader::global_config_path() {
        let exists = if global.exists() { "✓" } else { "✗" };
        println!("  Global:  {} {}", exists, global.display());
    } else {
        println!("  Global:  (not available)");
    }

    let project = ConfigLoader::project_config_path();
    let exists = if project.exists() { "✓" } else { "✗" };
    println!("  Project: {} {}", exists, project.display());

    Ok(())
}

/// Write the default project configuration.
pub fn init(force: bool) -> Result<()> {
    let path = ConfigLoader::init_project(force)?;
    Output::new().success(&format!("Wrote {}", path.display()));
    Ok(())
}
