//! Ingest Command
//!
//! Consume a pre-fetched profile dump, run technology detection over its
//! text and file listings, and persist the resulting profile. Re-ingesting
//! a handle replaces the detected tech stack.

use std::path::Path;

use tracing::info;

use crate::cli::ui::Output;
use crate::cli::util::CommandContext;
use crate::detector::TechDetector;
use crate::types::{ForgeError, Handle, Profile, ProfileDump, Result};

pub fn run(ctx: &CommandContext, file: &Path, seeking: Option<&str>) -> Result<()> {
    let out = Output::new();

    let raw = std::fs::read_to_string(file)?;
    let dump: ProfileDump = serde_json::from_str(&raw)?;

    if dump.user.login.is_empty() {
        return Err(ForgeError::InvalidInput(
            "profile dump has no user login".into(),
        ));
    }

    let handle = Handle::new(dump.user.login.clone());

    // Keep the existing id when re-ingesting a known handle
    let mut profile = ctx
        .store
        .load_profile(&handle)?
        .unwrap_or_else(|| Profile::new(handle.clone()));

    profile.display_name = dump.user.name.clone();
    profile.bio = dump.user.bio.clone();
    profile.avatar_url = dump.user.avatar_url.clone();
    profile.public_repos = dump.user.public_repos;
    profile.followers = dump.user.followers;
    profile.following = dump.user.following;
    profile.languages = dump.language_weights();

    if let Some(seeking) = seeking {
        profile.seeking = crate::cli::util::parse_skill_list(seeking);
    } else if !dump.seeking.is_empty() {
        profile.seeking = dump.seeking.clone();
    }

    // Detection replaces the stored tech stack wholesale
    let detector = TechDetector::new()?;
    let detected = detector.detect(
        &dump.readme_text(),
        &dump.descriptions(),
        &dump.file_listings,
    );
    info!("Detected {} technologies for {}", detected.len(), handle);
    profile.tech_stack = detected.into_iter().map(|t| t.into_entry()).collect();

    ctx.store.save_profile(&profile)?;

    out.success(&format!(
        "Ingested {} ({} repositories, {} technologies)",
        handle,
        dump.repos.len(),
        profile.tech_stack.len()
    ));
    for tech in &profile.tech_stack {
        out.field(&tech.name, format!("{} ({:.0}%)", tech.level, tech.confidence));
    }

    Ok(())
}
