//! Profiles Command
//!
//! List stored profiles with their top technologies.

use crate::cli::ui::Output;
use crate::cli::util::CommandContext;
use crate::types::Result;

pub fn run(ctx: &CommandContext, json: bool) -> Result<()> {
    let profiles = ctx.store.list_profiles()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&profiles)?);
        return Ok(());
    }

    let out = Output::new();
    if profiles.is_empty() {
        out.info("No profiles stored yet. Run 'teamforge ingest' first.");
        return Ok(());
    }

    out.section(&format!("Profiles ({})", profiles.len()));
    for profile in &profiles {
        let top: Vec<&str> = profile
            .tech_stack
            .iter()
            .take(3)
            .map(|t| t.name.as_str())
            .collect();
        let enriched = if profile.ai_analysis.is_some() {
            " [enriched]"
        } else {
            ""
        };
        out.field(
            profile.handle.as_str(),
            format!("{}{}", top.join(", "), enriched),
        );
    }

    Ok(())
}
