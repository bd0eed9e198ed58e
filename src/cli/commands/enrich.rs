//! Enrich Command
//!
//! Request a narrative profile analysis from the enrichment oracle and
//! persist it. Unlike team formation, enrichment *is* the operation here,
//! so oracle failures surface as errors.

use crate::cli::ui::Output;
use crate::cli::util::CommandContext;
use crate::types::{ForgeError, Handle, Result};

pub async fn run(ctx: &CommandContext, handle: &str) -> Result<()> {
    let out = Output::new();

    let handle = Handle::new(handle);
    let mut profile = ctx.store.require_profile(&handle)?;

    let oracle = ctx.oracle()?.ok_or_else(|| {
        ForgeError::Config("enrichment is disabled in configuration (llm.disabled)".into())
    })?;

    let insights = oracle.analyze_profile(&profile).await?;
    let analysis = insights.into_analysis();
    profile.ai_analysis = Some(analysis.clone());
    ctx.store.save_profile(&profile)?;

    out.success(&format!("Enriched profile for {}", handle));
    out.field("Experience", &analysis.experience_level);
    if !analysis.specialization_areas.is_empty() {
        out.field("Specializations", analysis.specialization_areas.join(", "));
    }
    if !analysis.collaboration_strengths.is_empty() {
        out.field("Strengths", analysis.collaboration_strengths.join(", "));
    }
    if !analysis.learning_interests.is_empty() {
        out.field("Learning", analysis.learning_interests.join(", "));
    }

    Ok(())
}
