//! Gaps Command
//!
//! Skill-gap report for one profile against a required-skill list.

use crate::cli::ui::Output;
use crate::cli::util::{CommandContext, parse_skill_list};
use crate::matching::gaps;
use crate::types::{Handle, Result};

pub fn run(ctx: &CommandContext, handle: &str, skills: &str, json: bool) -> Result<()> {
    let profile = ctx.store.require_profile(&Handle::new(handle))?;
    let required = parse_skill_list(skills);

    let report = gaps::analyze(&profile, &required)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let out = Output::new();
    out.section(&format!("Skill gaps for {}", profile.handle));
    out.field("Coverage", format!("{:.2}%", report.coverage_score));
    if !report.covered.is_empty() {
        out.field("Covered", report.covered.join(", "));
    }
    if !report.partial.is_empty() {
        out.field("Partial", report.partial.join(", "));
    }
    if !report.missing.is_empty() {
        out.field("Missing", report.missing.join(", "));
    }

    Ok(())
}
