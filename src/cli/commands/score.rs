//! Score Command
//!
//! Pairwise compatibility between two stored profiles, with the individual
//! terms broken out.

use crate::cli::ui::Output;
use crate::cli::util::CommandContext;
use crate::matching::compatibility;
use crate::types::{Handle, Result};

pub fn run(ctx: &CommandContext, reference: &str, candidate: &str, json: bool) -> Result<()> {
    let reference = ctx.store.require_profile(&Handle::new(reference))?;
    let candidate = ctx.store.require_profile(&Handle::new(candidate))?;

    let overlap = compatibility::skill_overlap(&reference, &candidate);
    let balance = compatibility::experience_balance(&reference, &candidate);
    let interest = compatibility::shared_interest(&reference, &candidate);
    let score = compatibility::score(&reference, &candidate);

    if json {
        let output = serde_json::json!({
            "reference": reference.handle,
            "candidate": candidate.handle,
            "skill_overlap": overlap,
            "experience_balance": balance,
            "shared_interest": interest,
            "score": score,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let out = Output::new();
    out.section(&format!("{} × {}", reference.handle, candidate.handle));
    out.field("Skill overlap", format!("{:.3}", overlap));
    out.field("Experience balance", format!("{:.3}", balance));
    out.field("Shared interest", format!("{:.3}", interest));
    out.field("Compatibility", format!("{:.2} / 10", score));

    Ok(())
}
