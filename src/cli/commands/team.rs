//! Team Command
//!
//! Form a team around a reference profile: rank the stored candidate pool,
//! select the top slice, merge the best-effort oracle opinion, and persist
//! the recommendation.

use tracing::warn;

use crate::cli::ui::Output;
use crate::cli::util::{CommandContext, parse_skill_list};
use crate::matching::TeamOptimizer;
use crate::types::{Handle, Recommendation, Result};

pub struct TeamOptions<'a> {
    pub handle: &'a str,
    pub skills: &'a str,
    pub size: Option<usize>,
    pub no_ai: bool,
    pub json: bool,
}

pub async fn run(ctx: &CommandContext, opts: TeamOptions<'_>) -> Result<()> {
    let reference = ctx.store.require_profile(&Handle::new(opts.handle))?;
    let candidates = ctx.store.candidate_pool(&reference.id)?;
    let required = parse_skill_list(opts.skills);
    let size = opts.size.unwrap_or(ctx.config.team.default_size);

    let optimizer = if opts.no_ai {
        TeamOptimizer::without_oracle()
    } else {
        match ctx.oracle()? {
            Some(oracle) => TeamOptimizer::new(oracle),
            None => {
                warn!("Enrichment disabled in configuration; using deterministic fallbacks");
                TeamOptimizer::without_oracle()
            }
        }
    };

    let team = optimizer
        .find_optimal_team(&reference, &candidates, &required, size)
        .await?;

    let rec = Recommendation::from_team(reference.id.clone(), required, &team);
    ctx.store.save_recommendation(&rec)?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&team)?);
        return Ok(());
    }

    let out = Output::new();
    out.section(&format!("Team for {}", reference.handle));
    out.field("Total score", format!("{:.2} / 10", team.total_score));
    out.field("Reasoning", &team.reasoning);
    for member in &team.members {
        println!();
        out.field("Member", &member.profile.handle);
        out.field("Role", &member.role);
        out.field("Score", format!("{:.2}", member.score));
        out.field("Strengths", member.strengths.join(", "));
    }
    println!();
    out.success(&format!("Saved recommendation {}", rec.id));

    Ok(())
}
