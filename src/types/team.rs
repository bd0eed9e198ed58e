//! Matching Result Types
//!
//! Transient value objects produced by the scoring, gap-analysis, and
//! team-formation components. Recomputed on every request; only the
//! recommendation record is persisted, by the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::profile::Profile;
use super::ProfileId;

/// Pairwise compatibility for one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub candidate_id: ProfileId,
    /// Heuristic team-fit score in [0,10]
    pub score: f64,
}

/// One selected team member with merged deterministic + enrichment data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub profile: Profile,
    /// Compatibility against the reference profile, in [0,10]
    pub score: f64,
    /// Oracle-assigned role, or the default placeholder
    pub role: String,
    pub strengths: Vec<String>,
}

/// Final team structure emitted by the optimizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamResult {
    pub members: Vec<TeamMember>,
    /// Oracle reasoning, or the deterministic fallback sentence
    pub reasoning: String,
    /// Arithmetic mean of member scores, rounded to 2 decimals
    pub total_score: f64,
}

/// Skill-gap buckets for one profile against a required-skill list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapReport {
    pub required_skills: Vec<String>,
    pub covered: Vec<String>,
    pub partial: Vec<String>,
    pub missing: Vec<String>,
    /// `(covered + 0.5 * partial) / required * 100`, in [0,100]
    pub coverage_score: f64,
}

/// Persisted team-recommendation record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub reference_id: ProfileId,
    pub required_skills: Vec<String>,
    pub selected_ids: Vec<ProfileId>,
    pub reasoning: String,
    pub total_score: f64,
    pub created_at: DateTime<Utc>,
}

impl Recommendation {
    /// Build the persistent record from a team result.
    pub fn from_team(
        reference_id: ProfileId,
        required_skills: Vec<String>,
        team: &TeamResult,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            reference_id,
            required_skills,
            selected_ids: team.members.iter().map(|m| m.profile.id.clone()).collect(),
            reasoning: team.reasoning.clone(),
            total_score: team.total_score,
            created_at: Utc::now(),
        }
    }
}
