//! Team Optimization
//!
//! Orchestrates team formation: scores every candidate against the
//! reference profile, ranks them, selects the top slice, and merges the
//! deterministic result with a best-effort oracle opinion. Oracle failure
//! degrades the narrative fields only; the ranking itself always succeeds
//! for a non-empty pool.

use tracing::{debug, warn};

use super::compatibility;
use crate::constants::team::{DEFAULT_ROLE, DEFAULT_STRENGTHS, FALLBACK_REASONING};
use crate::enrichment::{SharedOracle, TeamAdvice};
use crate::types::{ForgeError, Profile, Result, TeamMember, TeamResult, round2};

/// Team-formation orchestrator with an optional enrichment oracle
pub struct TeamOptimizer {
    oracle: Option<SharedOracle>,
}

impl TeamOptimizer {
    /// Optimizer that asks the oracle for narrative enrichment.
    pub fn new(oracle: SharedOracle) -> Self {
        Self {
            oracle: Some(oracle),
        }
    }

    /// Purely deterministic optimizer; all narrative fields use fallbacks.
    pub fn without_oracle() -> Self {
        Self { oracle: None }
    }

    /// Assemble the best team of `team_size` (including the reference
    /// member) from the candidate pool.
    ///
    /// Selects `max(1, team_size - 1)` candidates by descending
    /// compatibility, stable on ties. A pool smaller than requested
    /// degrades gracefully; an empty pool or `team_size < 2` is an
    /// input-contract violation.
    pub async fn find_optimal_team(
        &self,
        reference: &Profile,
        candidates: &[Profile],
        required_skills: &[String],
        team_size: usize,
    ) -> Result<TeamResult> {
        if candidates.is_empty() {
            return Err(ForgeError::InvalidInput(
                "candidate pool must not be empty".into(),
            ));
        }
        if team_size < 2 {
            return Err(ForgeError::InvalidInput(format!(
                "team size must be at least 2, got {}",
                team_size
            )));
        }

        // Score all candidates independently; input order breaks ties.
        let mut scored: Vec<(&Profile, f64)> = candidates
            .iter()
            .map(|candidate| (candidate, compatibility::score(reference, candidate)))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let take = (team_size - 1).max(1).min(scored.len());
        let selected = &scored[..take];
        debug!(
            "Selected {} of {} candidates for {}",
            take,
            candidates.len(),
            reference.handle
        );

        // Best-effort enrichment; any failure falls back to defaults.
        let advice = match &self.oracle {
            Some(oracle) => {
                let selected_profiles: Vec<&Profile> =
                    selected.iter().map(|(p, _)| *p).collect();
                match oracle
                    .recommend_team(reference, &selected_profiles, required_skills)
                    .await
                {
                    Ok(advice) => Some(advice),
                    Err(e) => {
                        warn!("Team recommendation enrichment failed: {}", e);
                        None
                    }
                }
            }
            None => None,
        };

        Ok(Self::merge(selected, advice))
    }

    /// Merge the deterministic ranking with the (possibly absent) oracle
    /// opinion into the final team structure.
    fn merge(selected: &[(&Profile, f64)], advice: Option<TeamAdvice>) -> TeamResult {
        let reasoning = advice
            .as_ref()
            .and_then(|a| a.reasoning.clone())
            .unwrap_or_else(|| FALLBACK_REASONING.to_string());

        let default_strengths: Vec<String> =
            DEFAULT_STRENGTHS.iter().map(|s| s.to_string()).collect();
        let strengths = advice
            .as_ref()
            .filter(|a| !a.team_strengths.is_empty())
            .map(|a| a.team_strengths.clone())
            .unwrap_or(default_strengths);

        let mut total = 0.0;
        let members: Vec<TeamMember> = selected
            .iter()
            .map(|(profile, score)| {
                total += score;
                TeamMember {
                    profile: (*profile).clone(),
                    score: *score,
                    role: Self::assigned_role(profile, advice.as_ref()),
                    strengths: strengths.clone(),
                }
            })
            .collect();

        let total_score = round2(total / members.len() as f64);

        TeamResult {
            members,
            reasoning,
            total_score,
        }
    }

    /// Best-effort role lookup: the oracle maps role names to member
    /// handles or display names; exact string equality only.
    fn assigned_role(profile: &Profile, advice: Option<&TeamAdvice>) -> String {
        if let Some(advice) = advice {
            for (role, assignee) in &advice.role_assignments {
                let matches_handle = assignee == profile.handle.as_str();
                let matches_name = profile
                    .display_name
                    .as_deref()
                    .is_some_and(|name| assignee == name);
                if matches_handle || matches_name {
                    return role.clone();
                }
            }
        }
        DEFAULT_ROLE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::{EnrichmentOracle, ProfileInsights};
    use crate::types::TechEntry;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;

    /// Stub oracle returning a canned opinion or a forced failure
    struct StubOracle {
        advice: Option<TeamAdvice>,
    }

    #[async_trait]
    impl EnrichmentOracle for StubOracle {
        async fn analyze_profile(&self, _profile: &Profile) -> crate::types::Result<ProfileInsights> {
            Err(ForgeError::Oracle("not used in these tests".into()))
        }

        async fn recommend_team(
            &self,
            _reference: &Profile,
            _candidates: &[&Profile],
            _required_skills: &[String],
        ) -> crate::types::Result<TeamAdvice> {
            self.advice
                .clone()
                .ok_or_else(|| ForgeError::Oracle("AI reasoning unavailable".into()))
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    fn candidate(handle: &str, techs: &[(&str, f64)], seeking: &[&str]) -> Profile {
        let mut p = Profile::new(handle);
        p.tech_stack = techs
            .iter()
            .map(|(name, conf)| TechEntry::new(*name, *conf))
            .collect();
        p.seeking = seeking.iter().map(|s| s.to_string()).collect();
        p
    }

    fn pool(size: usize) -> (Profile, Vec<Profile>) {
        let reference = candidate("ref", &[("python", 90.0), ("react", 40.0)], &["hackathon"]);
        let candidates = (0..size)
            .map(|i| {
                // Varying overlap so the ranking is non-trivial
                let techs: &[(&str, f64)] = if i % 2 == 0 {
                    &[("python", 80.0)]
                } else {
                    &[("go", 50.0)]
                };
                candidate(&format!("cand{}", i), techs, &["hackathon"])
            })
            .collect();
        (reference, candidates)
    }

    #[tokio::test]
    async fn test_selects_team_size_minus_one_sorted_descending() {
        let (reference, candidates) = pool(10);
        let optimizer = TeamOptimizer::without_oracle();
        let team = optimizer
            .find_optimal_team(&reference, &candidates, &[], 4)
            .await
            .unwrap();

        assert_eq!(team.members.len(), 3);
        for pair in team.members.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[tokio::test]
    async fn test_degrades_gracefully_on_small_pool() {
        let (reference, candidates) = pool(2);
        let optimizer = TeamOptimizer::without_oracle();
        let team = optimizer
            .find_optimal_team(&reference, &candidates, &[], 4)
            .await
            .unwrap();
        assert_eq!(team.members.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_pool_is_an_error() {
        let (reference, _) = pool(0);
        let optimizer = TeamOptimizer::without_oracle();
        let err = optimizer
            .find_optimal_team(&reference, &[], &[], 4)
            .await
            .unwrap_err();
        assert!(matches!(err, ForgeError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_too_small_team_size_is_an_error() {
        let (reference, candidates) = pool(3);
        let optimizer = TeamOptimizer::without_oracle();
        let err = optimizer
            .find_optimal_team(&reference, &candidates, &[], 1)
            .await
            .unwrap_err();
        assert!(matches!(err, ForgeError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_oracle_failure_uses_fallbacks_without_affecting_score() {
        let (reference, candidates) = pool(5);
        let skills = vec!["Python".to_string()];

        let degraded = TeamOptimizer::new(Arc::new(StubOracle { advice: None }))
            .find_optimal_team(&reference, &candidates, &skills, 4)
            .await
            .unwrap();
        let deterministic = TeamOptimizer::without_oracle()
            .find_optimal_team(&reference, &candidates, &skills, 4)
            .await
            .unwrap();

        assert_eq!(degraded.reasoning, FALLBACK_REASONING);
        for member in &degraded.members {
            assert_eq!(member.role, DEFAULT_ROLE);
            assert_eq!(
                member.strengths,
                vec!["good balance".to_string(), "technical diversity".to_string()]
            );
        }
        assert_eq!(degraded.total_score, deterministic.total_score);
    }

    #[tokio::test]
    async fn test_oracle_advice_is_merged() {
        let (reference, candidates) = pool(4);

        let mut roles = HashMap::new();
        roles.insert("Backend Developer".to_string(), "cand0".to_string());
        let advice = TeamAdvice {
            reasoning: Some("Complementary skills across the stack".into()),
            role_assignments: roles,
            team_strengths: vec!["strong python core".into()],
        };

        let team = TeamOptimizer::new(Arc::new(StubOracle {
            advice: Some(advice),
        }))
        .find_optimal_team(&reference, &candidates, &[], 4)
        .await
        .unwrap();

        assert_eq!(team.reasoning, "Complementary skills across the stack");
        let cand0 = team
            .members
            .iter()
            .find(|m| m.profile.handle.as_str() == "cand0")
            .unwrap();
        assert_eq!(cand0.role, "Backend Developer");
        // Unmatched members keep the placeholder
        assert!(
            team.members
                .iter()
                .filter(|m| m.profile.handle.as_str() != "cand0")
                .all(|m| m.role == DEFAULT_ROLE)
        );
        assert_eq!(team.members[0].strengths, vec!["strong python core"]);
    }

    #[tokio::test]
    async fn test_total_score_is_mean_of_member_scores() {
        let (reference, candidates) = pool(6);
        let team = TeamOptimizer::without_oracle()
            .find_optimal_team(&reference, &candidates, &[], 4)
            .await
            .unwrap();

        let mean: f64 =
            team.members.iter().map(|m| m.score).sum::<f64>() / team.members.len() as f64;
        assert_eq!(team.total_score, round2(mean));
    }

    #[tokio::test]
    async fn test_role_matches_display_name() {
        let (reference, mut candidates) = pool(3);
        candidates[0].display_name = Some("Ada Lovelace".into());

        let mut roles = HashMap::new();
        roles.insert("Lead Developer".to_string(), "Ada Lovelace".to_string());
        let advice = TeamAdvice {
            reasoning: None,
            role_assignments: roles,
            team_strengths: vec![],
        };

        let team = TeamOptimizer::new(Arc::new(StubOracle {
            advice: Some(advice),
        }))
        .find_optimal_team(&reference, &candidates, &[], 4)
        .await
        .unwrap();

        let ada = team
            .members
            .iter()
            .find(|m| m.profile.display_name.as_deref() == Some("Ada Lovelace"))
            .unwrap();
        assert_eq!(ada.role, "Lead Developer");
        // Absent reasoning falls back even though the call succeeded
        assert_eq!(team.reasoning, FALLBACK_REASONING);
    }
}
