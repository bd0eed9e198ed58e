//! Pairwise Compatibility Scoring
//!
//! Heuristic 0–10 team-fit score between a reference profile and a
//! candidate, combining skill overlap, experience balance, and shared-goal
//! overlap with fixed weights. Pure and deterministic; computed
//! independently for each ordered pair even though the individual terms
//! happen to be symmetric.

use std::collections::HashSet;

use crate::constants::scoring::{
    BALANCE_WEIGHT, INTEREST_SATURATION, INTEREST_WEIGHT, OVERLAP_WEIGHT, SCORE_SCALE,
};
use crate::types::{CompatibilityResult, Profile, round2};

/// Jaccard overlap over lowercased technology names, in [0,1].
/// Zero when either stack is empty.
pub fn skill_overlap(reference: &Profile, candidate: &Profile) -> f64 {
    let a: HashSet<String> = reference.skill_names().into_iter().collect();
    let b: HashSet<String> = candidate.skill_names().into_iter().collect();

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(&b).count() as f64;
    let union = a.union(&b).count() as f64;
    intersection / union
}

/// Experience balance in [0,1]: 1 when both profiles carry the same
/// experience weight, shrinking with the absolute gap.
pub fn experience_balance(reference: &Profile, candidate: &Profile) -> f64 {
    1.0 - (reference.experience_weight() - candidate.experience_weight()).abs()
}

/// Shared-interest term in [0,1], saturating once three or more goal tags
/// are shared.
pub fn shared_interest(reference: &Profile, candidate: &Profile) -> f64 {
    let a: HashSet<&str> = reference.seeking.iter().map(String::as_str).collect();
    let b: HashSet<&str> = candidate.seeking.iter().map(String::as_str).collect();
    let shared = a.intersection(&b).count() as f64;
    (shared / INTEREST_SATURATION).min(1.0)
}

/// Composite compatibility score in [0,10], rounded to 2 decimals.
pub fn score(reference: &Profile, candidate: &Profile) -> f64 {
    let composite = skill_overlap(reference, candidate) * OVERLAP_WEIGHT
        + experience_balance(reference, candidate) * BALANCE_WEIGHT
        + shared_interest(reference, candidate) * INTEREST_WEIGHT;
    round2(composite * SCORE_SCALE)
}

/// Score one candidate, producing the transient result value.
pub fn score_candidate(reference: &Profile, candidate: &Profile) -> CompatibilityResult {
    CompatibilityResult {
        candidate_id: candidate.id.clone(),
        score: score(reference, candidate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AiAnalysis, Profile, TechEntry};
    use proptest::prelude::*;

    fn profile(handle: &str, techs: &[(&str, f64)], seeking: &[&str]) -> Profile {
        let mut p = Profile::new(handle);
        p.tech_stack = techs
            .iter()
            .map(|(name, conf)| TechEntry::new(*name, *conf))
            .collect();
        p.seeking = seeking.iter().map(|s| s.to_string()).collect();
        p
    }

    #[test]
    fn test_overlap_of_identical_stacks_is_one() {
        let a = profile("a", &[("Python", 90.0), ("React", 40.0)], &[]);
        assert_eq!(skill_overlap(&a, &a), 1.0);
    }

    #[test]
    fn test_overlap_with_empty_stack_is_zero() {
        let a = profile("a", &[("Python", 90.0)], &[]);
        let b = profile("b", &[], &[]);
        assert_eq!(skill_overlap(&a, &b), 0.0);
        assert_eq!(skill_overlap(&b, &a), 0.0);
        assert_eq!(skill_overlap(&b, &b), 0.0);
    }

    #[test]
    fn test_overlap_is_case_insensitive() {
        let a = profile("a", &[("PYTHON", 90.0)], &[]);
        let b = profile("b", &[("python", 50.0)], &[]);
        assert_eq!(skill_overlap(&a, &b), 1.0);
    }

    #[test]
    fn test_interest_term_saturates_at_three() {
        let a = profile("a", &[], &["hackathon", "oss", "startup", "research"]);
        let b = profile("b", &[], &["hackathon", "oss", "startup", "research"]);
        assert_eq!(shared_interest(&a, &b), 1.0);

        let c = profile("c", &[], &["hackathon"]);
        assert!((shared_interest(&a, &c) - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_self_score_fixture() {
        // overlap = 1, balance = 1, interest = 1/3:
        // (1*0.5 + 1*0.3 + (1/3)*0.2) * 10 = 8.67 after rounding
        let a = profile("a", &[("Python", 90.0)], &["hackathon"]);
        assert_eq!(score(&a, &a), 8.67);
    }

    #[test]
    fn test_end_to_end_fixture() {
        // Reference: python 90, react 40, seeking hackathon.
        // Candidate: python 80, seeking hackathon.
        // overlap = 1/2, both experience defaulted (balance = 1),
        // one shared goal (interest = 1/3):
        // (0.5*0.5 + 1*0.3 + (1/3)*0.2) * 10 = 6.17 after rounding.
        let reference = profile("ref", &[("python", 90.0), ("react", 40.0)], &["hackathon"]);
        let candidate = profile("cand", &[("python", 80.0)], &["hackathon"]);

        assert_eq!(skill_overlap(&reference, &candidate), 0.5);
        assert_eq!(experience_balance(&reference, &candidate), 1.0);
        assert_eq!(score(&reference, &candidate), 6.17);
    }

    #[test]
    fn test_score_candidate_carries_id() {
        let a = profile("a", &[("python", 90.0)], &["hackathon"]);
        let b = profile("b", &[("python", 80.0)], &["hackathon"]);
        let result = score_candidate(&a, &b);
        assert_eq!(result.candidate_id, b.id);
        assert_eq!(result.score, score(&a, &b));
    }

    #[test]
    fn test_unrecognized_experience_uses_default_weight() {
        let mut a = profile("a", &[], &[]);
        a.ai_analysis = Some(AiAnalysis {
            experience_level: "ninja".into(),
            ..Default::default()
        });
        let b = profile("b", &[], &[]);
        // 0.5 (default) vs 0.6 (missing analysis -> intermediate)
        assert!((experience_balance(&a, &b) - 0.9).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_score_stays_in_range(
            techs_a in proptest::collection::vec("[a-z]{1,8}", 0..10),
            techs_b in proptest::collection::vec("[a-z]{1,8}", 0..10),
            seeking_a in proptest::collection::vec("[a-z]{1,6}", 0..5),
            seeking_b in proptest::collection::vec("[a-z]{1,6}", 0..5),
        ) {
            let a = profile(
                "a",
                &techs_a.iter().map(|t| (t.as_str(), 50.0)).collect::<Vec<_>>(),
                &seeking_a.iter().map(String::as_str).collect::<Vec<_>>(),
            );
            let b = profile(
                "b",
                &techs_b.iter().map(|t| (t.as_str(), 50.0)).collect::<Vec<_>>(),
                &seeking_b.iter().map(String::as_str).collect::<Vec<_>>(),
            );

            let s = score(&a, &b);
            prop_assert!((0.0..=10.0).contains(&s));

            let overlap = skill_overlap(&a, &b);
            prop_assert!((0.0..=1.0).contains(&overlap));
        }
    }
}
