//! Skill Gap Analysis
//!
//! Buckets each required skill as covered, partial, or missing based on the
//! profile's stored detection confidence (0–100 unit), and computes a
//! coverage percentage with half credit for partial skills.

use std::collections::HashMap;

use crate::constants::gaps::{COVERED_THRESHOLD, PARTIAL_THRESHOLD};
use crate::types::{ForgeError, Profile, Result, SkillGapReport, round2};

/// Compare a profile's tech stack against a required-skill list.
///
/// Lookup is case-insensitive; a skill absent from the stack has confidence
/// 0. An empty required-skill list is an input-contract violation, never a
/// silent division by zero.
pub fn analyze(profile: &Profile, required_skills: &[String]) -> Result<SkillGapReport> {
    if required_skills.is_empty() {
        return Err(ForgeError::InvalidInput(
            "required skills must not be empty for gap analysis".into(),
        ));
    }

    let confidences: HashMap<String, f64> = profile
        .tech_stack
        .iter()
        .map(|t| (t.name.to_lowercase(), t.confidence))
        .collect();

    let mut covered = Vec::new();
    let mut partial = Vec::new();
    let mut missing = Vec::new();

    for skill in required_skills {
        let confidence = confidences
            .get(&skill.to_lowercase())
            .copied()
            .unwrap_or(0.0);

        if confidence >= COVERED_THRESHOLD {
            covered.push(skill.clone());
        } else if confidence >= PARTIAL_THRESHOLD {
            partial.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }

    let coverage_score = round2(
        (covered.len() as f64 + 0.5 * partial.len() as f64) / required_skills.len() as f64 * 100.0,
    );

    Ok(SkillGapReport {
        required_skills: required_skills.to_vec(),
        covered,
        partial,
        missing,
        coverage_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TechEntry;

    fn profile_with(techs: &[(&str, f64)]) -> Profile {
        let mut p = Profile::new("octocat");
        p.tech_stack = techs
            .iter()
            .map(|(name, conf)| TechEntry::new(*name, *conf))
            .collect();
        p
    }

    fn required(skills: &[&str]) -> Vec<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_required_skills_is_an_error() {
        let p = profile_with(&[("Python", 90.0)]);
        let err = analyze(&p, &[]).unwrap_err();
        assert!(matches!(err, ForgeError::InvalidInput(_)));
    }

    #[test]
    fn test_threshold_boundaries() {
        let p = profile_with(&[("python", 70.0), ("react", 30.0), ("go", 29.9)]);
        let report = analyze(&p, &required(&["Python", "React", "Go"])).unwrap();

        assert_eq!(report.covered, vec!["Python"]);
        assert_eq!(report.partial, vec!["React"]);
        assert_eq!(report.missing, vec!["Go"]);
        // (1 + 0.5) / 3 * 100 = 50
        assert_eq!(report.coverage_score, 50.0);
    }

    #[test]
    fn test_absent_skill_is_missing() {
        let p = profile_with(&[("Python", 90.0)]);
        let report = analyze(&p, &required(&["Kubernetes"])).unwrap();
        assert_eq!(report.missing, vec!["Kubernetes"]);
        assert_eq!(report.coverage_score, 0.0);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let p = profile_with(&[("PostgreSQL", 85.0)]);
        let report = analyze(&p, &required(&["postgresql"])).unwrap();
        assert_eq!(report.covered, vec!["postgresql"]);
        assert_eq!(report.coverage_score, 100.0);
    }

    #[test]
    fn test_empty_stack_covers_nothing() {
        let p = profile_with(&[]);
        let report = analyze(&p, &required(&["Python", "React"])).unwrap();
        assert_eq!(report.missing.len(), 2);
        assert!(report.covered.is_empty());
        assert!(report.partial.is_empty());
    }
}
