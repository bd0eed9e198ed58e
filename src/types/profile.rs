//! Profile Domain Types
//!
//! The profile record is the unit every matching component consumes: an
//! identity plus an inferred technology stack, language breakdown, goal tags,
//! and an optional AI-generated analysis.
//!
//! ## Confidence units
//!
//! Stored `TechEntry.confidence` is always on a 0–100 scale. The detector
//! works internally on [0,1] and converts exactly once when its output is
//! turned into stored entries.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Handle, ProfileId};

/// Default experience weight for missing or unrecognized labels
pub const DEFAULT_EXPERIENCE_WEIGHT: f64 = 0.5;

// =============================================================================
// Skill Level
// =============================================================================

/// Proficiency bucket derived deterministically from detection confidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Derive a level from a [0,1] confidence value.
    ///
    /// Boundaries are strict: exactly 0.8 is advanced, exactly 0.4 is
    /// intermediate.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 0.8 {
            SkillLevel::Expert
        } else if confidence > 0.6 {
            SkillLevel::Advanced
        } else if confidence > 0.4 {
            SkillLevel::Intermediate
        } else {
            SkillLevel::Beginner
        }
    }

    /// Numeric weight used by the compatibility scorer's experience-balance
    /// term.
    pub fn weight(self) -> f64 {
        match self {
            SkillLevel::Beginner => 0.3,
            SkillLevel::Intermediate => 0.6,
            SkillLevel::Advanced => 0.8,
            SkillLevel::Expert => 1.0,
        }
    }

    /// Case-insensitive parse of a free-form experience label.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "beginner" => Some(SkillLevel::Beginner),
            "intermediate" => Some(SkillLevel::Intermediate),
            "advanced" => Some(SkillLevel::Advanced),
            "expert" => Some(SkillLevel::Expert),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Expert => "expert",
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weight for a free-form experience label, defaulting when unrecognized.
/// Model output is untrusted, so unknown labels are not an error.
pub fn experience_weight(label: &str) -> f64 {
    SkillLevel::parse_label(label)
        .map(SkillLevel::weight)
        .unwrap_or(DEFAULT_EXPERIENCE_WEIGHT)
}

// =============================================================================
// Tech Stack
// =============================================================================

/// One detected technology as stored on a profile.
///
/// Invariant: `confidence` is in [0,100] and `level` matches
/// `SkillLevel::from_confidence(confidence / 100.0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechEntry {
    pub name: String,
    pub level: SkillLevel,
    /// Confidence on a 0–100 scale
    pub confidence: f64,
}

impl TechEntry {
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        let confidence = confidence.clamp(0.0, 100.0);
        Self {
            name: name.into(),
            level: SkillLevel::from_confidence(confidence / 100.0),
            confidence,
        }
    }
}

// =============================================================================
// AI Analysis
// =============================================================================

/// Structured enrichment produced by a successful oracle call.
///
/// Every field arrives from untrusted model output and is defaulted when
/// absent. `experience_level` stays a free string; the scorer parses it with
/// a fallback weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiAnalysis {
    pub experience_level: String,
    pub specialization_areas: Vec<String>,
    pub collaboration_strengths: Vec<String>,
    pub learning_interests: Vec<String>,
}

// =============================================================================
// Profile
// =============================================================================

/// A person's aggregated identity and inferred skill record.
///
/// Created once from ingestion; mutated only by re-running detection
/// (replaces `tech_stack`) or a successful enrichment (replaces
/// `ai_analysis`). Never deleted by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub handle: Handle,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    /// Ordered by descending confidence, unique by name
    #[serde(default)]
    pub tech_stack: Vec<TechEntry>,
    /// Language name → relative size in bytes
    #[serde(default)]
    pub languages: HashMap<String, u64>,
    /// Goal tags used for interest overlap
    #[serde(default)]
    pub seeking: Vec<String>,
    /// Absent until an enrichment call succeeds
    #[serde(default)]
    pub ai_analysis: Option<AiAnalysis>,
}

impl Profile {
    /// Minimal profile with a fresh id. Remaining fields are filled by
    /// ingestion and detection.
    pub fn new(handle: impl Into<Handle>) -> Self {
        Self {
            id: ProfileId::generate(),
            handle: handle.into(),
            display_name: None,
            bio: None,
            avatar_url: None,
            public_repos: 0,
            followers: 0,
            following: 0,
            tech_stack: Vec::new(),
            languages: HashMap::new(),
            seeking: Vec::new(),
            ai_analysis: None,
        }
    }

    /// Experience weight from the stored analysis, treating a missing
    /// analysis as "intermediate".
    pub fn experience_weight(&self) -> f64 {
        let label = self
            .ai_analysis
            .as_ref()
            .map(|a| a.experience_level.as_str())
            .filter(|l| !l.is_empty())
            .unwrap_or("intermediate");
        experience_weight(label)
    }

    /// Lowercased technology names, for overlap computations.
    pub fn skill_names(&self) -> Vec<String> {
        self.tech_stack
            .iter()
            .map(|t| t.name.to_lowercase())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries_are_strict() {
        assert_eq!(SkillLevel::from_confidence(0.8), SkillLevel::Advanced);
        assert_eq!(SkillLevel::from_confidence(0.81), SkillLevel::Expert);
        assert_eq!(SkillLevel::from_confidence(0.6), SkillLevel::Intermediate);
        assert_eq!(SkillLevel::from_confidence(0.4), SkillLevel::Beginner);
        assert_eq!(SkillLevel::from_confidence(0.41), SkillLevel::Intermediate);
    }

    #[test]
    fn test_experience_weight_defaults() {
        assert_eq!(experience_weight("expert"), 1.0);
        assert_eq!(experience_weight("EXPERT"), 1.0);
        assert_eq!(experience_weight("wizard"), DEFAULT_EXPERIENCE_WEIGHT);
        assert_eq!(experience_weight(""), DEFAULT_EXPERIENCE_WEIGHT);
    }

    #[test]
    fn test_profile_without_analysis_is_intermediate() {
        let profile = Profile::new("octocat");
        assert_eq!(profile.experience_weight(), 0.6);
    }

    #[test]
    fn test_tech_entry_derives_consistent_level() {
        let entry = TechEntry::new("Python", 90.0);
        assert_eq!(entry.level, SkillLevel::Expert);
        let entry = TechEntry::new("React", 40.0);
        assert_eq!(entry.level, SkillLevel::Beginner);
        // Out-of-range input is clamped, not rejected
        let entry = TechEntry::new("Go", 150.0);
        assert_eq!(entry.confidence, 100.0);
    }

    #[test]
    fn test_level_serde_lowercase() {
        let json = serde_json::to_string(&SkillLevel::Advanced).unwrap();
        assert_eq!(json, "\"advanced\"");
    }
}
