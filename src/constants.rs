//! Global Constants
//!
//! Centralized constants for detection, scoring, and team formation.
//! All magic numbers should be defined here with documentation.

/// Technology detector constants
pub mod detector {
    /// Flat score bonus for each filename-indicator match
    pub const FILE_INDICATOR_BONUS: f64 = 3.0;

    /// Raw keyword score mapping to full confidence (score / divisor, capped)
    pub const CONFIDENCE_DIVISOR: f64 = 10.0;

    /// Maximum technologies reported per profile
    pub const MAX_TECHNOLOGIES: usize = 12;
}

/// Compatibility scoring constants
///
/// Fixed design constants, not configurable per call. Weights sum to 1.0;
/// the composite is scaled to 0–10.
pub mod scoring {
    /// Weight of the skill-overlap term
    pub const OVERLAP_WEIGHT: f64 = 0.5;

    /// Weight of the experience-balance term
    pub const BALANCE_WEIGHT: f64 = 0.3;

    /// Weight of the shared-interest term
    pub const INTEREST_WEIGHT: f64 = 0.2;

    /// Shared goals at which the interest term saturates
    pub const INTEREST_SATURATION: f64 = 3.0;

    /// Scale factor from the [0,1] composite to the reported score
    pub const SCORE_SCALE: f64 = 10.0;
}

/// Skill-gap analysis constants (0–100 confidence unit)
pub mod gaps {
    /// Stored confidence at or above which a required skill is covered
    pub const COVERED_THRESHOLD: f64 = 70.0;

    /// Stored confidence at or above which a required skill counts as partial
    pub const PARTIAL_THRESHOLD: f64 = 30.0;
}

/// Team formation constants
pub mod team {
    /// Default requested team size (including the reference member)
    pub const DEFAULT_TEAM_SIZE: usize = 4;

    /// Role assigned when the oracle provides none
    pub const DEFAULT_ROLE: &str = "Contributor";

    /// Strengths used when the oracle provides none
    pub const DEFAULT_STRENGTHS: [&str; 2] = ["good balance", "technical diversity"];

    /// Reasoning used when the oracle fails or stays silent
    pub const FALLBACK_REASONING: &str = "Team formed using skill and experience matching.";
}

/// HTTP/Network constants
pub mod network {
    /// Default oracle request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 45;
}
