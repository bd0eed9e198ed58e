//! teamforge - Skill Inference and Team Matching Engine
//!
//! Ingests developer profile dumps, infers a technology-skill profile from
//! repository metadata and text, and assembles candidate project teams
//! against a set of required skills. A local LLM optionally enriches the
//! deterministic results with narrative reasoning and role assignments.
//!
//! ## Core Components
//!
//! - **TechDetector**: keyword/file-based technology detection, pure and
//!   deterministic
//! - **CompatibilityScorer**: 0–10 pairwise team-fit heuristic
//! - **SkillGapAnalyzer**: covered/partial/missing bucketing against
//!   required skills
//! - **TeamOptimizer**: ranking, selection, and best-effort enrichment merge
//!
//! ## Quick Start
//!
//! ```ignore
//! use teamforge::detector::TechDetector;
//! use teamforge::matching::TeamOptimizer;
//!
//! let detector = TechDetector::new()?;
//! let detected = detector.detect(readme, &descriptions, &filenames);
//!
//! let optimizer = TeamOptimizer::without_oracle();
//! let team = optimizer
//!     .find_optimal_team(&reference, &candidates, &required_skills, 4)
//!     .await?;
//! ```
//!
//! ## Modules
//!
//! - [`detector`]: technology registry and detection
//! - [`matching`]: compatibility scoring, gap analysis, team optimization
//! - [`enrichment`]: LLM oracle abstraction and Ollama implementation
//! - [`storage`]: SQLite persistence port
//! - [`config`]: layered configuration

pub mod cli;
pub mod config;
pub mod constants;
pub mod detector;
pub mod enrichment;
pub mod matching;
pub mod storage;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader};

// Error Types
pub use types::error::{ForgeError, Result, ResultExt};

// Domain Types
pub use types::{
    AiAnalysis, CompatibilityResult, Handle, Profile, ProfileDump, ProfileId, Recommendation,
    SkillGapReport, SkillLevel, TeamMember, TeamResult, TechEntry,
};

// Detection
pub use detector::{DetectedTechnology, TechDetector, TechRegistry};

// Matching
pub use matching::TeamOptimizer;

// Enrichment
pub use enrichment::{EnrichmentOracle, OllamaOracle, OracleConfig, SharedOracle};

// Storage
pub use storage::{ProfileStore, SharedStore};
