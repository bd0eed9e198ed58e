//! Matching Engine
//!
//! The deterministic core: pairwise compatibility scoring, skill-gap
//! analysis, and team optimization. All functions operate on in-memory
//! profile snapshots; nothing here holds shared mutable state.
//!
//! ## Modules
//!
//! - `compatibility`: 0–10 pairwise team-fit heuristic
//! - `gaps`: covered/partial/missing bucketing against required skills
//! - `optimizer`: ranking, selection, and enrichment merge

pub mod compatibility;
pub mod gaps;
pub mod optimizer;

pub use compatibility::{score, score_candidate, skill_overlap};
pub use gaps::analyze as analyze_skill_gaps;
pub use optimizer::TeamOptimizer;
