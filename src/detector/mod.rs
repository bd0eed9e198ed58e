//! Technology Detection
//!
//! Turns unstructured profile text (readmes, repository descriptions) and
//! repository file listings into a ranked list of detected technologies.
//! Pure and deterministic: same input always yields the same output in the
//! same order.
//!
//! ## Signals
//!
//! 1. Weighted keyword occurrences in normalized text (code spans and URLs
//!    stripped first so snippets don't pollute the counts).
//! 2. Dependency-manifest filenames, each match adding a flat bonus.
//!
//! Raw scores map to a [0,1] confidence (`min(score/10, 1)`); the 0–100
//! stored unit is produced exactly once via [`DetectedTechnology::into_entry`].

pub mod registry;

pub use registry::{FileIndicator, KeywordRule, TechRegistry};

use regex::Regex;
use tracing::debug;

use crate::constants::detector::{CONFIDENCE_DIVISOR, FILE_INDICATOR_BONUS, MAX_TECHNOLOGIES};
use crate::types::{Result, SkillLevel, TechEntry, round2};

/// One detected technology, confidence on the detector-internal [0,1] scale
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedTechnology {
    pub name: String,
    pub level: SkillLevel,
    pub confidence: f64,
}

impl DetectedTechnology {
    /// Convert to the stored representation. This is the single boundary
    /// where the [0,1] unit becomes the persisted 0–100 unit.
    pub fn into_entry(self) -> TechEntry {
        TechEntry::new(self.name, self.confidence * 100.0)
    }
}

/// Keyword/file-based technology detector
pub struct TechDetector {
    registry: TechRegistry,
    fenced_code: Regex,
    inline_code: Regex,
    urls: Regex,
    punctuation: Regex,
}

impl TechDetector {
    /// Detector over the built-in registry.
    pub fn new() -> Result<Self> {
        Self::with_registry(TechRegistry::builtin())
    }

    /// Detector over a custom registry (used by tests and alternate tables).
    pub fn with_registry(registry: TechRegistry) -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| {
                crate::types::ForgeError::Config(format!("invalid detector pattern: {}", e))
            })
        };

        Ok(Self {
            registry,
            fenced_code: compile(r"(?s)```.*?```")?,
            inline_code: compile(r"`[^`\n]*`")?,
            urls: compile(r"https?://\S+")?,
            punctuation: compile(r"[^\w\s]")?,
        })
    }

    /// Normalize raw markdown-ish text for keyword matching: strip fenced
    /// and inline code spans, strip URLs, replace punctuation with
    /// whitespace, lowercase.
    pub fn normalize(&self, content: &str) -> String {
        let content = self.fenced_code.replace_all(content, "");
        let content = self.inline_code.replace_all(&content, "");
        let content = self.urls.replace_all(&content, "");
        let content = self.punctuation.replace_all(&content, " ");
        content.to_lowercase().trim().to_string()
    }

    /// Detect technologies from readme text, repository descriptions, and a
    /// shallow file listing. Empty input yields an empty result.
    pub fn detect(
        &self,
        readme: &str,
        descriptions: &[String],
        filenames: &[String],
    ) -> Vec<DetectedTechnology> {
        let combined = format!("{} {}", readme, descriptions.join(" "));
        let text = self.normalize(&combined);

        // Accumulate scores in first-insertion order so equal-confidence
        // results stay reproducible across runs.
        let mut scores: Vec<(String, f64)> = Vec::new();

        // Signal 1: weighted keyword occurrences
        for rule in self.registry.keyword_rules() {
            let mut score = 0.0;
            for keyword in &rule.keywords {
                let occurrences = text.matches(keyword.as_str()).count();
                score += occurrences as f64 * rule.weight;
            }
            if score > 0.0 {
                scores.push((rule.tech.clone(), score));
            }
        }

        // Signal 2: filename indicators, additive with the keyword scores
        for filename in filenames {
            let filename = filename.to_lowercase();
            for indicator in self.registry.file_indicators() {
                if filename.contains(indicator.pattern.as_str()) {
                    for tech in &indicator.techs {
                        match scores.iter_mut().find(|(name, _)| name == tech) {
                            Some((_, score)) => *score += FILE_INDICATOR_BONUS,
                            None => scores.push((tech.clone(), FILE_INDICATOR_BONUS)),
                        }
                    }
                }
            }
        }

        let mut detected: Vec<DetectedTechnology> = scores
            .into_iter()
            .map(|(name, score)| {
                let confidence = (score / CONFIDENCE_DIVISOR).min(1.0);
                DetectedTechnology {
                    name,
                    level: SkillLevel::from_confidence(confidence),
                    confidence: round2(confidence),
                }
            })
            .collect();

        // Stable sort keeps insertion order on tied confidence
        detected.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        detected.truncate(MAX_TECHNOLOGIES);

        debug!("Detected {} technologies", detected.len());
        detected
    }
}
