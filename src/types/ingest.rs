//! Ingestion Input Shapes
//!
//! The contract with the external profile-hosting collaborator. Network
//! fetching is out of scope; the `ingest` command consumes a pre-fetched
//! JSON dump with these shapes and runs detection over it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw user metadata from the hosting service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserMetadata {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
}

/// One repository's metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoMetadata {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Primary language reported by the hosting service
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Complete pre-fetched profile dump
///
/// `readmes` carries raw readme text per repository and `file_listings` a
/// shallow file listing per repository; both are optional signals for the
/// detector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDump {
    pub user: UserMetadata,
    pub repos: Vec<RepoMetadata>,
    pub readmes: Vec<String>,
    pub file_listings: Vec<String>,
    /// Goal tags supplied at registration time
    pub seeking: Vec<String>,
}

impl ProfileDump {
    /// Repository descriptions, skipping repos without one.
    pub fn descriptions(&self) -> Vec<String> {
        self.repos
            .iter()
            .filter_map(|r| r.description.clone())
            .collect()
    }

    /// Combined readme text for detection.
    pub fn readme_text(&self) -> String {
        self.readmes.join("\n")
    }

    /// Aggregate primary languages weighted by repository size.
    pub fn language_weights(&self) -> std::collections::HashMap<String, u64> {
        let mut weights = std::collections::HashMap::new();
        for repo in &self.repos {
            if let Some(lang) = &repo.language {
                *weights.entry(lang.clone()).or_insert(0) += repo.size.max(1);
            }
        }
        weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_weights_aggregate_by_size() {
        let dump = ProfileDump {
            repos: vec![
                RepoMetadata {
                    name: "api".into(),
                    description: None,
                    language: Some("Python".into()),
                    size: 100,
                    stargazers_count: 0,
                    forks_count: 0,
                    updated_at: None,
                },
                RepoMetadata {
                    name: "web".into(),
                    description: Some("frontend".into()),
                    language: Some("Python".into()),
                    size: 50,
                    stargazers_count: 0,
                    forks_count: 0,
                    updated_at: None,
                },
                RepoMetadata {
                    name: "empty".into(),
                    description: None,
                    language: None,
                    size: 0,
                    stargazers_count: 0,
                    forks_count: 0,
                    updated_at: None,
                },
            ],
            ..Default::default()
        };

        let weights = dump.language_weights();
        assert_eq!(weights.get("Python"), Some(&150));
        assert_eq!(weights.len(), 1);
        assert_eq!(dump.descriptions(), vec!["frontend"]);
    }

    #[test]
    fn test_dump_deserializes_with_missing_fields() {
        let dump: ProfileDump =
            serde_json::from_str(r#"{"user": {"login": "octocat"}}"#).unwrap();
        assert_eq!(dump.user.login, "octocat");
        assert!(dump.repos.is_empty());
        assert!(dump.readme_text().is_empty());
    }
}
