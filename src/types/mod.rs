pub mod error;
pub mod ingest;
pub mod profile;
pub mod team;
pub mod utils;

pub use error::{ForgeError, Result, ResultExt};
pub use ingest::{ProfileDump, RepoMetadata, UserMetadata};
pub use profile::{
    AiAnalysis, DEFAULT_EXPERIENCE_WEIGHT, Profile, SkillLevel, TechEntry, experience_weight,
};
pub use team::{CompatibilityResult, Recommendation, SkillGapReport, TeamMember, TeamResult};
pub use utils::{
    json_string, json_string_array, json_string_map, json_string_or, log_filter_warn, round2,
};

// =============================================================================
// Domain Newtypes
// =============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

/// Type-safe wrapper for profile ids
///
/// Prevents accidental mixing of profile ids with handles or other strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random id for a newly ingested profile.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProfileId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProfileId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProfileId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Type-safe wrapper for the unique account handle
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handle(String);

impl Handle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Handle {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Handle {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod newtype_tests {
    use super::*;

    #[test]
    fn test_profile_id_roundtrip() {
        let id = ProfileId::new("p-123");
        assert_eq!(id.as_str(), "p-123");
        assert_eq!(format!("{}", id), "p-123");

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"p-123\"");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(ProfileId::generate(), ProfileId::generate());
    }

    #[test]
    fn test_handle_conversions() {
        let handle: Handle = "octocat".into();
        assert_eq!(handle.as_str(), "octocat");
        assert_eq!(handle, Handle::new(String::from("octocat")));
    }
}
