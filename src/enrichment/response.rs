//! Oracle Response Parsing
//!
//! Model output is untrusted and only partially present: every field is read
//! with an explicit default, and an `error` key marks the whole response as
//! failed regardless of what else it carries.

use serde_json::Value;

use crate::types::{
    AiAnalysis, ForgeError, Result, json_string, json_string_array, json_string_map,
};

/// Parsed profile-analysis opinion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileInsights {
    pub experience_level: String,
    pub specialization_areas: Vec<String>,
    pub collaboration_strengths: Vec<String>,
    pub learning_interests: Vec<String>,
}

impl ProfileInsights {
    /// Parse from raw oracle JSON. An `error` key fails the parse; all
    /// other fields default when absent or mistyped.
    pub fn from_value(value: &Value) -> Result<Self> {
        check_error_marker(value)?;

        Ok(Self {
            experience_level: json_string(value, "experience_level").unwrap_or_default(),
            specialization_areas: json_string_array(value, "specialization_areas"),
            collaboration_strengths: json_string_array(value, "collaboration_strengths"),
            learning_interests: json_string_array(value, "learning_interests"),
        })
    }

    /// Convert into the stored analysis record.
    pub fn into_analysis(self) -> AiAnalysis {
        AiAnalysis {
            experience_level: self.experience_level,
            specialization_areas: self.specialization_areas,
            collaboration_strengths: self.collaboration_strengths,
            learning_interests: self.learning_interests,
        }
    }
}

/// Parsed team-recommendation opinion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamAdvice {
    pub reasoning: Option<String>,
    /// Role name → member handle or display name
    pub role_assignments: std::collections::HashMap<String, String>,
    pub team_strengths: Vec<String>,
}

impl TeamAdvice {
    pub fn from_value(value: &Value) -> Result<Self> {
        check_error_marker(value)?;

        Ok(Self {
            reasoning: json_string(value, "reasoning").filter(|r| !r.trim().is_empty()),
            role_assignments: json_string_map(value, "role_assignments"),
            team_strengths: json_string_array(value, "team_strengths"),
        })
    }
}

/// Reject responses carrying an explicit error marker.
fn check_error_marker(value: &Value) -> Result<()> {
    if let Some(error) = json_string(value, "error") {
        return Err(ForgeError::Oracle(format!("model reported error: {}", error)));
    }
    Ok(())
}

/// Extract a JSON object from raw model text.
///
/// Strips markdown code fences the model sometimes wraps around its output,
/// then parses. Anything unparseable is an oracle failure, never a panic.
pub fn extract_json(raw: &str) -> Result<Value> {
    let cleaned = raw
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    serde_json::from_str(cleaned).map_err(|e| {
        let preview: String = cleaned.chars().take(120).collect();
        ForgeError::Oracle(format!("invalid JSON from model: {} ({})", e, preview))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_marker_fails_parse() {
        let value = json!({"error": "AI reasoning unavailable", "reasoning": "ignored"});
        assert!(ProfileInsights::from_value(&value).is_err());
        assert!(TeamAdvice::from_value(&value).is_err());
    }

    #[test]
    fn test_partial_insights_default_missing_fields() {
        let value = json!({"experience_level": "advanced"});
        let insights = ProfileInsights::from_value(&value).unwrap();
        assert_eq!(insights.experience_level, "advanced");
        assert!(insights.specialization_areas.is_empty());
        assert!(insights.learning_interests.is_empty());
    }

    #[test]
    fn test_team_advice_ignores_blank_reasoning() {
        let value = json!({"reasoning": "   ", "team_strengths": ["balanced skill set"]});
        let advice = TeamAdvice::from_value(&value).unwrap();
        assert_eq!(advice.reasoning, None);
        assert_eq!(advice.team_strengths, vec!["balanced skill set"]);
    }

    #[test]
    fn test_team_advice_full_parse() {
        let value = json!({
            "reasoning": "Complementary frontend and backend skills",
            "role_assignments": {"Backend Developer": "octocat"},
            "team_strengths": ["good communication"],
            "skill_coverage": {"Python": "covered"}
        });
        let advice = TeamAdvice::from_value(&value).unwrap();
        assert_eq!(
            advice.reasoning.as_deref(),
            Some("Complementary frontend and backend skills")
        );
        assert_eq!(
            advice.role_assignments.get("Backend Developer").map(String::as_str),
            Some("octocat")
        );
    }

    #[test]
    fn test_extract_json_strips_fences() {
        let raw = "```json\n{\"reasoning\": \"ok\"}\n```";
        let value = extract_json(raw).unwrap();
        assert_eq!(json_string(&value, "reasoning").as_deref(), Some("ok"));
    }

    #[test]
    fn test_extract_json_rejects_garbage() {
        let err = extract_json("I think the best team would be...").unwrap_err();
        assert!(matches!(err, ForgeError::Oracle(_)));
    }
}
