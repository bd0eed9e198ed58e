//! Enrichment Prompt Builders
//!
//! Prompt text for the two oracle operations. The prompts request strict
//! JSON with the keys the response parser reads; anything else the model
//! emits is dropped by the defaults in [`super::response`].

use crate::types::Profile;

/// Prompt for single-profile narrative analysis.
pub fn profile_analysis(profile: &Profile) -> String {
    let languages: Vec<&String> = profile.languages.keys().collect();
    let tech_names: Vec<&str> = profile
        .tech_stack
        .iter()
        .map(|t| t.name.as_str())
        .collect();

    format!(
        r#"You are a career assistant analyzing a developer's public profile.

Profile summary:
- Name: {name}
- Handle: {handle}
- Bio: {bio}
- Public repositories: {repos}
- Followers: {followers}
- Top languages: {languages:?}
- Detected tech stack: {tech:?}
- Seeking: {seeking:?}

Return JSON with exactly these keys:
{{
  "experience_level": "beginner" | "intermediate" | "advanced" | "expert",
  "specialization_areas": ["Web Development", "AI/ML"],
  "collaboration_strengths": ["communication", "mentorship"],
  "learning_interests": ["cloud computing", "TypeScript"]
}}
Only output valid JSON."#,
        name = profile.display_name.as_deref().unwrap_or(""),
        handle = profile.handle,
        bio = profile.bio.as_deref().unwrap_or("No bio provided"),
        repos = profile.public_repos,
        followers = profile.followers,
        languages = languages,
        tech = tech_names,
        seeking = profile.seeking,
    )
}

/// Prompt for team recommendation over an already-selected candidate set.
pub fn team_recommendation(
    reference: &Profile,
    candidates: &[&Profile],
    required_skills: &[String],
) -> String {
    let reference_info = format!(
        "{} (@{})",
        reference.display_name.as_deref().unwrap_or(""),
        reference.handle
    );

    let candidate_lines: Vec<String> = candidates
        .iter()
        .map(|c| {
            let skills: Vec<&str> = c.tech_stack.iter().map(|t| t.name.as_str()).collect();
            format!(
                "- {} ({}): skills = {:?}",
                c.display_name.as_deref().unwrap_or(""),
                c.handle,
                skills
            )
        })
        .collect();

    let reference_skills: Vec<&str> = reference
        .tech_stack
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    let experience = reference
        .ai_analysis
        .as_ref()
        .map(|a| a.experience_level.as_str())
        .filter(|l| !l.is_empty())
        .unwrap_or("intermediate");

    format!(
        r#"You are an expert in hackathon team formation.
Explain how the selected candidates complement {reference_info}.

Project requirements: {required:?}

Reference member:
Skills = {reference_skills:?}
Experience = {experience}

Selected candidates:
{candidates}

Return JSON with exactly these keys:
{{
  "reasoning": "Why this team composition works",
  "role_assignments": {{
    "Lead Developer": "reference_handle",
    "Backend Developer": "candidate_handle"
  }},
  "team_strengths": ["balanced skill set", "good communication"]
}}
Output must be valid JSON."#,
        reference_info = reference_info,
        required = required_skills,
        reference_skills = reference_skills,
        experience = experience,
        candidates = candidate_lines.join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TechEntry;

    #[test]
    fn test_profile_prompt_includes_identity_and_stack() {
        let mut p = Profile::new("octocat");
        p.display_name = Some("Octo Cat".into());
        p.tech_stack = vec![TechEntry::new("Python", 90.0)];
        p.seeking = vec!["hackathon".into()];

        let prompt = profile_analysis(&p);
        assert!(prompt.contains("octocat"));
        assert!(prompt.contains("Python"));
        assert!(prompt.contains("hackathon"));
        assert!(prompt.contains("experience_level"));
    }

    #[test]
    fn test_team_prompt_lists_candidates_and_requirements() {
        let reference = Profile::new("ref");
        let mut cand = Profile::new("builder");
        cand.tech_stack = vec![TechEntry::new("React", 60.0)];
        let required = vec!["Python".to_string(), "React".to_string()];

        let prompt = team_recommendation(&reference, &[&cand], &required);
        assert!(prompt.contains("builder"));
        assert!(prompt.contains("React"));
        assert!(prompt.contains("role_assignments"));
        // Missing analysis falls back to the default experience label
        assert!(prompt.contains("Experience = intermediate"));
    }
}
