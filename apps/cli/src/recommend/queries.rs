//! Query Generator — turns profile + preferences into a handful of web
//! search queries.

use crate::llm_client::LlmClient;
use crate::models::profile::{CandidateProfile, JobPreference};
use crate::recommend::profile::fallback_role;
use crate::recommend::prompts::{QUERY_PROMPT_TEMPLATE, QUERY_SYSTEM};

/// How many leading skills the fallback query includes.
const MAX_QUERY_SKILLS: usize = 4;

/// Asks the LLM for 3-6 search queries; on any failure, synthesizes
/// deterministic queries from the preference and profile instead.
pub async fn generate_queries(
    llm: &LlmClient,
    profile: &CandidateProfile,
    pref: &JobPreference,
) -> Vec<String> {
    let profile_json = serde_json::to_string(profile).unwrap_or_default();
    let pref_json = serde_json::to_string(pref).unwrap_or_default();
    let prompt = QUERY_PROMPT_TEMPLATE
        .replace("{profile}", &profile_json)
        .replace("{preference}", &pref_json);

    llm.call_json_or(&prompt, QUERY_SYSTEM, || fallback_queries(profile, pref))
        .await
}

/// Deterministic fallback: one query per target role, built from the role
/// name, the candidate's first four skills, and the location preference.
pub fn fallback_queries(profile: &CandidateProfile, pref: &JobPreference) -> Vec<String> {
    let roles = if pref.target_roles.is_empty() {
        vec![fallback_role(profile)]
    } else {
        pref.target_roles.clone()
    };

    let skills = profile
        .skills
        .iter()
        .take(MAX_QUERY_SKILLS)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    let location = pref.location.as_deref().unwrap_or("Remote");

    roles
        .iter()
        .map(|role| format!("{role} {skills} {location} hiring requirements"))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::{ChatModel, LlmError};
    use crate::recommend::profile::FALLBACK_ROLE;

    struct CannedModel(&'static str);

    #[async_trait]
    impl ChatModel for CannedModel {
        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    fn profile_with_skills(skills: &[&str]) -> CandidateProfile {
        CandidateProfile {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_fallback_uses_first_four_skills_only() {
        let profile = profile_with_skills(&["Go", "SQL", "Python", "Docker", "Kafka"]);
        let pref = JobPreference {
            target_roles: vec!["Backend Engineer".to_string()],
            location: Some("Remote".to_string()),
            constraints: vec![],
        };

        let queries = fallback_queries(&profile, &pref);
        assert_eq!(
            queries,
            vec!["Backend Engineer Go, SQL, Python, Docker Remote hiring requirements"]
        );
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let profile = profile_with_skills(&["Go", "SQL"]);
        let pref = JobPreference {
            target_roles: vec!["Backend Engineer".to_string(), "SRE".to_string()],
            location: Some("Berlin".to_string()),
            constraints: vec![],
        };

        assert_eq!(
            fallback_queries(&profile, &pref),
            fallback_queries(&profile, &pref)
        );
    }

    #[test]
    fn test_fallback_one_query_per_role() {
        let profile = profile_with_skills(&["Go"]);
        let pref = JobPreference {
            target_roles: vec!["Backend Engineer".to_string(), "SRE".to_string()],
            location: None,
            constraints: vec![],
        };

        let queries = fallback_queries(&profile, &pref);
        assert_eq!(queries.len(), 2);
        assert!(queries[0].starts_with("Backend Engineer"));
        assert!(queries[1].starts_with("SRE"));
    }

    #[test]
    fn test_fallback_defaults_location_to_remote() {
        let profile = profile_with_skills(&["Go"]);
        let pref = JobPreference {
            target_roles: vec!["Backend Engineer".to_string()],
            location: None,
            constraints: vec![],
        };

        let queries = fallback_queries(&profile, &pref);
        assert!(queries[0].contains(" Remote hiring requirements"));
    }

    #[test]
    fn test_fallback_without_roles_uses_placeholder_role() {
        let profile = profile_with_skills(&["Go"]);
        let pref = JobPreference::default();

        let queries = fallback_queries(&profile, &pref);
        assert_eq!(queries.len(), 1);
        assert!(queries[0].starts_with(FALLBACK_ROLE));
    }

    #[tokio::test]
    async fn test_generate_queries_uses_llm_output_when_valid() {
        let llm = LlmClient::with_backend(Arc::new(CannedModel(
            r#"["go backend berlin hiring", "kafka engineer remote"]"#,
        )));
        let queries =
            generate_queries(&llm, &CandidateProfile::default(), &JobPreference::default()).await;
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0], "go backend berlin hiring");
    }

    #[tokio::test]
    async fn test_generate_queries_falls_back_on_garbage() {
        let llm = LlmClient::with_backend(Arc::new(CannedModel("no json here")));
        let profile = profile_with_skills(&["Go"]);
        let pref = JobPreference {
            target_roles: vec!["Backend Engineer".to_string()],
            location: None,
            constraints: vec![],
        };

        let queries = generate_queries(&llm, &profile, &pref).await;
        assert_eq!(
            queries,
            vec!["Backend Engineer Go Remote hiring requirements"]
        );
    }
}
