//! Profile Builder and Preference Resolver — the two profile-shaped LLM
//! stages at the head of the pipeline.

use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::profile::CandidateProfile;
use crate::recommend::prompts::{
    PROFILE_PROMPT_TEMPLATE, PROFILE_SYSTEM, TARGET_ROLES_PROMPT_TEMPLATE, TARGET_ROLES_SYSTEM,
};

/// Placeholder role when the résumé yields neither roles nor a title.
pub const FALLBACK_ROLE: &str = "Software Engineer";
const MAX_TARGET_ROLES: usize = 5;

/// Extracts the structured candidate profile from raw résumé text.
///
/// This is the one LLM stage with no fallback: a call or parse failure
/// aborts the run, since nothing downstream can work without a profile.
pub async fn extract_profile(
    llm: &LlmClient,
    cv_text: &str,
) -> Result<CandidateProfile, AppError> {
    let prompt = PROFILE_PROMPT_TEMPLATE.replace("{cv_text}", cv_text);
    llm.call_json(&prompt, PROFILE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("profile extraction failed: {e}")))
}

/// Infers 3-5 target roles from the profile, truncated to five.
///
/// Fallback: a singleton list built from the profile's current title, or the
/// generic placeholder when that is also absent.
pub async fn resolve_target_roles(llm: &LlmClient, profile: &CandidateProfile) -> Vec<String> {
    let profile_json = serde_json::to_string(profile).unwrap_or_default();
    let prompt = TARGET_ROLES_PROMPT_TEMPLATE.replace("{profile}", &profile_json);

    let mut roles: Vec<String> = llm
        .call_json_or(&prompt, TARGET_ROLES_SYSTEM, || {
            vec![fallback_role(profile)]
        })
        .await;
    roles.truncate(MAX_TARGET_ROLES);

    if roles.is_empty() {
        // The model returned a valid but empty array. Downstream this means
        // zero queries and an empty recommendation list, so flag it.
        warn!("target-role inference returned an empty list");
    }

    roles
}

pub fn fallback_role(profile: &CandidateProfile) -> String {
    profile
        .current_title
        .clone()
        .unwrap_or_else(|| FALLBACK_ROLE.to_string())
}
