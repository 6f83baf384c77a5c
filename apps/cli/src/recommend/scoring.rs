//! Fit Scorer — asks the LLM for a bare decimal in [0,1] per posting.

use tracing::warn;

use crate::llm_client::LlmClient;
use crate::models::posting::JobPosting;
use crate::models::profile::CandidateProfile;
use crate::recommend::prompts::{SCORE_PROMPT_TEMPLATE, SCORE_SYSTEM};

/// Scores candidate-to-posting fit. Call and parse failures both default to
/// 0.0 — a low-ranked but present score, never a dropped posting.
pub async fn score_fit(llm: &LlmClient, profile: &CandidateProfile, posting: &JobPosting) -> f32 {
    let profile_json = serde_json::to_string(profile).unwrap_or_default();
    let posting_json = serde_json::to_string(posting).unwrap_or_default();
    let prompt = SCORE_PROMPT_TEMPLATE
        .replace("{profile}", &profile_json)
        .replace("{posting}", &posting_json);

    match llm.call(&prompt, SCORE_SYSTEM).await {
        Ok(text) => parse_score(&text),
        Err(e) => {
            warn!(
                "fit scoring failed for '{}', defaulting to 0.0: {e}",
                posting.title
            );
            0.0
        }
    }
}

/// Parses the model's output as a decimal, clamped into [0,1].
/// Anything unparseable scores 0.0.
pub fn parse_score(text: &str) -> f32 {
    text.trim()
        .parse::<f32>()
        .map(|score| score.clamp(0.0, 1.0))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::{ChatModel, LlmError};

    struct CannedModel(&'static str);

    #[async_trait]
    impl ChatModel for CannedModel {
        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingModel;

    #[async_trait]
    impl ChatModel for FailingModel {
        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    fn posting() -> JobPosting {
        serde_json::from_str(r#"{"title": "Backend Engineer"}"#).unwrap()
    }

    #[test]
    fn test_parse_score_valid_decimal() {
        assert_eq!(parse_score("0.82"), 0.82);
    }

    #[test]
    fn test_parse_score_tolerates_whitespace() {
        assert_eq!(parse_score("  0.5\n"), 0.5);
    }

    #[test]
    fn test_parse_score_garbage_defaults_to_zero() {
        assert_eq!(parse_score("a strong match"), 0.0);
    }

    #[test]
    fn test_parse_score_clamps_out_of_range() {
        assert_eq!(parse_score("1.7"), 1.0);
        assert_eq!(parse_score("-0.3"), 0.0);
    }

    #[tokio::test]
    async fn test_score_fit_parses_model_output() {
        let llm = LlmClient::with_backend(Arc::new(CannedModel("0.82")));
        let score = score_fit(&llm, &CandidateProfile::default(), &posting()).await;
        assert_eq!(score, 0.82);
    }

    #[tokio::test]
    async fn test_score_fit_defaults_to_zero_on_call_error() {
        let llm = LlmClient::with_backend(Arc::new(FailingModel));
        let score = score_fit(&llm, &CandidateProfile::default(), &posting()).await;
        assert_eq!(score, 0.0);
    }
}
