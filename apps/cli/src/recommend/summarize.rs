//! Posting Summarizer — distills one search hit into a structured posting,
//! or drops it.

use tracing::debug;

use crate::llm_client::LlmClient;
use crate::models::posting::{JobPosting, SearchHit};
use crate::models::profile::CandidateProfile;
use crate::recommend::prompts::{SUMMARIZE_PROMPT_TEMPLATE, SUMMARIZE_SYSTEM};

/// Summarizes a single hit into a `JobPosting`.
///
/// Returns `None` when the model signals "not a posting" (an empty object,
/// which fails to deserialize against the required `title`), when the output
/// is unparseable, or when the call itself fails — a dropped hit is never an
/// error. A missing or empty URL in the model output is backfilled from the
/// hit.
pub async fn summarize_hit(
    llm: &LlmClient,
    profile: &CandidateProfile,
    hit: &SearchHit,
) -> Option<JobPosting> {
    let profile_json = serde_json::to_string(profile).unwrap_or_default();
    let snippet = format!(
        "Title: {}\nURL: {}\nContent:\n{}",
        hit.title, hit.url, hit.content
    );
    let prompt = SUMMARIZE_PROMPT_TEMPLATE
        .replace("{profile}", &profile_json)
        .replace("{snippet}", &snippet);

    match llm.call_json::<JobPosting>(&prompt, SUMMARIZE_SYSTEM).await {
        Ok(mut posting) => {
            if posting.title.trim().is_empty() {
                debug!("hit {} dropped: summarizer returned empty title", hit.url);
                return None;
            }
            if posting.url.as_deref().map_or(true, str::is_empty) {
                posting.url = Some(hit.url.clone());
            }
            Some(posting)
        }
        Err(e) => {
            debug!("hit {} dropped: {e}", hit.url);
            None
        }
    }
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

    fn hit(url: &str) -> SearchHit {
        SearchHit {
            title: "Some page".to_string(),
            url: url.to_string(),
            content: "snippet".to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_object_drops_hit() {
        let llm = LlmClient::with_backend(Arc::new(CannedModel("{}")));
        let posting =
            summarize_hit(&llm, &CandidateProfile::default(), &hit("https://a.example")).await;
        assert!(posting.is_none());
    }

    #[tokio::test]
    async fn test_unparseable_output_drops_hit() {
        let llm = LlmClient::with_backend(Arc::new(CannedModel("sorry, I cannot")));
        let posting =
            summarize_hit(&llm, &CandidateProfile::default(), &hit("https://a.example")).await;
        assert!(posting.is_none());
    }

    #[tokio::test]
    async fn test_empty_title_drops_hit() {
        let llm = LlmClient::with_backend(Arc::new(CannedModel(r#"{"title": "  "}"#)));
        let posting =
            summarize_hit(&llm, &CandidateProfile::default(), &hit("https://a.example")).await;
        assert!(posting.is_none());
    }

    #[tokio::test]
    async fn test_missing_url_is_backfilled_from_hit() {
        let llm = LlmClient::with_backend(Arc::new(CannedModel(
            r#"{"title": "Backend Engineer", "company": "Acme"}"#,
        )));
        let posting =
            summarize_hit(&llm, &CandidateProfile::default(), &hit("https://a.example"))
                .await
                .unwrap();
        assert_eq!(posting.url.as_deref(), Some("https://a.example"));
    }

    #[tokio::test]
    async fn test_model_url_is_kept_when_present() {
        let llm = LlmClient::with_backend(Arc::new(CannedModel(
            r#"{"title": "Backend Engineer", "url": "https://jobs.example/1"}"#,
        )));
        let posting =
            summarize_hit(&llm, &CandidateProfile::default(), &hit("https://a.example"))
                .await
                .unwrap();
        assert_eq!(posting.url.as_deref(), Some("https://jobs.example/1"));
    }
}
