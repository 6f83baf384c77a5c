//! Job-side data models: raw search hits and the structured postings the
//! summarizer distills from them.

use serde::{Deserialize, Serialize};

/// A raw search-engine result, not yet validated as a job posting.
/// Ephemeral: produced by the search client, consumed by dedup and the
/// summarizer, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    /// Page snippet, capped at `search::SNIPPET_MAX_CHARS`.
    pub content: String,
}

/// A structured job posting distilled from a hit.
///
/// `title` is a required field: the summarizer signals "not a genuine
/// posting" with an empty JSON object, which fails to deserialize here and
/// drops the hit. `fit_score` is attached once by the scorer after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub fit_score: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posting_deserializes_from_title_only() {
        let posting: JobPosting = serde_json::from_str(r#"{"title": "Backend Engineer"}"#).unwrap();
        assert_eq!(posting.title, "Backend Engineer");
        assert!(posting.company.is_none());
        assert!(posting.requirements.is_empty());
        assert!(posting.fit_score.is_none());
    }

    #[test]
    fn test_empty_object_fails_to_deserialize() {
        assert!(serde_json::from_str::<JobPosting>("{}").is_err());
    }

    #[test]
    fn test_posting_full_deserializes_correctly() {
        let json = r#"{
            "title": "Senior Backend Engineer",
            "company": "Acme",
            "location": "Remote",
            "url": "https://example.com/jobs/1",
            "summary": "Own the core payments pipeline.",
            "requirements": ["5+ years Go", "Kafka"],
            "keywords": ["go", "kafka", "payments"]
        }"#;

        let posting: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(posting.company.as_deref(), Some("Acme"));
        assert_eq!(posting.requirements.len(), 2);
        assert!(posting.fit_score.is_none());
    }
}
