use thiserror::Error;

/// Application-level error type for the fatal pipeline paths.
///
/// Only two stages may abort a run: reading the input PDF and extracting the
/// candidate profile. Every per-item stage (search queries, hits, postings,
/// scoring) recovers locally instead of surfacing an error here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("LLM error: {0}")]
    Llm(String),
}
