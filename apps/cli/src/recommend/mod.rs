//! Recommendation pipeline — orchestrates the full run.
//!
//! Flow: extract_profile → resolve_target_roles → generate_queries →
//!       search_jobs → dedup_hits → summarize_hit per hit → score_fit per
//!       posting → rank.
//!
//! Every external call is sequential: one LLM or search round trip at a
//! time, no fan-out. All LLM calls go through llm_client.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::posting::JobPosting;
use crate::models::profile::JobPreference;
use crate::report::rank_postings;
use crate::search::dedup::dedup_hits;
use crate::search::{SearchClient, MAX_RESULTS_PER_QUERY};

pub mod profile;
pub mod prompts;
pub mod queries;
pub mod scoring;
pub mod summarize;

use profile::{extract_profile, resolve_target_roles};
use queries::generate_queries;
use scoring::score_fit;
use summarize::summarize_hit;

/// Runs the full pipeline over extracted résumé text and returns the ranked,
/// truncated recommendation list.
///
/// Steps:
/// 1. extract_profile() — fatal on failure
/// 2. resolve_target_roles() when none given — fallback on failure
/// 3. generate_queries() — deterministic fallback on failure
/// 4. search_jobs() + dedup_hits()
/// 5. summarize_hit() per hit — drops non-postings
/// 6. score_fit() per posting — defaults to 0.0 on failure
/// 7. rank_postings() — stable sort descending, truncate to top_k
pub async fn recommend(
    llm: &LlmClient,
    search: &SearchClient,
    cv_text: &str,
    mut pref: JobPreference,
    top_k: usize,
) -> Result<Vec<JobPosting>, AppError> {
    // Step 1: Profile
    let candidate = extract_profile(llm, cv_text).await?;
    info!(
        "Profile extracted: title={:?}, {} skills",
        candidate.current_title,
        candidate.skills.len()
    );

    // Step 2: Preferences — infer target roles only when none were supplied
    if pref.target_roles.is_empty() {
        pref.target_roles = resolve_target_roles(llm, &candidate).await;
    }
    info!("Target roles: {:?}", pref.target_roles);

    // Step 3: Queries
    let search_queries = generate_queries(llm, &candidate, &pref).await;
    info!("Generated {} search queries", search_queries.len());

    // Step 4: Search + dedup
    let hits = search
        .search_jobs(&search_queries, MAX_RESULTS_PER_QUERY)
        .await;
    let unique_hits = dedup_hits(hits);
    info!("{} unique hits after deduplication", unique_hits.len());

    // Steps 5-6: Summarize and score, one hit at a time
    let mut postings = Vec::new();
    for hit in &unique_hits {
        let Some(mut posting) = summarize_hit(llm, &candidate, hit).await else {
            continue;
        };
        posting.fit_score = Some(score_fit(llm, &candidate, &posting).await);
        postings.push(posting);
    }
    info!("{} postings accepted", postings.len());

    if postings.is_empty() {
        warn!("no postings survived the pipeline; recommendation list is empty");
    }

    // Step 7: Rank and truncate
    Ok(rank_postings(postings, top_k))
}
