//! Ranker/Formatter — sorts accepted postings, truncates to top-K, and
//! renders the JSON and Markdown-table views.

use std::fmt::Write;

use crate::models::posting::JobPosting;

/// Stable-sorts by fit score descending (missing score ranks as 0.0) and
/// truncates to `top_k`. Ties keep their discovery order.
pub fn rank_postings(mut postings: Vec<JobPosting>, top_k: usize) -> Vec<JobPosting> {
    postings.sort_by(|a, b| {
        let (sa, sb) = (a.fit_score.unwrap_or(0.0), b.fit_score.unwrap_or(0.0));
        sb.partial_cmp(&sa).unwrap_or(std::cmp::Ordering::Equal)
    });
    postings.truncate(top_k);
    postings
}

/// Pretty-printed JSON dump of the recommendation list.
pub fn render_json(postings: &[JobPosting]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(postings)
}

/// Fixed five-column Markdown table of the recommendation list.
pub fn render_table(postings: &[JobPosting], top_k: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Recommended roles (Top-{top_k} by fit)");
    out.push('\n');
    out.push_str("| Role | Company | Location | Fit | Link |\n");
    out.push_str("|---|---|---|---|---|\n");
    for posting in postings {
        out.push_str(&table_row(posting));
        out.push('\n');
    }
    out
}

/// One table row. The pipe character would break the column delimiter, so it
/// becomes a slash in the title and company fields only.
fn table_row(posting: &JobPosting) -> String {
    let title = posting.title.replace('|', "/");
    let company = posting.company.as_deref().unwrap_or("").replace('|', "/");
    let location = posting.location.as_deref().unwrap_or("");
    let score = posting
        .fit_score
        .map(|s| format!("{s:.2}"))
        .unwrap_or_else(|| "-".to_string());
    let url = posting.url.as_deref().unwrap_or("");
    format!("| {title} | {company} | {location} | {score} | {url} |")
}
