//! Candidate-side data models: the structured profile extracted from the
//! résumé and the job preferences driving query generation.

use serde::{Deserialize, Serialize};

/// Structured candidate profile, extracted once per run by the LLM.
///
/// Every field is defaultable: the extraction prompt tells the model to leave
/// unknown fields null or empty, and partial output must still deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub name: Option<String>,
    pub years_exp: Option<u32>,
    pub current_title: Option<String>,
    pub education: Option<String>,
    pub skills: Vec<String>,
    pub domains: Vec<String>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub preferences: Vec<String>,
}

/// What the candidate is looking for. `target_roles` is inferred by the
/// preference resolver when not supplied; `location` may encode a free-text
/// disjunction such as "Shanghai OR Remote".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPreference {
    pub target_roles: Vec<String>,
    pub location: Option<String>,
    pub constraints: Vec<String>,
}
