// All LLM prompt constants for the recommendation pipeline.
// Every structured stage repeats the same JSON-only system block; the fit
// scorer is the one stage that asks for a bare number instead.

/// System prompt for profile extraction — enforces JSON-only output.
pub const PROFILE_SYSTEM: &str =
    "You are a senior career coach who distills structured candidate profiles \
    from resumes in any language. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Profile extraction prompt template. Replace `{cv_text}` before sending.
pub const PROFILE_PROMPT_TEMPLATE: &str = r#"Extract the candidate's standard profile from the resume text below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "name": "Jane Doe",
  "years_exp": 5,
  "current_title": "Senior Backend Engineer",
  "education": "BSc Computer Science, ETH Zurich",
  "skills": ["Go", "Python", "Kafka"],
  "domains": ["fintech", "payments"],
  "certifications": ["AWS Solutions Architect"],
  "languages": ["English", "Mandarin"],
  "preferences": ["remote", "occasional travel"]
}

Field notes:
- "years_exp" is total professional experience in whole years.
- "domains" are industries or problem areas, not technologies.
- "preferences" capture working-style signals (remote, travel, company size).

Leave a field null (or an empty list) when the resume does not mention it.
Do not invent values.

RESUME TEXT:
{cv_text}"#;

/// System prompt for target-role inference.
pub const TARGET_ROLES_SYSTEM: &str =
    "You are a career advisor suggesting realistic next roles for a candidate. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Target-role inference prompt template. Replace `{profile}` before sending.
pub const TARGET_ROLES_PROMPT_TEMPLATE: &str = r#"Candidate profile:
{profile}

Suggest 3-5 job titles this candidate is well suited to target next, based on
their current title, skills, and domains.

Return a JSON array of strings, for example:
["Senior Backend Engineer", "Platform Engineer", "Staff Software Engineer"]"#;

/// System prompt for search-query generation.
pub const QUERY_SYSTEM: &str =
    "You are a recruitment search expert crafting web search queries that \
    surface recent job postings. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Query generation prompt template.
/// Replace `{profile}` and `{preference}` before sending.
pub const QUERY_PROMPT_TEMPLATE: &str = r#"Candidate profile:
{profile}

Job preferences:
{preference}

Generate 3-6 high-quality search queries targeting recent job postings for
this candidate. Each query should combine a role, must-have skills, an
industry or domain, and a location or remote keyword. Avoid queries so broad
they would match any job board front page.

Return a JSON array of strings, one query per element."#;

/// System prompt for posting summarization — enforces JSON-only output.
pub const SUMMARIZE_SYSTEM: &str =
    "You are an HR consultant who extracts the essentials of a job posting \
    from a web page snippet. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Posting summarization prompt template.
/// Replace `{profile}` and `{snippet}` before sending.
pub const SUMMARIZE_PROMPT_TEMPLATE: &str = r#"Candidate profile:
{profile}

Web page snippet:
{snippet}

If the snippet describes a genuine job posting, extract it as a JSON object
with this EXACT schema (no extra fields):
{
  "title": "Senior Backend Engineer",
  "company": "Acme Corp",
  "location": "Berlin or Remote",
  "url": "https://example.com/jobs/123",
  "summary": "One or two sentences on what the role is about.",
  "requirements": ["5+ years Go", "Kafka in production"],
  "keywords": ["go", "kafka", "microservices"]
}

If the snippet is NOT a job posting, or the information is too thin to fill
the fields meaningfully, return an empty JSON object: {}"#;

/// System prompt for fit scoring — bare decimal output, no JSON.
pub const SCORE_SYSTEM: &str =
    "You are a candidate-to-job match evaluator. \
    You MUST respond with a single decimal number between 0 and 1, rounded to \
    two decimal places. Do NOT include any other text.";

/// Fit scoring prompt template.
/// Replace `{profile}` and `{posting}` before sending.
pub const SCORE_PROMPT_TEMPLATE: &str = r#"Candidate profile:
{profile}

Job posting:
{posting}

Rate how well this candidate matches this posting, weighing skills, years of
experience, domains, and stated preferences. Return only the number."#;
