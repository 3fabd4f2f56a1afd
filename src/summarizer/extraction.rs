//! Extraction prompt and reply parsing
//!
//! The reply path is a tagged variant: either the model returned the
//! requested JSON shape, or it returned prose that gets wrapped into a
//! heuristic fallback record. The pipeline never fails just because the
//! reply was not clean JSON.

use crate::record::VacancyRecord;

/// Maximum number of page characters interpolated into the prompt
const MAX_CONTENT_CHARS: usize = 4000;

/// Marker stored in `notes` when structured parsing fails
pub const FALLBACK_NOTE: &str = "Could not parse structured data";

/// Build the fixed extraction prompt around a page-content prefix
pub fn build_prompt(content: &str) -> String {
    format!(
        r#"Analyze the following room vacancy webpage content and extract key information.

Please provide:
1. A summary of available rooms (room numbers, types, prices if available)
2. Total number of vacancies
3. Any important details (move-in dates, requirements, etc.)
4. Whether rooms appear to be available or not

Format your response as JSON with this structure:
{{
    "has_vacancies": true/false,
    "vacancy_count": number,
    "summary": "brief summary text",
    "rooms": [
        {{"room": "room identifier", "details": "details"}},
        ...
    ],
    "notes": "any additional important information"
}}

Webpage content:
{}
"#,
        truncate_chars(content, MAX_CONTENT_CHARS)
    )
}

/// Outcome of parsing a model reply
#[derive(Debug, Clone)]
pub enum Extraction {
    /// The reply was the requested JSON shape
    Structured(VacancyRecord),

    /// The reply was prose; kept verbatim for the fallback record
    Unstructured(String),
}

impl Extraction {
    /// Collapse into a single record shape
    pub fn into_record(self) -> VacancyRecord {
        match self {
            Extraction::Structured(record) => record,
            Extraction::Unstructured(reply) => {
                let lowered = reply.to_lowercase();
                VacancyRecord {
                    has_vacancies: lowered.contains("available") || lowered.contains("vacancy"),
                    vacancy_count: 0,
                    summary: reply,
                    rooms: Vec::new(),
                    notes: FALLBACK_NOTE.to_string(),
                    last_check: None,
                }
            }
        }
    }
}

/// Parse a model reply into structured or fallback form
///
/// Models habitually wrap JSON in Markdown code fences, so a fenced reply
/// is unwrapped before the parse attempt.
pub fn parse_reply(reply: &str) -> Extraction {
    match serde_json::from_str::<VacancyRecord>(strip_code_fence(reply)) {
        Ok(record) => Extraction::Structured(record),
        Err(_) => Extraction::Unstructured(reply.to_string()),
    }
}

/// Truncate to a character count without splitting a UTF-8 boundary
fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Unwrap a ```json ... ``` fence if the whole reply is one fenced block
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the language tag on the opening fence line, if any
    match rest.split_once('\n') {
        Some((_, body)) => body.trim(),
        None => rest.trim(),
    }
}
