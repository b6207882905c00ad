//! Model output extraction
//!
//! The model is asked for a bare JSON object but routinely wraps it in
//! markdown code fences anyway, so fences are stripped before parsing.
//! Every field is optional at this stage: a structurally valid object
//! with missing fields is usable (defaults apply downstream), while
//! text that is not a JSON object at all is a model-layer failure.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

/// The model's raw structured response, before validation
///
/// The `approved` field is parsed but deliberately never consulted:
/// approval is derived locally from status and score.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawModelOutput {
    /// The model's own opinion on approval (not authoritative)
    #[serde(default)]
    pub approved: Option<bool>,

    /// Claim classification string
    #[serde(default)]
    pub status: Option<String>,

    /// Confidence score, nominally 0-100
    #[serde(default)]
    pub score: Option<i64>,

    /// Short explanation
    #[serde(default)]
    pub reason: Option<String>,
}

fn fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"```json|```").expect("valid fence regex"))
}

/// Strip markdown code fences (with or without a `json` tag) from raw
/// model text
#[must_use]
pub fn strip_fences(raw: &str) -> String {
    fence_re().replace_all(raw, "").trim().to_string()
}

/// Parse raw model text into a [`RawModelOutput`]
///
/// Returns `None` when the text (after fence stripping) is not a JSON
/// object; callers treat that as a model failure and fail open.
#[must_use]
pub fn parse_model_output(raw: &str) -> Option<RawModelOutput> {
    serde_json::from_str(&strip_fences(raw)).ok()
}
