//! Verification model
//!
//! A verification is the pipeline's judgment on a single post: whether
//! it may go up, how the claim classifies, and how confident the model
//! was. Results are built fresh per request and never persisted.

use serde::Serialize;

/// A claim to verify, plus whatever proof the user attached
#[derive(Debug, Clone, Default)]
pub struct VerificationRequest {
    /// The post content containing the claim
    pub content: String,

    /// Link backing the claim
    pub proof_url: Option<String>,

    /// Image or video URL backing the claim
    pub proof_media: Option<String>,

    /// Free-text citation backing the claim
    pub proof_citation: Option<String>,
}

/// Classification of a claim as reported by the model
///
/// The wire form is the human-readable string (`"Likely True"`).
/// Anything the model returns outside this set is treated as
/// [`Status::Unverified`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Status {
    /// Verified as true
    True,
    /// Probably true, limited verification
    #[serde(rename = "Likely True")]
    LikelyTrue,
    /// Could not be verified either way
    #[default]
    Unverified,
    /// Technically grounded but deceptive
    Misleading,
    /// Verified as false
    False,
    /// Ineligible content (greeting, spam, no claim)
    Rejected,
}

impl Status {
    /// Parse a model-supplied status string, defaulting to `Unverified`
    /// for anything outside the fixed set
    #[must_use]
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        match raw {
            Some("True") => Self::True,
            Some("Likely True") => Self::LikelyTrue,
            Some("Misleading") => Self::Misleading,
            Some("False") => Self::False,
            Some("Rejected") => Self::Rejected,
            _ => Self::Unverified,
        }
    }

    /// Whether this status disqualifies a post regardless of score
    #[must_use]
    pub const fn is_rejecting(self) -> bool {
        matches!(self, Self::False | Self::Misleading | Self::Rejected)
    }

    /// The wire string for this status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::True => "True",
            Self::LikelyTrue => "Likely True",
            Self::Unverified => "Unverified",
            Self::Misleading => "Misleading",
            Self::False => "False",
            Self::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pipeline's judgment on a single post
#[derive(Debug, Clone, Serialize)]
pub struct VerificationResult {
    /// Whether the post may go up (derived locally, never the model's
    /// own `approved` flag)
    pub approved: bool,

    /// Claim classification
    pub status: Status,

    /// Confidence score, 0-100
    pub score: u8,

    /// Short explanation of the judgment
    pub reason: String,
}

impl VerificationResult {
    /// Fail-open result used whenever the model cannot be reached or
    /// its output cannot be interpreted: the post is allowed through
    #[must_use]
    pub fn unavailable(detail: &str) -> Self {
        Self {
            approved: true,
            status: Status::Unverified,
            score: 50,
            reason: format!("Verification unavailable ({detail}), post allowed."),
        }
    }
}
