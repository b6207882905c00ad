//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.
//! Field names on the wire are camelCase to match the frontend.

use serde::{Deserialize, Serialize};

use crate::models::{Status, VerificationRequest, VerificationResult};

use super::error::ApiErrorData;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
///
/// Success payload fields are flattened into the envelope, so a verify
/// response reads `{"success":true,"approved":...,"status":...}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success, flattened; absent fields are
    /// simply not emitted)
    #[serde(flatten)]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for `POST /api/verify`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    /// The post content containing the claim
    #[serde(default)]
    pub content: String,
    /// Link backing the claim
    #[serde(default)]
    pub proof_url: Option<String>,
    /// Image or video URL backing the claim
    #[serde(default)]
    pub proof_media: Option<String>,
    /// Free-text citation backing the claim
    #[serde(default)]
    pub proof_citation: Option<String>,
}

impl From<VerifyRequest> for VerificationRequest {
    fn from(req: VerifyRequest) -> Self {
        Self {
            content: req.content,
            proof_url: req.proof_url,
            proof_media: req.proof_media,
            proof_citation: req.proof_citation,
        }
    }
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Verify endpoint response data
#[derive(Debug, Serialize)]
pub struct VerifyData {
    /// Whether the post may go up
    pub approved: bool,
    /// Claim classification
    pub status: Status,
    /// Confidence score, 0-100
    pub score: u8,
    /// Short explanation
    pub reason: String,
}

impl From<VerificationResult> for VerifyData {
    fn from(result: VerificationResult) -> Self {
        Self {
            approved: result.approved,
            status: result.status,
            score: result.score,
            reason: result.reason,
        }
    }
}

/// Health endpoint response data
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthData {
    /// Service status, always "ok" when reachable
    pub status: &'static str,
    /// Application name
    pub app: &'static str,
    /// Gateway version
    pub version: &'static str,
}
