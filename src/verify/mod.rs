//! Claim-verification pipeline
//!
//! Turns a [`VerificationRequest`] into a [`VerificationResult`] by
//! prompting the language model, parsing its untrusted output, and
//! deriving the approval decision locally.
//!
//! The pipeline is fail-open: any failure reaching or interpreting the
//! model produces an approved/Unverified result instead of an error.
//! Only empty content is a hard error, raised before the model is
//! called.

pub mod parse;
pub mod policy;
pub mod prompt;

use log::{debug, warn};
use thiserror::Error;

use crate::llm::LanguageModelClient;
use crate::models::{Status, VerificationRequest, VerificationResult};

/// Score assumed when the model omits one
const DEFAULT_SCORE: i64 = 50;

/// Errors the pipeline surfaces to its caller
///
/// Model-side failures are absorbed by the fail-open fallback and never
/// appear here.
#[derive(Debug, Clone, Copy, Error)]
pub enum ValidationError {
    /// Content was empty or whitespace-only
    #[error("No content provided.")]
    EmptyContent,
}

/// The verification pipeline
///
/// Holds the model client and the output-size cap; no per-request state,
/// so a single instance is shared across concurrent requests.
pub struct VerificationPipeline {
    client: Box<dyn LanguageModelClient>,
    max_tokens: u32,
}

impl std::fmt::Debug for VerificationPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationPipeline")
            .field("max_tokens", &self.max_tokens)
            .finish_non_exhaustive()
    }
}

impl VerificationPipeline {
    /// Create a pipeline around a model client
    #[must_use]
    pub const fn new(client: Box<dyn LanguageModelClient>, max_tokens: u32) -> Self {
        Self { client, max_tokens }
    }

    /// Evaluate a claim and decide whether the post may go up
    ///
    /// Exactly one model call is made, with no retry. Every model-side
    /// failure branch resolves to [`VerificationResult::unavailable`],
    /// so callers always get a result for non-empty content.
    pub fn evaluate(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationResult, ValidationError> {
        let content = request.content.trim();
        if content.is_empty() {
            return Err(ValidationError::EmptyContent);
        }

        let context = prompt::proof_context(request);
        let eval_prompt = prompt::build_prompt(content, &context);

        let raw = match self.client.complete(&eval_prompt, self.max_tokens) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("model call failed, allowing post through: {err}");
                return Ok(VerificationResult::unavailable(&err.to_string()));
            },
        };

        let Some(output) = parse::parse_model_output(&raw) else {
            warn!("model returned unparsable output, allowing post through");
            return Ok(VerificationResult::unavailable("unparsable model output"));
        };

        let status = Status::parse_lenient(output.status.as_deref());
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let score = output.score.unwrap_or(DEFAULT_SCORE).clamp(0, 100) as u8;
        let approved = policy::derive_approval(status, score);

        if output.approved == Some(!approved) {
            debug!("model approval ({:?}) overridden by policy ({approved})", output.approved);
        }

        Ok(VerificationResult {
            approved,
            status,
            score,
            reason: output.reason.unwrap_or_default(),
        })
    }
}
