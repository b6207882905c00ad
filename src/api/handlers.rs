//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`.

use crate::models::VerificationRequest;
use crate::verify::VerificationPipeline;

use super::error::ApiError;
use super::types::{HealthData, VerifyData, VerifyRequest};

/// Health check
#[must_use]
pub const fn health() -> HealthData {
    HealthData {
        status: "ok",
        app: "Optic",
        version: crate::VERSION,
    }
}

/// Verify a claim before posting
///
/// The only error path is empty content; model-side failures resolve
/// inside the pipeline to a fail-open result.
pub fn verify_post(
    pipeline: &VerificationPipeline,
    req: VerifyRequest,
) -> Result<VerifyData, ApiError> {
    let request = VerificationRequest::from(req);
    let result = pipeline.evaluate(&request)?;
    Ok(VerifyData::from(result))
}
