//! Tests for the verification pipeline
//!
//! Exercises validation, decision derivation, defaulting, and the
//! fail-open fallback against a stub model client.

use std::sync::atomic::Ordering;

use optic::models::{Status, VerificationRequest};
use optic::verify::VerificationPipeline;

use super::common::{StubClient, pipeline_failing, pipeline_replying};

fn claim(content: &str) -> VerificationRequest {
    VerificationRequest {
        content: content.to_string(),
        ..VerificationRequest::default()
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
fn test_empty_content_fails_without_model_call() {
    let stub = StubClient::replying("{}");
    let calls = stub.call_counter();
    let pipeline = VerificationPipeline::new(Box::new(stub), 256);

    assert!(pipeline.evaluate(&claim("")).is_err());
    assert!(pipeline.evaluate(&claim("   \n\t ")).is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_validation_error_message() {
    let err = pipeline_failing().evaluate(&claim("")).unwrap_err();
    assert_eq!(err.to_string(), "No content provided.");
}

#[test]
fn test_non_empty_content_makes_exactly_one_call() {
    let stub = StubClient::replying(r#"{"status": "True", "score": 90}"#);
    let calls = stub.call_counter();
    let pipeline = VerificationPipeline::new(Box::new(stub), 256);

    pipeline.evaluate(&claim("The moon orbits the earth")).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// =============================================================================
// DECISION DERIVATION
// =============================================================================

#[test]
fn test_approval_ignores_model_approved_flag() {
    // Model says approved but the status disqualifies
    let reply = r#"{"approved": true, "status": "Misleading", "score": 95, "reason": "x"}"#;
    let result = pipeline_replying(reply).evaluate(&claim("claim")).unwrap();
    assert!(!result.approved);
    assert_eq!(result.status, Status::Misleading);
    assert_eq!(result.score, 95);
}

#[test]
fn test_approval_ignores_model_disapproval() {
    // Model says not approved but status and score both qualify
    let reply = r#"{"approved": false, "status": "True", "score": 92, "reason": "x"}"#;
    let result = pipeline_replying(reply).evaluate(&claim("claim")).unwrap();
    assert!(result.approved);
}

#[test]
fn test_low_score_rejects() {
    let reply = r#"{"status": "Unverified", "score": 39}"#;
    let result = pipeline_replying(reply).evaluate(&claim("claim")).unwrap();
    assert!(!result.approved);
}

#[test]
fn test_rejected_status_rejects_despite_high_score() {
    let reply = r#"{"status": "Rejected", "score": 88}"#;
    let result = pipeline_replying(reply).evaluate(&claim("gm")).unwrap();
    assert!(!result.approved);
}

// =============================================================================
// DEFAULTING AND CLAMPING
// =============================================================================

#[test]
fn test_missing_score_defaults_to_50() {
    let reply = r#"{"status": "Unverified", "reason": "No sources found."}"#;
    let result = pipeline_replying(reply).evaluate(&claim("claim")).unwrap();
    assert_eq!(result.score, 50);
    // 50 clears the threshold, so the post is allowed
    assert!(result.approved);
}

#[test]
fn test_missing_status_defaults_to_unverified() {
    let reply = r#"{"score": 75}"#;
    let result = pipeline_replying(reply).evaluate(&claim("claim")).unwrap();
    assert_eq!(result.status, Status::Unverified);
    assert!(result.approved);
}

#[test]
fn test_missing_reason_defaults_to_empty() {
    let reply = r#"{"status": "True", "score": 90}"#;
    let result = pipeline_replying(reply).evaluate(&claim("claim")).unwrap();
    assert_eq!(result.reason, "");
}

#[test]
fn test_unknown_status_maps_to_unverified() {
    let reply = r#"{"status": "Probably Fine", "score": 90}"#;
    let result = pipeline_replying(reply).evaluate(&claim("claim")).unwrap();
    assert_eq!(result.status, Status::Unverified);
}

#[test]
fn test_out_of_range_scores_are_clamped() {
    let high = pipeline_replying(r#"{"status": "True", "score": 150}"#)
        .evaluate(&claim("claim"))
        .unwrap();
    assert_eq!(high.score, 100);
    assert!(high.approved);

    let low = pipeline_replying(r#"{"status": "True", "score": -20}"#)
        .evaluate(&claim("claim"))
        .unwrap();
    assert_eq!(low.score, 0);
    assert!(!low.approved);
}

// =============================================================================
// FAIL-OPEN FALLBACK
// =============================================================================

#[test]
fn test_model_failure_fails_open() {
    let result = pipeline_failing().evaluate(&claim("claim")).unwrap();
    assert!(result.approved);
    assert_eq!(result.status, Status::Unverified);
    assert_eq!(result.score, 50);
    assert!(result.reason.contains("Verification unavailable"));
    assert!(result.reason.contains("post allowed"));
}

#[test]
fn test_unparsable_output_fails_open() {
    let result = pipeline_replying("Sorry, I can't help with that.")
        .evaluate(&claim("claim"))
        .unwrap();
    assert!(result.approved);
    assert_eq!(result.status, Status::Unverified);
    assert_eq!(result.score, 50);
    assert!(result.reason.contains("Verification unavailable"));
}

// =============================================================================
// FENCE HANDLING END TO END
// =============================================================================

#[test]
fn test_fenced_reply_matches_bare_reply() {
    let payload = r#"{"status": "Likely True", "score": 72, "reason": "Partial sources."}"#;
    let bare = pipeline_replying(payload).evaluate(&claim("claim")).unwrap();
    let fenced = pipeline_replying(&format!("```json\n{payload}\n```"))
        .evaluate(&claim("claim"))
        .unwrap();

    assert_eq!(bare.approved, fenced.approved);
    assert_eq!(bare.status, fenced.status);
    assert_eq!(bare.score, fenced.score);
    assert_eq!(bare.reason, fenced.reason);
    assert_eq!(fenced.status, Status::LikelyTrue);
}
