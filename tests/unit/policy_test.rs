//! Tests for the approval policy
//!
//! The policy is a pure function of (status, score), so it gets the
//! exhaustive table treatment.

use optic::models::Status;
use optic::verify::policy::{APPROVAL_THRESHOLD, derive_approval};

#[test]
fn test_true_high_score_approved() {
    assert!(derive_approval(Status::True, 95));
}

#[test]
fn test_misleading_high_score_rejected() {
    // A rejecting status disqualifies even at maximum confidence
    assert!(!derive_approval(Status::Misleading, 95));
}

#[test]
fn test_unverified_at_threshold_approved() {
    assert!(derive_approval(Status::Unverified, 40));
}

#[test]
fn test_unverified_below_threshold_rejected() {
    assert!(!derive_approval(Status::Unverified, 39));
}

#[test]
fn test_rejected_status_never_approved() {
    for score in [0, 39, 40, 70, 100] {
        assert!(!derive_approval(Status::Rejected, score), "score {score}");
    }
}

#[test]
fn test_false_status_never_approved() {
    for score in [0, 50, 100] {
        assert!(!derive_approval(Status::False, score), "score {score}");
    }
}

#[test]
fn test_low_score_rejects_even_true_status() {
    assert!(!derive_approval(Status::True, 39));
    assert!(!derive_approval(Status::LikelyTrue, 0));
}

#[test]
fn test_non_rejecting_statuses_follow_threshold() {
    for status in [Status::True, Status::LikelyTrue, Status::Unverified] {
        assert!(derive_approval(status, APPROVAL_THRESHOLD), "{status} at threshold");
        assert!(!derive_approval(status, APPROVAL_THRESHOLD - 1), "{status} below threshold");
        assert!(derive_approval(status, 100), "{status} at 100");
    }
}

#[test]
fn test_rejecting_status_set() {
    assert!(Status::False.is_rejecting());
    assert!(Status::Misleading.is_rejecting());
    assert!(Status::Rejected.is_rejecting());
    assert!(!Status::True.is_rejecting());
    assert!(!Status::LikelyTrue.is_rejecting());
    assert!(!Status::Unverified.is_rejecting());
}
