//! Approval policy
//!
//! The model reports its own `approved` flag, but that flag is never
//! trusted: a model can answer `approved: true` next to a disqualifying
//! status or a rock-bottom score. Approval is therefore recomputed here
//! from the two validated fields alone.

use crate::models::Status;

/// Minimum score at which a non-rejected post is approved
pub const APPROVAL_THRESHOLD: u8 = 40;

/// Derive the final approval decision from validated status and score
///
/// A post is approved iff its status is not one of the rejecting
/// statuses (False, Misleading, Rejected) and its score clears the
/// threshold. Rejecting statuses disqualify at any score.
#[must_use]
pub const fn derive_approval(status: Status, score: u8) -> bool {
    !status.is_rejecting() && score >= APPROVAL_THRESHOLD
}
