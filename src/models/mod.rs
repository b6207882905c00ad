//! Domain models for the verification gateway

mod verification;

pub use verification::{Status, VerificationRequest, VerificationResult};
