//! HTTP-agnostic API layer
//!
//! Typed request/response structures and pure business logic handlers
//! usable by any HTTP server implementation, or directly in tests.
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take typed input, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData};
pub use handlers::{health, verify_post};
pub use types::{ApiResponse, HealthData, VerifyData, VerifyRequest};
