//! Shared building blocks for the NetworkCloud control client.
//!
//! ## Architecture
//!
//! - **common** (this crate): error location tracking, HTTP status
//!   classification and secret handling shared by every layer
//! - **models**: wire data exchanged with the background service
//! - **control-core**: token/group stores and the control channel
//! - **networkcloud**: command-line presentation layer

pub mod error;
pub mod http_status;
pub mod redacted_token;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_token::RedactedToken;

#[cfg(test)]
mod tests;
