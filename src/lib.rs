//! App Store receipt verification.
//!
//! Receipts are posted to Apple's `verifyReceipt` endpoint and the returned
//! status code is mapped to an [`outcome::Outcome`]. A sandbox receipt sent to
//! production is transparently retried once against the sandbox.

pub mod config;
pub mod errors;
pub mod outcome;
pub mod status;
pub mod transport;
pub mod verifier;

#[cfg(feature = "http-client")]
pub mod http_transport;

pub use config::{Environment, VerifierConfig};
pub use errors::{Error, Result};
pub use outcome::Outcome;
pub use verifier::Verifier;

/// Untyped JSON document, used for receipt payloads.
pub type AnyJson = serde_json::Value;
