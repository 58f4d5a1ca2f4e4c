use std::{fmt::Display, time::Duration};

use bon::Builder;
use http::Method;
use serde::{Deserialize, Serialize};

pub const PRODUCTION_HOST: &str = "https://buy.itunes.apple.com";
pub const SANDBOX_HOST: &str = "https://sandbox.itunes.apple.com";
pub const VERIFY_RECEIPT_PATH: &str = "/verifyReceipt";

/// The App Store environment a receipt is verified against.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

impl Environment {
    /// Environment to retry in when a receipt is redirected away from `self`.
    ///
    /// Only production falls back; a redirect received in the sandbox is final.
    pub fn fallback(self) -> Option<Environment> {
        match self {
            Environment::Production => Some(Environment::Sandbox),
            Environment::Sandbox => None,
        }
    }

    pub fn default_host(self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_HOST,
            Environment::Sandbox => SANDBOX_HOST,
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Sandbox => write!(f, "sandbox"),
        }
    }
}

/// Verifier configuration.
#[derive(Builder, Debug, Clone)]
pub struct VerifierConfig {
    /// App-specific shared secret sent as the `password` field.
    #[builder(into)]
    pub shared_secret: String,
    /// Environment every verification starts in.
    #[builder(default)]
    pub environment: Environment,
    /// Base URL of the production endpoint.
    #[builder(into, default = PRODUCTION_HOST.to_string())]
    pub production_host: String,
    /// Base URL of the sandbox endpoint.
    #[builder(into, default = SANDBOX_HOST.to_string())]
    pub sandbox_host: String,
    /// Path of the verification endpoint on either host.
    #[builder(into, default = VERIFY_RECEIPT_PATH.to_string())]
    pub path: String,
    /// HTTP method used for verification.
    #[builder(default = Method::POST)]
    pub method: Method,
    /// Optional per-request deadline.
    pub timeout: Option<Duration>,
}

impl VerifierConfig {
    /// Production defaults for the given shared secret.
    pub fn production(shared_secret: impl Into<String>) -> Self {
        VerifierConfig::builder()
            .shared_secret(shared_secret)
            .build()
    }

    /// Same defaults, but verification starts in the sandbox.
    pub fn sandbox(shared_secret: impl Into<String>) -> Self {
        VerifierConfig::builder()
            .shared_secret(shared_secret)
            .environment(Environment::Sandbox)
            .build()
    }

    /// Configured base URL for an environment.
    pub fn host(&self, environment: Environment) -> &str {
        match environment {
            Environment::Production => &self.production_host,
            Environment::Sandbox => &self.sandbox_host,
        }
    }
}
