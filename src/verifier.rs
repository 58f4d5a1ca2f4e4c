//! Receipt verification with sandbox fallback.
//!
//! App review signs in-app purchases with sandbox receipts but the shipping app
//! sends them to production, which answers with [`REDIRECT_STATUS`]. A verifier
//! starting in production then retries once against the sandbox and returns
//! that second answer, whatever it is.
//!
//! [`REDIRECT_STATUS`]: crate::status::REDIRECT_STATUS

use crate::{
    config::{Environment, VerifierConfig},
    errors::Result,
    outcome::Outcome,
    transport::{Endpoint, ReceiptTransport, VerifyReceiptRequest},
};

#[cfg(feature = "http-client")]
use crate::{errors::Error, http_transport::HttpTransport};

/// Verifies receipts against the App Store.
///
/// Holds no per-call state, so one verifier can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct Verifier<T: ReceiptTransport> {
    environment: Environment,
    production: Endpoint,
    sandbox: Endpoint,
    shared_secret: String,
    transport: T,
}

#[cfg(feature = "http-client")]
impl Verifier<HttpTransport> {
    /// Production verifier with default endpoints.
    pub fn new(shared_secret: impl Into<String>) -> Result<Self> {
        Verifier::from_config(VerifierConfig::production(shared_secret))
    }

    /// Builds a verifier backed by a fresh `reqwest` client.
    pub fn from_config(config: VerifierConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(Error::HttpClientError)?;
        let transport = HttpTransport::new(client)
            .method(config.method.clone())
            .timeout(config.timeout);

        Verifier::with_transport(config, transport)
    }
}

impl<T: ReceiptTransport> Verifier<T> {
    /// Builds a verifier over any transport.
    ///
    /// Only the endpoints, shared secret and start environment are taken from
    /// `config`. `method` and `timeout` are transport settings: they are applied
    /// by [`Verifier::from_config`] and must be set on `transport` directly here.
    ///
    /// Fails if either host or the path do not form a valid URL.
    pub fn with_transport(config: VerifierConfig, transport: T) -> Result<Self> {
        let production = Endpoint::resolve(
            Environment::Production,
            config.host(Environment::Production),
            &config.path,
        )?;
        let sandbox = Endpoint::resolve(
            Environment::Sandbox,
            config.host(Environment::Sandbox),
            &config.path,
        )?;

        Ok(Verifier {
            environment: config.environment,
            production,
            sandbox,
            shared_secret: config.shared_secret,
            transport,
        })
    }

    /// Environment every call starts in.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn endpoint(&self, environment: Environment) -> &Endpoint {
        match environment {
            Environment::Production => &self.production,
            Environment::Sandbox => &self.sandbox,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Verifies a receipt.
    ///
    /// `receipt` is base64 encoded first unless `is_base64_encoded` is set.
    /// Transport failures are returned as-is and never retried; only a redirect
    /// status received in production triggers the single sandbox attempt.
    pub async fn verify_receipt(
        &self,
        receipt: &str,
        is_base64_encoded: bool,
    ) -> Result<Outcome> {
        let request =
            VerifyReceiptRequest::encode(receipt, is_base64_encoded, &self.shared_secret);

        let outcome = self.attempt(self.environment, &request).await?;

        if outcome.is_redirect {
            if let Some(fallback) = self.environment.fallback() {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    "Receipt redirected (status={}), retrying in {} environment",
                    outcome.status_code,
                    fallback
                );

                return self.attempt(fallback, &request).await;
            }
        }

        Ok(outcome)
    }

    async fn attempt(
        &self,
        environment: Environment,
        request: &VerifyReceiptRequest,
    ) -> Result<Outcome> {
        let endpoint = self.endpoint(environment);

        #[cfg(feature = "tracing")]
        tracing::debug!("Verifying receipt at {} ({})", endpoint.url, environment);

        let response = self
            .transport
            .send(endpoint, request)
            .await
            .inspect_err(|_err| {
                #[cfg(feature = "tracing")]
                tracing::debug!("Receipt verification failed in {}: {}", environment, _err);
            })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Receipt verification in {} returned status={}",
            environment,
            response.status
        );

        Outcome::from_response(response)
    }
}
