//! Wire types for the `verifyReceipt` exchange and the transport seam.

use base64::{Engine, prelude::BASE64_STANDARD};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{AnyJson, config::Environment};

/// Request body posted to `verifyReceipt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyReceiptRequest {
    /// Base64 encoded receipt.
    #[serde(rename = "receipt-data")]
    pub receipt_data: String,
    /// App-specific shared secret.
    pub password: String,
}

impl VerifyReceiptRequest {
    /// Builds a request, base64 encoding the receipt unless it already is.
    ///
    /// The receipt content is never inspected.
    pub fn encode(receipt: &str, is_base64_encoded: bool, shared_secret: &str) -> Self {
        let receipt_data = if is_base64_encoded {
            receipt.to_string()
        } else {
            BASE64_STANDARD.encode(receipt)
        };

        VerifyReceiptRequest {
            receipt_data,
            password: shared_secret.to_string(),
        }
    }
}

/// Decoded reply of `verifyReceipt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyReceiptResponse {
    pub status: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<AnyJson>,
}

/// Fully resolved verification endpoint for one environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub environment: Environment,
    pub url: Url,
}

impl Endpoint {
    /// Appends `path` to `host`, keeping any path prefix the host carries.
    pub fn resolve(
        environment: Environment,
        host: &str,
        path: &str,
    ) -> Result<Self, url::ParseError> {
        let url = format!(
            "{}/{}",
            host.trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        Ok(Endpoint {
            environment,
            url: Url::parse(&url)?,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[cfg(feature = "http-client")]
    #[error("HTTP request error: {0}")]
    HttpRequestError(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(StatusCode),

    #[error("Serialization/Deserialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Carries a verification request to an endpoint and decodes the reply.
///
/// Implementations report the decoded status as-is; interpreting it is left to
/// the [`Verifier`](crate::Verifier).
pub trait ReceiptTransport {
    fn send(
        &self,
        endpoint: &Endpoint,
        request: &VerifyReceiptRequest,
    ) -> impl Future<Output = Result<VerifyReceiptResponse, TransportError>>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_encode_raw_receipt() {
        let request = VerifyReceiptRequest::encode("hello", false, "secret");
        assert_eq!(request.receipt_data, "aGVsbG8=");
        assert_eq!(request.password, "secret");

        let decoded = BASE64_STANDARD.decode(&request.receipt_data).unwrap();
        assert_eq!(decoded, b"hello");
    }

    #[test]
    fn test_encode_non_ascii_receipt() {
        let receipt = "receipt \u{00e9}\u{4e2d} {\"signature\" = \"AbC+/=\";}";
        let request = VerifyReceiptRequest::encode(receipt, false, "secret");
        let decoded = BASE64_STANDARD.decode(&request.receipt_data).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), receipt);
    }

    #[test]
    fn test_encode_already_encoded_passes_through() {
        let request = VerifyReceiptRequest::encode("not even base64!", true, "secret");
        assert_eq!(request.receipt_data, "not even base64!");

        let request = VerifyReceiptRequest::encode("", true, "");
        assert_eq!(request.receipt_data, "");
        assert_eq!(request.password, "");
    }

    #[test]
    fn test_request_wire_format() {
        let request = VerifyReceiptRequest::encode("hello", false, "secret");
        let body = serde_json::to_string(&request).unwrap();
        assert!(body.contains("\"receipt-data\":\"aGVsbG8=\""));
        assert!(body.contains("\"password\":\"secret\""));
    }

    #[test]
    fn test_response_wire_format() {
        let response: VerifyReceiptResponse =
            serde_json::from_value(json!({"status": 0, "receipt": {"foo": "bar"}})).unwrap();
        assert_eq!(response.status, 0);
        assert_eq!(response.receipt, Some(json!({"foo": "bar"})));

        let response: VerifyReceiptResponse =
            serde_json::from_value(json!({"status": 21002})).unwrap();
        assert_eq!(response.status, 21002);
        assert!(response.receipt.is_none());

        assert!(
            serde_json::from_value::<VerifyReceiptResponse>(json!({"receipt": {}})).is_err()
        );
    }

    #[test]
    fn test_endpoint_resolve() {
        let endpoint = Endpoint::resolve(
            Environment::Sandbox,
            "https://sandbox.itunes.apple.com",
            "/verifyReceipt",
        )
        .unwrap();
        assert_eq!(endpoint.environment, Environment::Sandbox);
        assert_eq!(
            endpoint.url.as_str(),
            "https://sandbox.itunes.apple.com/verifyReceipt"
        );

        assert!(Endpoint::resolve(Environment::Production, "not a url", "/verifyReceipt").is_err());
    }

    #[test]
    fn test_endpoint_resolve_keeps_host_prefix() {
        let endpoint = Endpoint::resolve(
            Environment::Production,
            "http://proxy.local/apple",
            "/verifyReceipt",
        )
        .unwrap();
        assert_eq!(endpoint.url.as_str(), "http://proxy.local/apple/verifyReceipt");

        let endpoint = Endpoint::resolve(
            Environment::Production,
            "http://proxy.local/apple/",
            "verifyReceipt",
        )
        .unwrap();
        assert_eq!(endpoint.url.as_str(), "http://proxy.local/apple/verifyReceipt");
    }
}
