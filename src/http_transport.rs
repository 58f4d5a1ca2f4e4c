use std::time::Duration;

use http::{HeaderMap, HeaderName, HeaderValue, Method, header::CONTENT_TYPE};

use crate::transport::{
    Endpoint, ReceiptTransport, TransportError, VerifyReceiptRequest, VerifyReceiptResponse,
};

/// Transport talking to the App Store over HTTPS with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    pub client: reqwest::Client,
    pub method: Method,
    pub headers: HeaderMap,
    /// Deadline applied to every request.
    pub timeout: Option<Duration>,
}

impl Default for HttpTransport {
    fn default() -> Self {
        HttpTransport::new(reqwest::Client::new())
    }
}

impl HttpTransport {
    pub fn new(client: reqwest::Client) -> Self {
        HttpTransport {
            client,
            method: Method::POST,
            headers: HeaderMap::new(),
            timeout: None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header sent with every request.
    pub fn header(mut self, key: &HeaderName, value: &HeaderValue) -> Self {
        self.headers.insert(key, value.to_owned());
        self
    }
}

impl ReceiptTransport for HttpTransport {
    async fn send(
        &self,
        endpoint: &Endpoint,
        request: &VerifyReceiptRequest,
    ) -> Result<VerifyReceiptResponse, TransportError> {
        let body = serde_json::to_vec(request)?;

        let mut builder = self
            .client
            .request(self.method.clone(), endpoint.url.clone())
            .headers(self.headers.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "Receipt verification at {} returned HTTP {}",
                endpoint.url,
                status
            );

            return Err(TransportError::UnexpectedStatus(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
