use crate::{AnyJson, transport::TransportError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Unknown receipt status code: {status}")]
    UnknownStatus {
        status: i64,
        receipt: Option<AnyJson>,
    },

    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[cfg(feature = "http-client")]
    #[error("HTTP client error: {0}")]
    HttpClientError(#[source] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
