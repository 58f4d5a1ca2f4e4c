use serde::Serialize;

use crate::{
    AnyJson,
    errors::{Error, Result},
    status::{self, StatusInfo},
    transport::VerifyReceiptResponse,
};

/// Interpreted result of one receipt verification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub status_code: i64,
    pub message: &'static str,
    pub is_valid: bool,
    pub is_error: bool,
    pub is_redirect: bool,
    /// Receipt document returned by the App Store, passed through untouched.
    pub payload: Option<AnyJson>,
}

impl Outcome {
    pub fn new(info: &StatusInfo, payload: Option<AnyJson>) -> Self {
        Outcome {
            status_code: info.code,
            message: info.message,
            is_valid: info.is_valid,
            is_error: info.is_error,
            is_redirect: info.is_redirect,
            payload,
        }
    }

    /// Interprets a decoded reply.
    ///
    /// Fails with [`Error::UnknownStatus`] when the status is not in the catalog.
    pub fn from_response(response: VerifyReceiptResponse) -> Result<Self> {
        match status::lookup(response.status) {
            Some(info) => Ok(Outcome::new(info, response.receipt)),
            None => Err(Error::UnknownStatus {
                status: response.status,
                receipt: response.receipt,
            }),
        }
    }
}
