//! Catalog of the status codes returned by `verifyReceipt`.

/// Status telling us a sandbox receipt was sent to production.
pub const REDIRECT_STATUS: i64 = 21007;

/// Meaning of a single status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusInfo {
    pub code: i64,
    pub message: &'static str,
    /// The receipt is valid and the subscription active.
    pub is_valid: bool,
    pub is_error: bool,
    /// The receipt belongs to the other environment and should be retried there.
    pub is_redirect: bool,
}

impl StatusInfo {
    const fn new(
        code: i64,
        message: &'static str,
        is_valid: bool,
        is_error: bool,
        is_redirect: bool,
    ) -> Self {
        StatusInfo {
            code,
            message,
            is_valid,
            is_error,
            is_redirect,
        }
    }
}

/// Every status code the verifier understands.
pub static KNOWN_STATUSES: &[StatusInfo] = &[
    StatusInfo::new(0, "Active", true, false, false),
    StatusInfo::new(21000, "App store could not read", false, true, false),
    StatusInfo::new(21002, "Data was malformed", false, true, false),
    StatusInfo::new(21003, "Receipt not authenticated", false, true, false),
    StatusInfo::new(21004, "Shared secret does not match", false, true, false),
    StatusInfo::new(21005, "Receipt server unavailable", false, true, false),
    StatusInfo::new(
        21006,
        "Receipt valid but subscription expired",
        false,
        false,
        false,
    ),
    StatusInfo::new(
        REDIRECT_STATUS,
        "Sandbox receipt sent to Production",
        false,
        true,
        true,
    ),
    StatusInfo::new(
        21008,
        "Production receipt sent to Sandbox",
        false,
        true,
        false,
    ),
];

/// Looks up the meaning of a status code.
///
/// Returns `None` for codes outside [`KNOWN_STATUSES`].
pub fn lookup(code: i64) -> Option<&'static StatusInfo> {
    KNOWN_STATUSES.iter().find(|info| info.code == code)
}
