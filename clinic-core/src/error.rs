use thiserror::Error;

/// Error taxonomy shared by every clinic client library.
///
/// Every error is meant to end up as a user-visible notification at the
/// screen boundary; none of them should crash the calling screen.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Caller-side validation failure, detected before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend answered 404. For "get active document" this is a valid
    /// domain state and is mapped to `None` before it reaches the caller.
    #[error("Not found")]
    NotFound,

    /// Connectivity failure on any call. No partial mutation is assumed to
    /// have committed; GET and idempotent PUT calls may be retried as-is.
    #[error("Network error: {0}")]
    Transient(String),

    /// A client-side timeout elapsed before the backend answered. Rendered
    /// distinctly from a generic transport failure so the user is told to
    /// retry rather than shown a vague error.
    #[error("The request expired, please retry")]
    RequestExpired,

    /// The breach-corpus API could not be reached. The password stays
    /// unverified and submission remains blocked (fail-closed).
    #[error("Could not verify the password against the breach corpus")]
    BreachServiceUnavailable,

    /// Non-2xx response with a message from the backend. The message is
    /// shown verbatim when the backend supplied one.
    #[error("{message}")]
    Backend { status: u16, message: String },
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(err: validator::ValidationErrors) -> Self {
        ClientError::Validation(err.to_string())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::RequestExpired
        } else {
            ClientError::Transient(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Transient(format!("Malformed response: {}", err))
    }
}
